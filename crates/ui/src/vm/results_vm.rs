use std::f64::consts::PI;

use chrono::{DateTime, Utc};
use quiz_core::model::AnswerOption;
use quiz_core::{CategoryResult, OptionShare, SurveyReport};

use crate::vm::time_fmt::format_completed_at;

const PIE_CENTER: f64 = 50.0;
const PIE_RADIUS: f64 = 45.0;

#[must_use]
pub fn option_color(option: AnswerOption) -> &'static str {
    match option {
        AnswerOption::Me => "#f5724b",
        AnswerOption::Partner => "#8f4e52",
        AnswerOption::Neither => "#682d24",
        AnswerOption::Both => "#e8a87c",
        AnswerOption::NotApplicable => "#c9b8b5",
    }
}

/// One wedge of a category pie.
#[derive(Clone, Debug, PartialEq)]
pub struct PieSliceVm {
    pub label: &'static str,
    pub color: &'static str,
    pub percent_label: String,
    /// SVG path for the wedge; empty when `full_circle` is set.
    pub path: String,
    pub full_circle: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItemVm {
    pub label: &'static str,
    pub color: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryChartVm {
    pub name: String,
    pub total_label: String,
    pub slices: Vec<PieSliceVm>,
    pub legend: Vec<LegendItemVm>,
    pub insight_headline: &'static str,
    pub insight_message: String,
}

/// Horizontal bar in the overall chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarVm {
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
    /// Width relative to the largest bar, 0-100.
    pub width_percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsVm {
    pub completed_label: Option<String>,
    pub categories: Vec<CategoryChartVm>,
    pub omitted_note: Option<String>,
    pub bars: Vec<BarVm>,
}

#[must_use]
pub fn map_results(report: &SurveyReport, completed_at: Option<DateTime<Utc>>) -> ResultsVm {
    let omitted_note = if report.omitted.is_empty() {
        None
    } else {
        let names = report
            .omitted
            .iter()
            .map(|c| c.display_name().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("No answers yet for: {names}"))
    };

    ResultsVm {
        completed_label: completed_at.map(|at| format!("Completed {}", format_completed_at(at))),
        categories: report.categories.iter().map(map_category).collect(),
        omitted_note,
        bars: map_bars(&report.overall),
    }
}

fn map_category(result: &CategoryResult) -> CategoryChartVm {
    let total = result.total();
    let total_label = if total == 1 {
        "1 answer".to_string()
    } else {
        format!("{total} answers")
    };

    let legend = result
        .shares()
        .iter()
        .map(|share| LegendItemVm {
            label: share.option.label(),
            color: option_color(share.option),
            detail: format!("{:.0}% ({})", share.percentage, share.count),
        })
        .collect();

    CategoryChartVm {
        name: result.category().display_name().to_string(),
        total_label,
        slices: pie_slices(result.shares()),
        legend,
        insight_headline: result.insight().headline(),
        insight_message: result.message().to_string(),
    }
}

/// Wedges for every non-zero share, clockwise from twelve o'clock.
#[must_use]
pub fn pie_slices(shares: &[OptionShare]) -> Vec<PieSliceVm> {
    let mut start = 0.0_f64;
    shares
        .iter()
        .filter(|share| share.count > 0)
        .map(|share| {
            let fraction = share.percentage / 100.0;
            let full_circle = fraction >= 1.0 - 1e-9;
            let path = if full_circle {
                String::new()
            } else {
                wedge_path(start, start + fraction)
            };
            start += fraction;
            PieSliceVm {
                label: share.option.label(),
                color: option_color(share.option),
                percent_label: format!("{:.0}%", share.percentage),
                path,
                full_circle,
            }
        })
        .collect()
}

fn point_at(fraction: f64) -> (f64, f64) {
    let angle = 2.0 * PI * fraction - PI / 2.0;
    (
        PIE_CENTER + PIE_RADIUS * angle.cos(),
        PIE_CENTER + PIE_RADIUS * angle.sin(),
    )
}

fn wedge_path(from: f64, to: f64) -> String {
    let (x1, y1) = point_at(from);
    let (x2, y2) = point_at(to);
    let large_arc = u8::from(to - from > 0.5);
    format!(
        "M {PIE_CENTER} {PIE_CENTER} L {x1:.3} {y1:.3} A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
    )
}

fn map_bars(overall: &[OptionShare]) -> Vec<BarVm> {
    let max = overall.iter().map(|s| s.count).max().unwrap_or(0);
    overall
        .iter()
        .map(|share| {
            #[allow(clippy::cast_precision_loss)]
            let width_percent = if max == 0 {
                0.0
            } else {
                100.0 * share.count as f64 / max as f64
            };
            BarVm {
                label: share.option.label(),
                color: option_color(share.option),
                count: share.count,
                width_percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Category, OptionSet, Question};
    use quiz_core::time::fixed_now;
    use quiz_core::ResultAggregator;
    use std::collections::BTreeMap;

    fn report(list: &[(Category, AnswerOption)]) -> SurveyReport {
        let questions: Vec<_> = list
            .iter()
            .enumerate()
            .map(|(i, (c, _))| Question::new(format!("Q{i}"), c.clone()).unwrap())
            .collect();
        let answers: BTreeMap<usize, AnswerOption> =
            list.iter().map(|(_, a)| *a).enumerate().collect();
        ResultAggregator::aggregate_by_category(&questions, &answers, &OptionSet::default())
    }

    #[test]
    fn single_answer_category_is_a_full_circle() {
        let r = report(&[(Category::DayToDay, AnswerOption::Both)]);
        let vm = map_results(&r, Some(fixed_now()));
        let slices = &vm.categories[0].slices;
        assert_eq!(slices.len(), 1);
        assert!(slices[0].full_circle);
        assert_eq!(slices[0].percent_label, "100%");
        assert_eq!(vm.categories[0].total_label, "1 answer");
        assert_eq!(vm.categories[0].insight_headline, "A real team");
        assert!(vm.completed_label.unwrap().starts_with("Completed 14 November 2023"));
    }

    #[test]
    fn zero_count_options_have_no_wedge_but_stay_in_legend() {
        let r = report(&[
            (Category::LongTerm, AnswerOption::Me),
            (Category::LongTerm, AnswerOption::Partner),
            (Category::LongTerm, AnswerOption::Partner),
        ]);
        let vm = map_results(&r, None);
        let chart = &vm.categories[0];
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.legend.len(), 5);
        assert_eq!(chart.slices[1].percent_label, "67%");
        // The larger wedge spans more than half the circle.
        assert!(chart.slices[1].path.contains(" 0 1 1 "));
        assert!(chart.slices[0].path.contains(" 0 0 1 "));
        assert!(vm.completed_label.is_none());
    }

    #[test]
    fn bars_scale_to_the_largest_count() {
        let r = report(&[
            (Category::DayToDay, AnswerOption::Me),
            (Category::DayToDay, AnswerOption::Me),
            (Category::DayToDay, AnswerOption::Both),
        ]);
        let vm = map_results(&r, None);
        assert_eq!(vm.bars[0].label, "Me");
        assert!((vm.bars[0].width_percent - 100.0).abs() < 1e-9);
        assert!((vm.bars[1].width_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn omitted_categories_are_noted() {
        let mut r = report(&[(Category::DayToDay, AnswerOption::Me)]);
        r.omitted.push(Category::LongTerm);
        let vm = map_results(&r, None);
        assert_eq!(
            vm.omitted_note.as_deref(),
            Some("No answers yet for: Long-term decisions")
        );
    }
}
