use dioxus::prelude::*;

use crate::vm::{BarVm, CategoryChartVm, ResultsVm};

#[derive(Props, Clone, PartialEq)]
pub struct ResultsPanelProps {
    pub results: ResultsVm,
}

#[component]
pub fn ResultsPanel(props: ResultsPanelProps) -> Element {
    let results = props.results;
    let charts = results.categories.iter().map(|chart| {
        let name = chart.name.clone();
        rsx! {
            CategoryCard { key: "{name}", chart: chart.clone() }
        }
    });

    rsx! {
        div { class: "results",
            if let Some(label) = results.completed_label.clone() {
                p { class: "results__completed", "{label}" }
            }
            div { class: "results__categories",
                {charts}
            }
            if let Some(note) = results.omitted_note.clone() {
                p { class: "results__omitted", "{note}" }
            }
            OverallBars { bars: results.bars.clone() }
        }
    }
}

#[component]
fn CategoryCard(chart: CategoryChartVm) -> Element {
    let wedges = chart.slices.iter().map(|slice| {
        let color = slice.color;
        if slice.full_circle {
            rsx! {
                circle { cx: "50", cy: "50", r: "45", fill: "{color}" }
            }
        } else {
            let d = slice.path.clone();
            rsx! {
                path { d: "{d}", fill: "{color}" }
            }
        }
    });
    let legend = chart.legend.iter().map(|item| {
        let swatch = format!("background: {};", item.color);
        let label = item.label;
        let detail = item.detail.clone();
        rsx! {
            li { class: "legend__item",
                span { class: "legend__swatch", style: "{swatch}" }
                span { class: "legend__label", "{label}" }
                span { class: "legend__detail", "{detail}" }
            }
        }
    });

    rsx! {
        section { class: "category-card",
            header { class: "category-card__header",
                h3 { "{chart.name}" }
                p { class: "category-card__total", "{chart.total_label}" }
            }
            div { class: "category-card__body",
                svg { class: "pie", view_box: "0 0 100 100", width: "180", height: "180",
                    {wedges}
                }
                ul { class: "legend", {legend} }
            }
            div { class: "insight",
                h4 { class: "insight__headline", "{chart.insight_headline}" }
                p { class: "insight__message", "{chart.insight_message}" }
            }
        }
    }
}

#[component]
fn OverallBars(bars: Vec<BarVm>) -> Element {
    let rows = bars.iter().map(|bar| {
        let fill = format!("width: {:.1}%; background: {};", bar.width_percent, bar.color);
        let label = bar.label;
        let count = bar.count;
        rsx! {
            div { class: "bar-row",
                span { class: "bar-row__label", "{label}" }
                div { class: "bar-row__track",
                    div { class: "bar-row__fill", style: "{fill}" }
                }
                span { class: "bar-row__count", "{count}" }
            }
        }
    });

    rsx! {
        section { class: "overall",
            h3 { "All answers" }
            div { class: "bars", {rows} }
        }
    }
}
