use std::collections::BTreeMap;
use thiserror::Error;

use crate::insight::{Insight, insight_for};
use crate::model::{AnswerOption, Category, OptionSet, Question};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("category {0} has no answered questions")]
    EmptyCategory(Category),
}

/// Count and percentage of one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionShare {
    pub option: AnswerOption,
    pub count: usize,
    pub percentage: f64,
}

/// Breakdown of the answers within one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResult {
    category: Category,
    total: usize,
    shares: Vec<OptionShare>,
    insight: Insight,
    message: String,
}

impl CategoryResult {
    /// Tally `answers` over every option in `options`.
    ///
    /// # Errors
    ///
    /// Returns `AggregateError::EmptyCategory` when `answers` is empty.
    pub fn compute(
        category: Category,
        answers: &[AnswerOption],
        options: &OptionSet,
    ) -> Result<Self, AggregateError> {
        if answers.is_empty() {
            return Err(AggregateError::EmptyCategory(category));
        }

        let total = answers.len();
        let shares = tally(answers, options, total);
        let percentages = shares.iter().map(|s| (s.option, s.percentage)).collect();
        let (insight, message) = insight_for(&category, &percentages);

        Ok(Self {
            category,
            total,
            shares,
            insight,
            message,
        })
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Answered questions in this category.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// One entry per configured option, in option-set order.
    #[must_use]
    pub fn shares(&self) -> &[OptionShare] {
        &self.shares
    }

    #[must_use]
    pub fn count(&self, option: AnswerOption) -> usize {
        self.share(option).map_or(0, |s| s.count)
    }

    #[must_use]
    pub fn percentage(&self, option: AnswerOption) -> f64 {
        self.share(option).map_or(0.0, |s| s.percentage)
    }

    #[must_use]
    pub fn percentages(&self) -> BTreeMap<AnswerOption, f64> {
        self.shares.iter().map(|s| (s.option, s.percentage)).collect()
    }

    #[must_use]
    pub fn insight(&self) -> Insight {
        self.insight
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn share(&self, option: AnswerOption) -> Option<&OptionShare> {
        self.shares.iter().find(|s| s.option == option)
    }
}

/// Everything the results page shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurveyReport {
    /// Categories in order of first appearance in the question list.
    pub categories: Vec<CategoryResult>,
    /// Categories dropped because none of their questions were answered.
    pub omitted: Vec<Category>,
    /// All answers across categories, most frequent first.
    pub overall: Vec<OptionShare>,
}

impl SurveyReport {
    #[must_use]
    pub fn category(&self, category: &Category) -> Option<&CategoryResult> {
        self.categories.iter().find(|r| r.category() == category)
    }
}

/// Turns a finished answer set into per-category breakdowns.
pub struct ResultAggregator;

impl ResultAggregator {
    /// Group `answers` by the category of the question at the same index.
    ///
    /// Categories without answers are left out of `categories` and listed
    /// in `omitted` instead.
    #[must_use]
    pub fn aggregate_by_category(
        questions: &[Question],
        answers: &BTreeMap<usize, AnswerOption>,
        options: &OptionSet,
    ) -> SurveyReport {
        let mut grouped: Vec<(Category, Vec<AnswerOption>)> = Vec::new();
        for (index, question) in questions.iter().enumerate() {
            let slot = match grouped.iter().position(|(c, _)| c == question.category()) {
                Some(pos) => pos,
                None => {
                    grouped.push((question.category().clone(), Vec::new()));
                    grouped.len() - 1
                }
            };
            if let Some(answer) = answers.get(&index) {
                grouped[slot].1.push(*answer);
            }
        }

        let mut report = SurveyReport::default();
        for (category, collected) in grouped {
            match CategoryResult::compute(category, &collected, options) {
                Ok(result) => report.categories.push(result),
                Err(AggregateError::EmptyCategory(category)) => report.omitted.push(category),
            }
        }

        let all: Vec<AnswerOption> = questions
            .iter()
            .enumerate()
            .filter_map(|(index, _)| answers.get(&index).copied())
            .collect();
        let mut overall = tally(&all, options, all.len());
        // Stable sort keeps option order among ties.
        overall.sort_by(|a, b| b.count.cmp(&a.count));
        report.overall = overall;

        report
    }
}

#[allow(clippy::cast_precision_loss)]
fn tally(answers: &[AnswerOption], options: &OptionSet, total: usize) -> Vec<OptionShare> {
    options
        .iter()
        .map(|option| {
            let count = answers.iter().filter(|a| **a == option).count();
            let percentage = if total == 0 {
                0.0
            } else {
                100.0 * count as f64 / total as f64
            };
            OptionShare {
                option,
                count,
                percentage,
            }
        })
        .collect()
}
