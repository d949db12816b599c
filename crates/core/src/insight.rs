use std::collections::BTreeMap;

use crate::model::{AnswerOption, Category};

/// Share above which a category counts as collaborative (strict).
pub const COLLABORATIVE_THRESHOLD: f64 = 60.0;
/// Share at which one answer dominates a category (inclusive).
pub const DOMINANT_THRESHOLD: f64 = 40.0;

/// Canned reading of a category's answer split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Insight {
    Collaborative,
    SelfHeavy,
    PartnerHeavy,
    Gap,
    Mixed,
}

impl Insight {
    /// First matching rule wins: `Both > 60`, then `Me`, `Partner`,
    /// `Neither` at `>= 40`, otherwise mixed.
    ///
    /// Options missing from `percentages` count as 0%.
    #[must_use]
    pub fn classify(percentages: &BTreeMap<AnswerOption, f64>) -> Self {
        let share = |option: AnswerOption| percentages.get(&option).copied().unwrap_or(0.0);

        if share(AnswerOption::Both) > COLLABORATIVE_THRESHOLD {
            Insight::Collaborative
        } else if share(AnswerOption::Me) >= DOMINANT_THRESHOLD {
            Insight::SelfHeavy
        } else if share(AnswerOption::Partner) >= DOMINANT_THRESHOLD {
            Insight::PartnerHeavy
        } else if share(AnswerOption::Neither) >= DOMINANT_THRESHOLD {
            Insight::Gap
        } else {
            Insight::Mixed
        }
    }

    /// Short heading for the insight card.
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Insight::Collaborative => "A real team",
            Insight::SelfHeavy => "You carry the load",
            Insight::PartnerHeavy => "Your partner leads",
            Insight::Gap => "Roles left open",
            Insight::Mixed => "A shared mix",
        }
    }

    /// Message body, naming the category.
    #[must_use]
    pub fn message(self, category: &Category) -> String {
        let name = category.display_name();
        match self {
            Insight::Collaborative => format!(
                "{name}: you and your partner share most of these roles. Keep making these calls together."
            ),
            Insight::SelfHeavy => format!(
                "{name}: you take on most of these roles yourself. Think about which ones your partner could pick up."
            ),
            Insight::PartnerHeavy => format!(
                "{name}: your partner handles most of these roles. Stay close enough to know where things stand."
            ),
            Insight::Gap => format!(
                "{name}: many of these roles are not covered by either of you. Choose one to own this month."
            ),
            Insight::Mixed => format!(
                "{name}: the roles are spread between you. Check in now and then that the split still feels fair."
            ),
        }
    }
}

/// Rule-selected insight plus its rendered message.
#[must_use]
pub fn insight_for(category: &Category, percentages: &BTreeMap<AnswerOption, f64>) -> (Insight, String) {
    let insight = Insight::classify(percentages);
    (insight, insight.message(category))
}
