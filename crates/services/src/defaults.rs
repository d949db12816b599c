use quiz_core::model::{Category, Question};

pub const DEFAULT_TITLE: &str = "Money Roles!";

const DAY_TO_DAY: &[&str] = &[
    "Who pays the monthly bills?",
    "Who does the grocery shopping and keeps an eye on what it costs?",
    "Who checks the bank balance during the week?",
    "Who decides what you spend on eating out?",
    "Who keeps track of subscriptions and cancels the ones you no longer use?",
    "Who handles money for gifts and birthdays?",
];

const LONG_TERM: &[&str] = &[
    "Who makes decisions about saving for retirement?",
    "Who chooses how your savings are invested?",
    "Who plans for big purchases like a car or a home?",
    "Who keeps the emergency fund topped up?",
    "Who deals with insurance policies?",
    "Who talks to financial advisers or the bank about loans?",
];

/// Built-in question pool, used when no config file is given.
#[must_use]
pub fn builtin_questions() -> Vec<Question> {
    let day = DAY_TO_DAY.iter().map(|text| (*text, Category::DayToDay));
    let long = LONG_TERM.iter().map(|text| (*text, Category::LongTerm));
    day.chain(long)
        .filter_map(|(text, category)| Question::new(text, category).ok())
        .collect()
}
