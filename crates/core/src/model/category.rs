use serde::{Deserialize, Serialize};
use std::fmt;

/// Grouping tag on a question, used to segment the results.
///
/// The two built-in categories cover day-to-day and long-term money
/// decisions. Any other key read from configuration becomes `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    DayToDay,
    LongTerm,
    Other(String),
}

impl Category {
    /// Parse a configuration key (`day_to_day`, `long_term`, or a custom name).
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let trimmed = key.trim();
        match trimmed.to_ascii_lowercase().replace('-', "_").as_str() {
            "day_to_day" => Self::DayToDay,
            "long_term" => Self::LongTerm,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Stable key used in configuration files.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::DayToDay => "day_to_day",
            Self::LongTerm => "long_term",
            Self::Other(name) => name,
        }
    }

    /// Human-readable name shown above charts and inside insight messages.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::DayToDay => "Day-to-day decisions",
            Self::LongTerm => "Long-term decisions",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.key().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
