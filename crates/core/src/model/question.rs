use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::Category;

/// One survey question. Identity is its position within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    text: String,
    category: Category,
}

/// Wire shape of a question; deserialization goes through [`Question::new`].
#[derive(Deserialize)]
struct RawQuestion {
    text: String,
    category: Category,
}

impl TryFrom<RawQuestion> for Question {
    type Error = ConfigError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Question::new(raw.text, raw.category)
    }
}

impl Question {
    /// Create a question, trimming the text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyQuestionText` if the text is blank.
    /// The reported index is 0; use [`Question::validate_pool`] for pool positions.
    pub fn new(text: impl Into<String>, category: Category) -> Result<Self, ConfigError> {
        let raw = text.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyQuestionText { index: 0 });
        }
        Ok(Self {
            text: trimmed.to_string(),
            category,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Check a deserialized pool: non-empty, and every question has text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyPool` or `ConfigError::EmptyQuestionText`.
    pub fn validate_pool(pool: &[Question]) -> Result<(), ConfigError> {
        if pool.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        if let Some(index) = pool.iter().position(|q| q.text.trim().is_empty()) {
            return Err(ConfigError::EmptyQuestionText { index });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text() {
        let q = Question::new("  Who pays rent?  ", Category::DayToDay).unwrap();
        assert_eq!(q.text(), "Who pays rent?");
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = Question::new("   ", Category::LongTerm).unwrap_err();
        assert_eq!(err, ConfigError::EmptyQuestionText { index: 0 });
    }

    #[test]
    fn validate_pool_reports_position() {
        let ok = Question::new("A", Category::DayToDay).unwrap();
        let blank: Question = raw_question(" ");
        let err = Question::validate_pool(&[ok, blank]).unwrap_err();
        assert_eq!(err, ConfigError::EmptyQuestionText { index: 1 });
        assert_eq!(Question::validate_pool(&[]), Err(ConfigError::EmptyPool));
    }

    // Only reachable from inside the crate; `new` and serde both reject blanks.
    fn raw_question(text: &str) -> Question {
        Question {
            text: text.to_string(),
            category: Category::DayToDay,
        }
    }
}
