use thiserror::Error;

use crate::model::AnswerOption;

/// Problems with the question pool or option set. Fatal at startup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question pool is empty")]
    EmptyPool,
    #[error("option set is empty")]
    EmptyOptions,
    #[error("option {0:?} is listed more than once")]
    DuplicateOption(AnswerOption),
    #[error("question {index} has no text")]
    EmptyQuestionText { index: usize },
    #[error("unknown answer option: {0}")]
    UnknownOption(String),
}
