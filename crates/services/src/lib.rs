#![forbid(unsafe_code)]

pub mod config;
pub mod defaults;
pub mod error;
pub mod progress;
pub mod survey_service;

pub use quiz_core::Clock;

pub use config::QuizConfig;
pub use error::{ConfigLoadError, SurveyServiceError};
pub use progress::SurveyProgress;
pub use survey_service::{SurveyAnswerResult, SurveyService};
