//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::{ConfigError, SessionError, SurveyPhase};

/// Errors emitted while loading quiz configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse quiz config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize quiz config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Errors emitted by `SurveyService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SurveyServiceError {
    #[error("survey is {0:?}; results need a completed survey")]
    NotCompleted(SurveyPhase),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl SurveyServiceError {
    /// True when the failure comes from configuration rather than caller misuse.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, SurveyServiceError::Session(SessionError::Config(_)))
    }
}
