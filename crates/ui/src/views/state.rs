use services::SurveyServiceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// The quiz cannot start because the question pool or options are broken.
    Configuration,
    /// The view called the survey out of order (e.g. "Previous" on question one).
    OutOfProtocol,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Configuration => {
                "The quiz is not set up correctly, so it cannot start. Please contact the person who runs it."
            }
            ViewError::OutOfProtocol | ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    #[must_use]
    pub fn from_service(err: &SurveyServiceError) -> Self {
        if err.is_config() {
            return ViewError::Configuration;
        }
        match err {
            SurveyServiceError::Session(_) | SurveyServiceError::NotCompleted(_) => {
                ViewError::OutOfProtocol
            }
            _ => ViewError::Unknown,
        }
    }
}
