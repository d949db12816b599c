use quiz_core::SurveySession;

/// Aggregated view of survey progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyProgress {
    pub total: usize,
    pub answered: usize,
    /// 1-based position of the current question; equals `total` once complete.
    pub position: usize,
    pub is_complete: bool,
}

impl SurveyProgress {
    #[must_use]
    pub fn of(session: &SurveySession) -> Self {
        let total = session.questions().len();
        let position = if total == 0 {
            0
        } else {
            (session.current_index() + 1).min(total)
        };
        Self {
            total,
            answered: session.answers().len(),
            position,
            is_complete: session.is_complete(),
        }
    }

    /// Completed fraction in percent, for the progress bar.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.answered as f64 / self.total as f64
    }
}
