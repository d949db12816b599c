use quiz_core::SurveySession;
use quiz_core::model::AnswerOption;
use services::{SurveyProgress, SurveyService};

use crate::views::ViewError;
use crate::vm::results_vm::{ResultsVm, map_results};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(AnswerOption),
    Next,
    Previous,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed,
    Restarted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionButtonVm {
    pub option: AnswerOption,
    pub label: &'static str,
    pub selected: bool,
}

/// Everything needed to draw the question page.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub text: String,
    pub category_label: String,
    pub progress_label: String,
    pub progress_percent: f64,
    pub options: Vec<OptionButtonVm>,
    pub can_go_back: bool,
    pub can_submit: bool,
    pub next_label: &'static str,
}

/// Drives one player's survey session from UI intents.
pub struct QuizVm {
    session: SurveySession,
    selected: Option<AnswerOption>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: SurveySession) -> Self {
        let selected = session.answer_for(session.current_index());
        Self { session, selected }
    }

    #[must_use]
    pub fn session(&self) -> &SurveySession {
        &self.session
    }

    #[must_use]
    pub fn selected(&self) -> Option<AnswerOption> {
        self.selected
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn progress(&self) -> SurveyProgress {
        SurveyProgress::of(&self.session)
    }

    /// Snapshot of the current question, or `None` when no question is showing.
    #[must_use]
    pub fn question(&self) -> Option<QuestionVm> {
        let question = self.session.current_question().ok()?;
        let progress = self.progress();
        let is_last = progress.position == progress.total;
        let options = self
            .session
            .options()
            .iter()
            .map(|option| OptionButtonVm {
                option,
                label: option.label(),
                selected: self.selected == Some(option),
            })
            .collect();

        Some(QuestionVm {
            text: question.text().to_string(),
            category_label: question.category().display_name().to_string(),
            progress_label: format!("Question {} of {}", progress.position, progress.total),
            progress_percent: progress.percent(),
            options,
            can_go_back: self.session.current_index() > 0,
            can_submit: self.selected.is_some(),
            next_label: if is_last { "See my results" } else { "Next" },
        })
    }

    /// Apply one user action.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::OutOfProtocol` when the action does not fit the
    /// session's state, `ViewError::Configuration` if a restart cannot find
    /// any questions.
    pub fn dispatch(
        &mut self,
        service: &SurveyService,
        intent: QuizIntent,
    ) -> Result<QuizOutcome, ViewError> {
        match intent {
            QuizIntent::Select(option) => {
                if !self.session.options().contains(option) {
                    return Err(ViewError::OutOfProtocol);
                }
                self.selected = Some(option);
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Next => {
                let Some(option) = self.selected else {
                    return Err(ViewError::OutOfProtocol);
                };
                let result = service
                    .answer_current(&mut self.session, option)
                    .map_err(|err| ViewError::from_service(&err))?;
                if result.is_complete() {
                    self.selected = None;
                    return Ok(QuizOutcome::Completed);
                }
                self.selected = self.session.answer_for(self.session.current_index());
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Previous => {
                service
                    .go_back(&mut self.session)
                    .map_err(|err| ViewError::from_service(&err))?;
                self.selected = self.session.answer_for(self.session.current_index());
                Ok(QuizOutcome::Continue)
            }
            QuizIntent::Restart => {
                service.restart(&mut self.session);
                self.selected = None;
                Ok(QuizOutcome::Restarted)
            }
        }
    }

    /// Results page data for a completed survey.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::OutOfProtocol` before the survey is complete.
    pub fn results(&self, service: &SurveyService) -> Result<ResultsVm, ViewError> {
        let report = service
            .report(&self.session)
            .map_err(|err| ViewError::from_service(&err))?;
        Ok(map_results(&report, self.session.completed_at()))
    }
}

/// # Errors
///
/// Returns `ViewError::Configuration` when the quiz has no questions.
/// Returns `ViewError::Unknown` for other failures.
pub fn start_quiz(service: &SurveyService) -> Result<QuizVm, ViewError> {
    match service.start_session() {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(err) if err.is_config() => Err(ViewError::Configuration),
        Err(_) => Err(ViewError::Unknown),
    }
}
