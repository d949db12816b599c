use std::sync::Arc;

use quiz_core::model::{AnswerOption, OptionSet, Question};
use quiz_core::{Clock, ResultAggregator, ShuffleSeed, SurveyPhase, SurveyReport, SurveySession};

use crate::config::QuizConfig;
use crate::error::{ConfigLoadError, SurveyServiceError};
use crate::progress::SurveyProgress;

/// Result of answering a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyAnswerResult {
    pub index: usize,
    pub option: AnswerOption,
    pub phase: SurveyPhase,
    pub progress: SurveyProgress,
}

impl SurveyAnswerResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SurveyPhase::Completed
    }
}

/// Orchestrates survey sessions over a shared, read-only question pool.
///
/// One `SurveySession` per player; the service itself holds no per-player
/// state and can be shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SurveyService {
    clock: Clock,
    title: String,
    questions: Arc<[Question]>,
    options: OptionSet,
    shuffle: bool,
    seed: ShuffleSeed,
}

impl SurveyService {
    #[must_use]
    pub fn new(clock: Clock, questions: Vec<Question>, options: OptionSet) -> Self {
        Self {
            clock,
            title: crate::defaults::DEFAULT_TITLE.to_string(),
            questions: questions.into(),
            options,
            shuffle: true,
            seed: ShuffleSeed::Entropy,
        }
    }

    /// Build from a loaded config.
    ///
    /// An empty question pool is accepted here; it is reported when a
    /// session is started so the UI can show a notice.
    ///
    /// # Errors
    ///
    /// Returns `ConfigLoadError::Invalid` if the option set is invalid or a
    /// question has blank text.
    pub fn from_config(config: &QuizConfig, clock: Clock) -> Result<Self, ConfigLoadError> {
        let options = config.option_set()?;
        if !config.questions.is_empty() {
            Question::validate_pool(&config.questions)?;
        }
        Ok(Self::new(clock, config.questions.clone(), options)
            .with_title(config.title.clone())
            .with_shuffle(config.shuffle)
            .with_seed(config.shuffle_seed()))
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: ShuffleSeed) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// A fresh `NotStarted` session bound to this service's options and seed.
    #[must_use]
    pub fn new_session(&self) -> SurveySession {
        SurveySession::new(self.options.clone(), self.seed, self.clock)
    }

    /// Start (or restart) `session` over the configured pool.
    ///
    /// # Errors
    ///
    /// Returns `SurveyServiceError::Session` wrapping `ConfigError::EmptyPool`
    /// when there are no questions.
    pub fn start(&self, session: &mut SurveySession) -> Result<(), SurveyServiceError> {
        if let Err(err) = session.start(&self.questions, self.shuffle) {
            tracing::error!(error = %err, "cannot start survey");
            return Err(err.into());
        }
        tracing::info!(
            questions = self.questions.len(),
            shuffle = self.shuffle,
            "survey started"
        );
        Ok(())
    }

    /// Convenience: new session, already started.
    ///
    /// # Errors
    ///
    /// See [`SurveyService::start`].
    pub fn start_session(&self) -> Result<SurveySession, SurveyServiceError> {
        let mut session = self.new_session();
        self.start(&mut session)?;
        Ok(session)
    }

    /// Record `option` for the current question.
    ///
    /// # Errors
    ///
    /// Returns `SurveyServiceError::Session` if the session is not in progress
    /// or the option is not configured.
    pub fn answer_current(
        &self,
        session: &mut SurveySession,
        option: AnswerOption,
    ) -> Result<SurveyAnswerResult, SurveyServiceError> {
        let index = session.current_index();
        let phase = session.submit_answer(option)?;
        tracing::debug!(index, option = option.key(), "answer recorded");

        if phase == SurveyPhase::Completed {
            tracing::info!(answers = session.answers().len(), "survey completed");
        }

        Ok(SurveyAnswerResult {
            index,
            option,
            phase,
            progress: SurveyProgress::of(session),
        })
    }

    /// Step back one question.
    ///
    /// # Errors
    ///
    /// Returns `SurveyServiceError::Session` on the first question or outside
    /// the `InProgress` phase.
    pub fn go_back(&self, session: &mut SurveySession) -> Result<(), SurveyServiceError> {
        session.go_to_previous()?;
        tracing::debug!(index = session.current_index(), "moved to previous question");
        Ok(())
    }

    pub fn restart(&self, session: &mut SurveySession) {
        session.reset();
        tracing::info!("survey reset");
    }

    /// Per-category breakdown of a completed session.
    ///
    /// # Errors
    ///
    /// Returns `SurveyServiceError::NotCompleted` before the last answer.
    pub fn report(&self, session: &SurveySession) -> Result<SurveyReport, SurveyServiceError> {
        if !session.is_complete() {
            return Err(SurveyServiceError::NotCompleted(session.phase()));
        }

        let report = ResultAggregator::aggregate_by_category(
            session.questions(),
            session.answers(),
            session.options(),
        );
        for category in &report.omitted {
            tracing::warn!(category = category.key(), "category has no answers, omitted from results");
        }
        Ok(report)
    }
}
