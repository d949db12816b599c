use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::error::ConfigError;
use crate::model::{AnswerOption, OptionSet, Question};
use crate::shuffle::{ShuffleSeed, shuffle_in_place};
use crate::time::Clock;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Misuse of the session protocol by the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no question at position {index} (phase {phase:?}, {len} questions)")]
    OutOfRange {
        index: usize,
        len: usize,
        phase: SurveyPhase,
    },
    #[error("session is {0:?}, expected InProgress")]
    NotInProgress(SurveyPhase),
    #[error("already at the first question")]
    NoPrevious,
    #[error("option {0:?} is not in the configured option set")]
    InvalidOption(AnswerOption),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

//
// ─── PHASE ────────────────────────────────────────────────────────────────────
//

/// Coarse lifecycle state of a survey session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyPhase {
    NotStarted,
    InProgress,
    Completed,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// One player's walk through the question pool.
///
/// The session owns its random source so a fixed [`ShuffleSeed`] gives a
/// reproducible order. Every transition either succeeds or leaves the
/// session untouched.
pub struct SurveySession {
    options: OptionSet,
    rng: StdRng,
    clock: Clock,
    questions: Vec<Question>,
    current: usize,
    answers: BTreeMap<usize, AnswerOption>,
    phase: SurveyPhase,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl SurveySession {
    #[must_use]
    pub fn new(options: OptionSet, seed: ShuffleSeed, clock: Clock) -> Self {
        Self {
            options,
            rng: seed.rng(),
            clock,
            questions: Vec::new(),
            current: 0,
            answers: BTreeMap::new(),
            phase: SurveyPhase::NotStarted,
            started_at: None,
            completed_at: None,
        }
    }

    /// Begin (or restart) the survey over `pool`.
    ///
    /// With `shuffle` the questions are put in a uniformly random order drawn
    /// from the session's random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Config(ConfigError::EmptyPool)` if `pool` is empty.
    pub fn start(&mut self, pool: &[Question], shuffle: bool) -> Result<(), SessionError> {
        if pool.is_empty() {
            return Err(ConfigError::EmptyPool.into());
        }

        let mut questions = pool.to_vec();
        if shuffle {
            shuffle_in_place(&mut questions, &mut self.rng);
        }

        self.questions = questions;
        self.current = 0;
        self.answers.clear();
        self.phase = SurveyPhase::InProgress;
        self.started_at = Some(self.clock.now());
        self.completed_at = None;
        Ok(())
    }

    /// The question the player is looking at.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` unless the survey is in progress.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        if self.phase != SurveyPhase::InProgress {
            return Err(self.out_of_range());
        }
        self.questions
            .get(self.current)
            .ok_or_else(|| self.out_of_range())
    }

    /// Record `option` for the current question and move on.
    ///
    /// Overwrites an earlier answer at the same position. Answering the last
    /// question completes the survey.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside the `InProgress` phase.
    /// Returns `SessionError::InvalidOption` if `option` is not configured.
    pub fn submit_answer(&mut self, option: AnswerOption) -> Result<SurveyPhase, SessionError> {
        if self.phase != SurveyPhase::InProgress {
            return Err(SessionError::NotInProgress(self.phase));
        }
        if !self.options.contains(option) {
            return Err(SessionError::InvalidOption(option));
        }

        self.answers.insert(self.current, option);

        if self.current + 1 >= self.questions.len() {
            self.phase = SurveyPhase::Completed;
            self.completed_at = Some(self.clock.now());
        } else {
            self.current += 1;
        }
        Ok(self.phase)
    }

    /// Step back one question. The answer given there is kept for prefill.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotInProgress` outside the `InProgress` phase.
    /// Returns `SessionError::NoPrevious` on the first question.
    pub fn go_to_previous(&mut self) -> Result<(), SessionError> {
        if self.phase != SurveyPhase::InProgress {
            return Err(SessionError::NotInProgress(self.phase));
        }
        if self.current == 0 {
            return Err(SessionError::NoPrevious);
        }
        self.current -= 1;
        Ok(())
    }

    /// Drop all progress and return to `NotStarted`.
    ///
    /// The option set, clock and random stream carry over, so the next
    /// `start` draws a fresh order.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.current = 0;
        self.answers.clear();
        self.phase = SurveyPhase::NotStarted;
        self.started_at = None;
        self.completed_at = None;
    }

    #[must_use]
    pub fn phase(&self) -> SurveyPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SurveyPhase::Completed
    }

    #[must_use]
    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    /// Questions in session order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, AnswerOption> {
        &self.answers
    }

    /// Previously recorded answer at `index`, used to prefill the form.
    #[must_use]
    pub fn answer_for(&self, index: usize) -> Option<AnswerOption> {
        self.answers.get(&index).copied()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    fn out_of_range(&self) -> SessionError {
        SessionError::OutOfRange {
            index: self.current,
            len: self.questions.len(),
            phase: self.phase,
        }
    }
}

impl fmt::Debug for SurveySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurveySession")
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
