use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use assess_core::model::{AnswerSet, AnswerValue, Catalog, Question, ResponseFormat, Section};
use assess_core::{NavigationState, Navigator, Progress};

use super::progress::AssessmentProgress;
use crate::Clock;
use crate::error::{AnswerError, RunError};

/// Result of a successful advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to another question.
    Next,
    /// The last question was answered; the run is complete.
    Completed,
}

/// One in-memory pass through the catalog.
///
/// Holds the navigation state and answers, validates answers against the current
/// question, and refuses to advance past an unanswered question.
pub struct AssessmentRun {
    catalog: Arc<Catalog>,
    clock: Clock,
    state: NavigationState,
    answers: AnswerSet,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl AssessmentRun {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, clock: Clock) -> Self {
        let started_at = clock.now();
        info!(questions = catalog.total_questions(), "assessment started");
        Self {
            catalog,
            clock,
            state: NavigationState::start(),
            answers: AnswerSet::new(),
            started_at,
            completed_at: None,
        }
    }

    fn navigator(&self) -> Navigator<'_> {
        Navigator::new(&self.catalog)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.navigator().current_question(self.state)
    }

    #[must_use]
    pub fn current_section(&self) -> Option<&Section> {
        self.navigator().current_section(self.state)
    }

    /// The recorded answer for the current question, if any.
    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerValue> {
        let question = self.current_question()?;
        self.answers.get(question.id())
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.navigator().progress(&self.answers)
    }

    /// Progress plus position details for headers.
    #[must_use]
    pub fn progress_view(&self) -> AssessmentProgress {
        AssessmentProgress::new(self.progress(), self.state, self.is_last_question())
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.navigator().can_advance(self.state, &self.answers)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.navigator().is_last_question(self.state)
    }

    /// Record an answer for the current question, replacing any earlier one.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Completed` once the run is finished, and
    /// `RunError::Answer` when the value does not fit the question.
    pub fn answer_current(&mut self, value: AnswerValue) -> Result<(), RunError> {
        let question = self.current_question().ok_or(RunError::Completed)?;
        validate_answer(question, &value)?;
        let question_id = question.id().clone();

        debug!(question = %question_id, ?value, "answer recorded");
        let answers = std::mem::take(&mut self.answers);
        self.answers = self.navigator().record_answer(answers, question_id, value);
        Ok(())
    }

    /// Move to the next question, completing the run after the last one.
    ///
    /// # Errors
    ///
    /// Returns `RunError::Navigation` if the current question is unanswered or the
    /// run is already complete; the position is left unchanged.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, RunError> {
        let next = self
            .navigator()
            .advance_answered(self.state, &self.answers)
            .inspect_err(|err| warn!(%err, "advance rejected"))?;
        self.state = next;

        if next.is_complete() {
            let completed_at = self.clock.now();
            self.completed_at = Some(completed_at);
            info!(answered = self.answers.len(), %completed_at, "assessment completed");
            return Ok(AdvanceOutcome::Completed);
        }

        debug!(?next, "advanced");
        Ok(AdvanceOutcome::Next)
    }
}

/// Check that `value` is a legal answer for `question`.
///
/// # Errors
///
/// Returns `AnswerError` for unknown options, out-of-range scale values, or a
/// value of the wrong shape.
pub fn validate_answer(question: &Question, value: &AnswerValue) -> Result<(), AnswerError> {
    match (question.format(), value) {
        (ResponseFormat::Choice(_), AnswerValue::Choice(option_id)) => {
            if question.option(option_id).is_none() {
                return Err(AnswerError::UnknownOption {
                    question_id: question.id().clone(),
                    option_id: option_id.clone(),
                });
            }
            Ok(())
        }
        (ResponseFormat::Scale(scale), AnswerValue::Scale(v)) => {
            if !scale.contains(*v) {
                return Err(AnswerError::OutOfScale {
                    question_id: question.id().clone(),
                    value: *v,
                    min: scale.min(),
                    max: scale.max(),
                });
            }
            Ok(())
        }
        _ => Err(AnswerError::WrongShape {
            question_id: question.id().clone(),
            kind: question.kind(),
        }),
    }
}

impl fmt::Debug for AssessmentRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentRun")
            .field("catalog", &self.catalog.title())
            .field("state", &self.state)
            .field("answered", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}
