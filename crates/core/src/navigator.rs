//! Question sequencing and progress for a single assessment run.
//!
//! Navigation state and answers are plain owned values. Every operation takes
//! them in and hands a new value back, so recording an answer can never move
//! the position and advancing can never touch the answers.

use thiserror::Error;

use crate::model::{AnswerSet, AnswerValue, Catalog, Question, QuestionId, Section};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("question {question_id} must be answered before advancing")]
    Unanswered { question_id: QuestionId },

    #[error("assessment already completed")]
    Completed,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Current (section, question) coordinates inside the catalog.
///
/// Only `Navigator` produces positions other than the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    section: usize,
    question: usize,
}

impl Position {
    #[must_use]
    pub fn section(self) -> usize {
        self.section
    }

    #[must_use]
    pub fn question(self) -> usize {
        self.question
    }
}

/// Where a run currently is. `Complete` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationState {
    At(Position),
    Complete,
}

impl NavigationState {
    /// First question of the first section.
    #[must_use]
    pub fn start() -> Self {
        NavigationState::At(Position {
            section: 0,
            question: 0,
        })
    }

    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self {
            NavigationState::At(position) => Some(position),
            NavigationState::Complete => None,
        }
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        matches!(self, NavigationState::Complete)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::start()
    }
}

/// Answered vs. total questions, independent of the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    /// `100 * answered / total`, or 0 for an empty catalog.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.answered as f64 / self.total as f64
    }

    /// Percentage rounded to the nearest whole number, for headers.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percent(self) -> u32 {
        self.percent().round() as u32
    }

    /// 1-based number of the question being worked on ("Question n of N").
    #[must_use]
    pub fn display_number(self) -> usize {
        (self.answered + 1).min(self.total.max(1))
    }

    #[must_use]
    pub fn remaining(self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}

//
// ─── NAVIGATOR ─────────────────────────────────────────────────────────────────
//

/// Pure state machine over a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct Navigator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Navigator<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Store `value` under `question_id`, overwriting any prior answer.
    ///
    /// The value is not checked against the question; callers validate.
    #[must_use]
    pub fn record_answer(
        &self,
        answers: AnswerSet,
        question_id: QuestionId,
        value: AnswerValue,
    ) -> AnswerSet {
        answers.with_answer(question_id, value)
    }

    /// Next position: next question in the section, else the first question of the
    /// next section, else `Complete`. Advancing a completed run stays complete.
    #[must_use]
    pub fn advance(&self, state: NavigationState) -> NavigationState {
        let NavigationState::At(Position { section, question }) = state else {
            return NavigationState::Complete;
        };

        let section_len = self.catalog.section(section).map_or(0, Section::len);
        if question + 1 < section_len {
            return NavigationState::At(Position {
                section,
                question: question + 1,
            });
        }
        if section + 1 < self.catalog.section_count() {
            return NavigationState::At(Position {
                section: section + 1,
                question: 0,
            });
        }
        NavigationState::Complete
    }

    /// Like `advance`, but only once the current question has an answer.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::Completed` if the run is already complete and
    /// `NavigationError::Unanswered` if the current question has no answer yet.
    pub fn advance_answered(
        &self,
        state: NavigationState,
        answers: &AnswerSet,
    ) -> Result<NavigationState, NavigationError> {
        let question = self
            .current_question(state)
            .ok_or(NavigationError::Completed)?;
        if !answers.contains(question.id()) {
            return Err(NavigationError::Unanswered {
                question_id: question.id().clone(),
            });
        }
        Ok(self.advance(state))
    }

    /// The question to render, `None` once complete.
    #[must_use]
    pub fn current_question(&self, state: NavigationState) -> Option<&'a Question> {
        let Position { section, question } = state.position()?;
        self.catalog.question_at(section, question)
    }

    #[must_use]
    pub fn current_section(&self, state: NavigationState) -> Option<&'a Section> {
        let position = state.position()?;
        self.catalog.section(position.section)
    }

    #[must_use]
    pub fn progress(&self, answers: &AnswerSet) -> Progress {
        Progress {
            answered: answers.len(),
            total: self.catalog.total_questions(),
        }
    }

    /// Whether the "next" affordance should be enabled.
    #[must_use]
    pub fn can_advance(&self, state: NavigationState, answers: &AnswerSet) -> bool {
        self.current_question(state)
            .is_some_and(|question| answers.contains(question.id()))
    }

    /// True when the current question is the final one of the catalog.
    #[must_use]
    pub fn is_last_question(&self, state: NavigationState) -> bool {
        !state.is_complete() && self.advance(state).is_complete()
    }
}
