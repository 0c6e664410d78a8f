//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use assess_core::NavigationError;
use assess_core::model::{CatalogError, OptionId, QuestionId, QuestionKind};

/// Errors emitted while loading a question catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("failed to read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// A submitted answer that does not fit the current question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("question {question_id} has no option {option_id}")]
    UnknownOption {
        question_id: QuestionId,
        option_id: OptionId,
    },
    #[error("{value} is outside the {min}..={max} scale of question {question_id}")]
    OutOfScale {
        question_id: QuestionId,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("{kind:?} question {question_id} cannot take this kind of answer")]
    WrongShape {
        question_id: QuestionId,
        kind: QuestionKind,
    },
}

/// Errors emitted by assessment runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunError {
    #[error("assessment already completed")]
    Completed,
    #[error("assessment is not complete yet")]
    NotComplete,
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
