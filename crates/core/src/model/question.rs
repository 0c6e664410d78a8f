use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::dimension::CoachDimension;
use crate::model::ids::{OptionId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("{kind:?} question requires a {expected} response format")]
    FormatMismatch {
        kind: QuestionKind,
        expected: &'static str,
    },

    #[error("choice question must have at least one option")]
    NoOptions,

    #[error("duplicate option id: {0}")]
    DuplicateOption(OptionId),

    #[error("option text cannot be empty")]
    EmptyOptionText,

    #[error("scale minimum {min} is greater than maximum {max}")]
    InvalidScaleBounds { min: i32, max: i32 },

    #[error("scale {min}..={max} needs {expected} labels, got {actual}")]
    ScaleLabelMismatch {
        min: i32,
        max: i32,
        expected: usize,
        actual: usize,
    },
}

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// The four question types of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "scenario")]
    Scenario,
    #[serde(rename = "likert")]
    ScaleRating,
    #[serde(rename = "tone-judgment")]
    ToneJudgment,
}

impl QuestionKind {
    /// Badge label shown above the prompt.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice => "Multiple Choice",
            QuestionKind::Scenario => "Scenario",
            QuestionKind::ScaleRating => "Agreement Scale",
            QuestionKind::ToneJudgment => "Tone Assessment",
        }
    }

    /// Scale questions are answered with a number, everything else with an option.
    #[must_use]
    pub fn is_scale(self) -> bool {
        matches!(self, QuestionKind::ScaleRating)
    }
}

//
// ─── RESPONSE FORMATS ──────────────────────────────────────────────────────────
//

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: OptionId,
    pub text: String,
    pub value: i32,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: OptionId, text: impl Into<String>, value: i32) -> Self {
        Self {
            id,
            text: text.into(),
            value,
        }
    }
}

/// Integer rating scale with step 1 and one label per position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleSpec {
    min: i32,
    max: i32,
    labels: Vec<String>,
}

impl ScaleSpec {
    /// # Errors
    ///
    /// Returns `QuestionError::InvalidScaleBounds` if `min > max`.
    /// Returns `QuestionError::ScaleLabelMismatch` if the label count does not match the range.
    pub fn new(min: i32, max: i32, labels: Vec<String>) -> Result<Self, QuestionError> {
        if min > max {
            return Err(QuestionError::InvalidScaleBounds { min, max });
        }
        let span = i64::from(max) - i64::from(min) + 1;
        let expected = usize::try_from(span).unwrap_or(usize::MAX);
        if labels.len() != expected {
            return Err(QuestionError::ScaleLabelMismatch {
                min,
                max,
                expected,
                actual: labels.len(),
            });
        }
        Ok(Self { min, max, labels })
    }

    #[must_use]
    pub fn min(&self) -> i32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Label for a scale position, `None` when out of range.
    #[must_use]
    pub fn label_for(&self, value: i32) -> Option<&str> {
        if !self.contains(value) {
            return None;
        }
        let idx = usize::try_from(value - self.min).ok()?;
        self.labels.get(idx).map(String::as_str)
    }

    /// All positions with their labels, lowest first.
    pub fn positions(&self) -> impl Iterator<Item = (i32, &str)> {
        let labels = self.labels.iter().map(String::as_str);
        (self.min..=self.max).zip(labels)
    }
}

/// How a question is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseFormat {
    Choice(Vec<AnswerOption>),
    Scale(ScaleSpec),
}

impl ResponseFormat {
    fn validate(&self) -> Result<(), QuestionError> {
        let ResponseFormat::Choice(options) = self else {
            return Ok(());
        };
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        let mut seen = HashSet::with_capacity(options.len());
        for option in options {
            if option.text.trim().is_empty() {
                return Err(QuestionError::EmptyOptionText);
            }
            if !seen.insert(&option.id) {
                return Err(QuestionError::DuplicateOption(option.id.clone()));
            }
        }
        Ok(())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single immutable prompt of the assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    kind: QuestionKind,
    prompt: String,
    description: Option<String>,
    scenario: Option<String>,
    statement: Option<String>,
    format: ResponseFormat,
    dimension: Option<CoachDimension>,
}

impl Question {
    /// Create a question whose kind and response format agree.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt is blank, the format does not fit the
    /// kind, or the options/scale are malformed.
    pub fn new(
        id: QuestionId,
        kind: QuestionKind,
        prompt: impl Into<String>,
        format: ResponseFormat,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        match (&format, kind.is_scale()) {
            (ResponseFormat::Scale(_), true) | (ResponseFormat::Choice(_), false) => {}
            (ResponseFormat::Choice(_), true) => {
                return Err(QuestionError::FormatMismatch {
                    kind,
                    expected: "scale",
                });
            }
            (ResponseFormat::Scale(_), false) => {
                return Err(QuestionError::FormatMismatch {
                    kind,
                    expected: "choice",
                });
            }
        }
        format.validate()?;

        Ok(Self {
            id,
            kind,
            prompt,
            description: None,
            scenario: None,
            statement: None,
            format,
            dimension: None,
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }

    #[must_use]
    pub fn with_statement(mut self, statement: impl Into<String>) -> Self {
        self.statement = Some(statement.into());
        self
    }

    #[must_use]
    pub fn with_dimension(mut self, dimension: CoachDimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    #[must_use]
    pub fn statement(&self) -> Option<&str> {
        self.statement.as_deref()
    }

    #[must_use]
    pub fn format(&self) -> &ResponseFormat {
        &self.format
    }

    #[must_use]
    pub fn dimension(&self) -> Option<CoachDimension> {
        self.dimension
    }

    /// Options of a choice question; empty for scale questions.
    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        match &self.format {
            ResponseFormat::Choice(options) => options,
            ResponseFormat::Scale(_) => &[],
        }
    }

    #[must_use]
    pub fn scale(&self) -> Option<&ScaleSpec> {
        match &self.format {
            ResponseFormat::Scale(scale) => Some(scale),
            ResponseFormat::Choice(_) => None,
        }
    }

    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&AnswerOption> {
        self.options().iter().find(|option| option.id == *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(s: &str) -> OptionId {
        OptionId::new(s).unwrap()
    }

    fn labels(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("L{i}")).collect()
    }

    #[test]
    fn scale_question_requires_scale_format() {
        let err = Question::new(
            QuestionId::new("q").unwrap(),
            QuestionKind::ScaleRating,
            "How often?",
            ResponseFormat::Choice(vec![AnswerOption::new(oid("a"), "A", 1)]),
        )
        .unwrap_err();
        assert_eq!(
            err,
            QuestionError::FormatMismatch {
                kind: QuestionKind::ScaleRating,
                expected: "scale",
            }
        );
    }

    #[test]
    fn duplicate_option_ids_fail() {
        let err = Question::new(
            QuestionId::new("q").unwrap(),
            QuestionKind::Scenario,
            "What now?",
            ResponseFormat::Choice(vec![
                AnswerOption::new(oid("a"), "First", 1),
                AnswerOption::new(oid("a"), "Second", 2),
            ]),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::DuplicateOption(oid("a")));
    }

    #[test]
    fn choice_question_rejects_scale_format() {
        let scale = ScaleSpec::new(1, 5, labels(5)).unwrap();
        let err = Question::new(
            QuestionId::new("q").unwrap(),
            QuestionKind::Scenario,
            "What now?",
            ResponseFormat::Scale(scale),
        )
        .unwrap_err();
        assert_eq!(
            err,
            QuestionError::FormatMismatch {
                kind: QuestionKind::Scenario,
                expected: "choice",
            }
        );
    }

    #[test]
    fn blank_prompt_fails() {
        let err = Question::new(
            QuestionId::new("q").unwrap(),
            QuestionKind::MultipleChoice,
            "   ",
            ResponseFormat::Choice(vec![AnswerOption::new(oid("a"), "A", 1)]),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn blank_option_text_fails() {
        let err = Question::new(
            QuestionId::new("q").unwrap(),
            QuestionKind::ToneJudgment,
            "Tone?",
            ResponseFormat::Choice(vec![
                AnswerOption::new(oid("a"), "Warm", 1),
                AnswerOption::new(oid("b"), "", 2),
            ]),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyOptionText);
    }

    #[test]
    fn empty_choice_list_fails() {
        let err = Question::new(
            QuestionId::new("q").unwrap(),
            QuestionKind::ToneJudgment,
            "Tone?",
            ResponseFormat::Choice(Vec::new()),
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);
    }

    #[test]
    fn scale_label_count_must_match_range() {
        let err = ScaleSpec::new(1, 5, labels(4)).unwrap_err();
        assert_eq!(
            err,
            QuestionError::ScaleLabelMismatch {
                min: 1,
                max: 5,
                expected: 5,
                actual: 4,
            }
        );
        assert!(matches!(
            ScaleSpec::new(5, 1, labels(5)),
            Err(QuestionError::InvalidScaleBounds { min: 5, max: 1 })
        ));
    }

    #[test]
    fn scale_labels_and_bounds() {
        let scale = ScaleSpec::new(1, 5, labels(5)).unwrap();
        assert!(scale.contains(1));
        assert!(scale.contains(5));
        assert!(!scale.contains(0));
        assert!(!scale.contains(6));
        assert_eq!(scale.label_for(3), Some("L3"));
        assert_eq!(scale.label_for(9), None);
        assert_eq!(scale.positions().count(), 5);
    }

    #[test]
    fn kind_labels() {
        assert_eq!(QuestionKind::ScaleRating.label(), "Agreement Scale");
        assert_eq!(QuestionKind::ToneJudgment.label(), "Tone Assessment");
        assert_eq!(QuestionKind::MultipleChoice.label(), "Multiple Choice");
    }
}
