use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::dimension::CoachDimension;
use crate::model::ids::{IdError, OptionId, QuestionId, SectionId};
use crate::model::question::{
    AnswerOption, Question, QuestionError, QuestionKind, ResponseFormat, ScaleSpec,
};

/// Labels used when a scale question omits its own.
pub const DEFAULT_SCALE_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];
const DEFAULT_SCALE_MIN: i32 = 1;
const DEFAULT_SCALE_MAX: i32 = 5;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A malformed catalog. Always fatal at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one section")]
    NoSections,

    #[error("section {0} has no questions")]
    EmptySection(SectionId),

    #[error("duplicate section id: {0}")]
    DuplicateSection(SectionId),

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("invalid question {question_id}: {source}")]
    Question {
        question_id: String,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    Id(#[from] IdError),
}

//
// ─── SECTION ───────────────────────────────────────────────────────────────────
//

/// A titled, ordered, non-empty group of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    id: SectionId,
    title: String,
    description: String,
    questions: Vec<Question>,
}

impl Section {
    /// # Errors
    ///
    /// Returns `CatalogError::EmptySection` if `questions` is empty.
    pub fn new(
        id: SectionId,
        title: impl Into<String>,
        description: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::EmptySection(id));
        }
        Ok(Self {
            id,
            title: title.into(),
            description: description.into(),
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed section; kept for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The immutable, ordered list of sections for one assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    title: String,
    sections: Vec<Section>,
    total_questions: usize,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError::NoSections` for an empty section list, and
    /// `DuplicateSection` / `DuplicateQuestion` when ids repeat.
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Result<Self, CatalogError> {
        if sections.is_empty() {
            return Err(CatalogError::NoSections);
        }

        let mut section_ids = HashSet::with_capacity(sections.len());
        let mut question_ids = HashSet::new();
        for section in &sections {
            if section.is_empty() {
                return Err(CatalogError::EmptySection(section.id.clone()));
            }
            if !section_ids.insert(&section.id) {
                return Err(CatalogError::DuplicateSection(section.id.clone()));
            }
            for question in &section.questions {
                if !question_ids.insert(question.id()) {
                    return Err(CatalogError::DuplicateQuestion(question.id().clone()));
                }
            }
        }

        let total_questions = question_ids.len();
        Ok(Self {
            title: title.into(),
            sections,
            total_questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Sum of question counts over all sections.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    #[must_use]
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    pub fn question_at(&self, section: usize, question: usize) -> Option<&Question> {
        self.sections.get(section)?.questions.get(question)
    }

    /// Look up a question by id.
    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions().find(|question| question.id() == id)
    }

    /// All questions in presentation order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| &section.questions)
    }
}

//
// ─── DRAFTS (SERIALIZED FORM) ──────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDraft {
    pub id: String,
    pub text: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionDraft>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_labels: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<CoachDimension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDraft {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDraft {
    pub title: String,
    pub sections: Vec<SectionDraft>,
}

fn default_scale_labels() -> Vec<String> {
    DEFAULT_SCALE_LABELS.map(String::from).to_vec()
}

impl QuestionDraft {
    /// # Errors
    ///
    /// Returns `CatalogError` for blank ids or an invalid question shape.
    pub fn validate(self) -> Result<Question, CatalogError> {
        let id = QuestionId::new(self.id)?;
        let wrap = |source: QuestionError| CatalogError::Question {
            question_id: id.to_string(),
            source,
        };

        let format = if self.kind.is_scale() {
            let min = self.scale_min.unwrap_or(DEFAULT_SCALE_MIN);
            let max = self.scale_max.unwrap_or(DEFAULT_SCALE_MAX);
            let labels = self.scale_labels.unwrap_or_else(default_scale_labels);
            ResponseFormat::Scale(ScaleSpec::new(min, max, labels).map_err(wrap)?)
        } else {
            let options = self
                .options
                .unwrap_or_default()
                .into_iter()
                .map(|option| -> Result<AnswerOption, CatalogError> {
                    let id = OptionId::new(option.id)?;
                    Ok(AnswerOption::new(id, option.text, option.value))
                })
                .collect::<Result<Vec<_>, CatalogError>>()?;
            ResponseFormat::Choice(options)
        };

        let question = Question::new(id.clone(), self.kind, self.question, format);
        let mut question = question.map_err(wrap)?;
        if let Some(description) = self.description {
            question = question.with_description(description);
        }
        if let Some(scenario) = self.scenario {
            question = question.with_scenario(scenario);
        }
        if let Some(statement) = self.statement {
            question = question.with_statement(statement);
        }
        if let Some(dimension) = self.dimension {
            question = question.with_dimension(dimension);
        }
        Ok(question)
    }
}

impl SectionDraft {
    /// # Errors
    ///
    /// Returns `CatalogError` if the section or any of its questions is invalid.
    pub fn validate(self) -> Result<Section, CatalogError> {
        let id = SectionId::new(self.id)?;
        let questions = self
            .questions
            .into_iter()
            .map(QuestionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Section::new(id, self.title, self.description, questions)
    }
}

impl CatalogDraft {
    /// Validate the whole draft into an immutable `Catalog`.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found, in document order.
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        let sections = self
            .sections
            .into_iter()
            .map(SectionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(self.title, sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(id: &str) -> QuestionDraft {
        QuestionDraft {
            id: id.to_string(),
            kind: QuestionKind::Scenario,
            question: format!("Prompt {id}"),
            description: None,
            scenario: Some("Something happened".to_string()),
            statement: None,
            options: Some(vec![
                OptionDraft {
                    id: "a".to_string(),
                    text: "Ask".to_string(),
                    value: 5,
                },
                OptionDraft {
                    id: "b".to_string(),
                    text: "Ignore".to_string(),
                    value: 1,
                },
            ]),
            scale_min: None,
            scale_max: None,
            scale_labels: None,
            dimension: None,
        }
    }

    fn section(id: &str, questions: Vec<QuestionDraft>) -> SectionDraft {
        SectionDraft {
            id: id.to_string(),
            title: format!("Section {id}"),
            description: String::new(),
            questions,
        }
    }

    #[test]
    fn valid_draft_counts_questions() {
        let draft = CatalogDraft {
            title: "T".to_string(),
            sections: vec![
                section("s1", vec![choice("q1"), choice("q2")]),
                section("s2", vec![choice("q3")]),
            ],
        };
        let catalog = draft.validate().unwrap();
        assert_eq!(catalog.section_count(), 2);
        assert_eq!(catalog.total_questions(), 3);
        assert_eq!(catalog.question_at(1, 0).unwrap().id().as_str(), "q3");
        assert!(catalog.question_at(1, 1).is_none());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let draft = CatalogDraft {
            title: "T".to_string(),
            sections: Vec::new(),
        };
        assert_eq!(draft.validate().unwrap_err(), CatalogError::NoSections);
    }

    #[test]
    fn empty_section_is_rejected() {
        let draft = CatalogDraft {
            title: "T".to_string(),
            sections: vec![section("s1", Vec::new())],
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            CatalogError::EmptySection(SectionId::new("s1").unwrap())
        );
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let draft = CatalogDraft {
            title: "T".to_string(),
            sections: vec![
                section("s1", vec![choice("q1")]),
                section("s2", vec![choice("q1")]),
            ],
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            CatalogError::DuplicateQuestion(QuestionId::new("q1").unwrap())
        );
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let draft = CatalogDraft {
            title: "T".to_string(),
            sections: vec![
                section("s1", vec![choice("q1")]),
                section("s1", vec![choice("q2")]),
            ],
        };
        assert_eq!(
            draft.validate().unwrap_err(),
            CatalogError::DuplicateSection(SectionId::new("s1").unwrap())
        );
    }

    #[test]
    fn blank_option_text_reports_question_id() {
        let mut draft = choice("blank");
        if let Some(options) = draft.options.as_mut() {
            options[1].text = "  ".to_string();
        }
        assert_eq!(
            draft.validate().unwrap_err(),
            CatalogError::Question {
                question_id: "blank".to_string(),
                source: QuestionError::EmptyOptionText,
            }
        );
    }

    #[test]
    fn scale_question_uses_default_labels() {
        let draft = QuestionDraft {
            kind: QuestionKind::ScaleRating,
            options: None,
            ..choice("likert")
        };
        let question = draft.validate().unwrap();
        let scale = question.scale().unwrap();
        assert_eq!(scale.min(), 1);
        assert_eq!(scale.max(), 5);
        assert_eq!(scale.label_for(5), Some("Strongly Agree"));
    }

    #[test]
    fn choice_question_without_options_reports_question_id() {
        let draft = QuestionDraft {
            options: None,
            ..choice("bare")
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(
            err,
            CatalogError::Question {
                question_id: "bare".to_string(),
                source: QuestionError::NoOptions,
            }
        );
    }

    #[test]
    fn draft_parses_camel_case_json() {
        let json = r#"{
            "id": "listening_check",
            "type": "likert",
            "question": "How often?",
            "statement": "I check.",
            "scaleMin": 1,
            "scaleMax": 3,
            "scaleLabels": ["Never", "Sometimes", "Always"],
            "dimension": "openness"
        }"#;
        let draft: QuestionDraft = serde_json::from_str(json).unwrap();
        let question = draft.validate().unwrap();
        assert_eq!(question.kind(), QuestionKind::ScaleRating);
        assert_eq!(question.statement(), Some("I check."));
        assert_eq!(question.dimension(), Some(CoachDimension::Openness));
        assert_eq!(question.scale().unwrap().label_for(2), Some("Sometimes"));
    }
}
