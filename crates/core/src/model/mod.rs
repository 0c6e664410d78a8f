mod answer;
mod catalog;
mod dimension;
mod ids;
mod question;

pub use ids::{IdError, OptionId, QuestionId, SectionId};

pub use answer::{AnswerSet, AnswerValue};
pub use catalog::{
    Catalog, CatalogDraft, CatalogError, DEFAULT_SCALE_LABELS, OptionDraft, QuestionDraft,
    Section, SectionDraft,
};
pub use dimension::CoachDimension;
pub use question::{AnswerOption, Question, QuestionError, QuestionKind, ResponseFormat, ScaleSpec};
