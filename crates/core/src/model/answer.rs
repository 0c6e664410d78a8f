use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::{OptionId, QuestionId};

/// A submitted answer: a selected option for choice questions, a position for scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Choice(OptionId),
    Scale(i32),
}

impl AnswerValue {
    #[must_use]
    pub fn as_choice(&self) -> Option<&OptionId> {
        match self {
            AnswerValue::Choice(id) => Some(id),
            AnswerValue::Scale(_) => None,
        }
    }

    #[must_use]
    pub fn as_scale(&self) -> Option<i32> {
        match self {
            AnswerValue::Scale(value) => Some(*value),
            AnswerValue::Choice(_) => None,
        }
    }
}

/// Answers accumulated during one assessment run.
///
/// One entry per answered question; answering again overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    values: HashMap<QuestionId, AnswerValue>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the set and return it with `value` stored under `question_id`.
    #[must_use]
    pub fn with_answer(mut self, question_id: QuestionId, value: AnswerValue) -> Self {
        self.insert(question_id, value);
        self
    }

    /// Store `value`, returning the previous answer if there was one.
    pub fn insert(&mut self, question_id: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.values.insert(question_id, value)
    }

    #[must_use]
    pub fn get(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(question_id)
    }

    #[must_use]
    pub fn contains(&self, question_id: &QuestionId) -> bool {
        self.values.contains_key(question_id)
    }

    /// Number of distinct answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.values.iter()
    }
}
