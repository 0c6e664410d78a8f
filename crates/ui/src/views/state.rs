use assess_core::NavigationError;
use services::RunError;
use tracing::warn;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    InvalidAnswer,
    Unanswered,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::InvalidAnswer => "That answer doesn't fit this question.",
            ViewError::Unanswered => "Choose an answer before continuing.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<RunError> for ViewError {
    fn from(err: RunError) -> Self {
        // Keep error mapping in the UI boundary.
        match err {
            RunError::Answer(inner) => {
                warn!(error = %inner, "answer rejected");
                ViewError::InvalidAnswer
            }
            RunError::Navigation(NavigationError::Unanswered { .. }) => ViewError::Unanswered,
            other => {
                warn!(error = %other, "assessment run failed");
                ViewError::Unknown
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assess_core::model::QuestionId;

    #[test]
    fn maps_run_errors() {
        let unanswered = RunError::Navigation(NavigationError::Unanswered {
            question_id: QuestionId::new("q1").unwrap(),
        });
        assert_eq!(ViewError::from(unanswered), ViewError::Unanswered);
        assert_eq!(ViewError::from(RunError::Completed), ViewError::Unknown);
        assert_eq!(
            ViewError::Unanswered.message(),
            "Choose an answer before continuing."
        );
    }
}
