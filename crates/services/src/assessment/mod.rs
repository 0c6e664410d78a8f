mod progress;
mod service;
mod workflow;

// Public API of the assessment subsystem.
pub use crate::error::{AnswerError, RunError};
pub use progress::AssessmentProgress;
pub use service::{AdvanceOutcome, AssessmentRun, validate_answer};
pub use workflow::{AnswerResult, AssessmentLoopService};
