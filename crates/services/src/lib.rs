#![forbid(unsafe_code)]

pub mod assessment;
pub mod catalog_source;
pub mod error;
pub mod results;

pub use assess_core::Clock;

pub use catalog_source::{CatalogSource, builtin_catalog, parse_catalog};
pub use error::{AnswerError, CatalogLoadError, RunError};

pub use assessment::{
    AdvanceOutcome, AnswerResult, AssessmentLoopService, AssessmentProgress, AssessmentRun,
};
pub use results::{ResultsReport, ScoringConfig, ScoringMode};
