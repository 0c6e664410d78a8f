use std::sync::Arc;

use tracing::info;

use assess_core::model::{AnswerValue, Catalog};

use super::progress::AssessmentProgress;
use super::service::{AdvanceOutcome, AssessmentRun};
use crate::Clock;
use crate::error::RunError;
use crate::results::{ResultsReport, ScoringConfig};

/// Result of answering and moving past a single question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub outcome: AdvanceOutcome,
    pub progress: AssessmentProgress,
    /// Present once the final question has been answered.
    pub report: Option<ResultsReport>,
}

/// Orchestrates run start, answering, and results.
#[derive(Debug, Clone)]
pub struct AssessmentLoopService {
    clock: Clock,
    catalog: Arc<Catalog>,
    scoring: ScoringConfig,
}

impl AssessmentLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<Catalog>) -> Self {
        Self {
            clock,
            catalog,
            scoring: ScoringConfig::default(),
        }
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Start a fresh run at the first question.
    #[must_use]
    pub fn start(&self) -> AssessmentRun {
        AssessmentRun::new(Arc::clone(&self.catalog), self.clock)
    }

    /// Record `value` for the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `RunError` if the answer is invalid or the run is already complete.
    pub fn answer_current(
        &self,
        run: &mut AssessmentRun,
        value: AnswerValue,
    ) -> Result<AnswerResult, RunError> {
        run.answer_current(value)?;
        let outcome = run.advance()?;
        let report = match outcome {
            AdvanceOutcome::Completed => Some(self.finish(run)?),
            AdvanceOutcome::Next => None,
        };

        Ok(AnswerResult {
            outcome,
            progress: run.progress_view(),
            report,
        })
    }

    /// Score a completed run.
    ///
    /// # Errors
    ///
    /// Returns `RunError::NotComplete` if the run still has questions left.
    pub fn finish(&self, run: &AssessmentRun) -> Result<ResultsReport, RunError> {
        if !run.is_complete() {
            return Err(RunError::NotComplete);
        }
        let mut scorer = self.scoring.scorer();
        let scores = scorer.score(run.catalog(), run.answers());
        let progress = run.progress();
        info!(
            mode = %self.scoring.mode,
            overall = scores.overall(),
            "results scored"
        );
        let report = ResultsReport::from_scores(scores, progress.answered, progress.total);
        Ok(report)
    }
}
