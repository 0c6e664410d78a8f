use assess_core::{NavigationState, Progress};

/// Aggregated view of assessment progress, useful for UI headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentProgress {
    pub answered: usize,
    pub total: usize,
    pub remaining: usize,
    pub percent: u32,
    /// 1-based "Question n of N" number.
    pub question_number: usize,
    pub section_index: Option<usize>,
    pub is_last_question: bool,
    pub is_complete: bool,
}

impl AssessmentProgress {
    #[must_use]
    pub fn new(progress: Progress, state: NavigationState, is_last_question: bool) -> Self {
        Self {
            answered: progress.answered,
            total: progress.total,
            remaining: progress.remaining(),
            percent: progress.rounded_percent(),
            question_number: progress.display_number(),
            section_index: state.position().map(|position| position.section()),
            is_last_question,
            is_complete: state.is_complete(),
        }
    }
}
