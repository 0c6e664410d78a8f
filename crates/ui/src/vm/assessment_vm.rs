use assess_core::model::{AnswerValue, OptionId};
use services::{AdvanceOutcome, AssessmentLoopService, AssessmentRun, ResultsReport};
use tracing::warn;

use super::question_vm::{
    IntroVm, ProgressHeaderVm, QuestionCardVm, map_intro, map_progress_header, map_question_card,
};
use super::results_vm::{ResultsVm, map_results};
use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssessmentIntent {
    Start,
    SelectOption(String),
    SetScale(i32),
    Next,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentPhase {
    Intro,
    Question,
    Results,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssessmentOutcome {
    Continue,
    Completed,
}

pub struct AssessmentVm {
    run: AssessmentRun,
    phase: AssessmentPhase,
    report: Option<ResultsReport>,
}

impl AssessmentVm {
    #[must_use]
    pub fn new(run: AssessmentRun) -> Self {
        Self {
            run,
            phase: AssessmentPhase::Intro,
            report: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    pub fn start(&mut self) {
        if self.phase == AssessmentPhase::Intro {
            self.phase = AssessmentPhase::Question;
        }
    }

    #[must_use]
    pub fn intro(&self) -> IntroVm {
        map_intro(self.run.catalog())
    }

    #[must_use]
    pub fn header(&self) -> Option<ProgressHeaderVm> {
        let section = self.run.current_section()?;
        Some(map_progress_header(section, &self.run.progress_view()))
    }

    #[must_use]
    pub fn question_card(&self) -> Option<QuestionCardVm> {
        let question = self.run.current_question()?;
        Some(map_question_card(question, self.run.current_answer()))
    }

    #[must_use]
    pub fn results(&self) -> Option<ResultsVm> {
        self.report.as_ref().map(map_results)
    }

    /// Answers and advancing are only accepted while a question is on screen.
    fn ensure_question_phase(&self) -> Result<(), ViewError> {
        if self.phase == AssessmentPhase::Question {
            return Ok(());
        }
        warn!(phase = ?self.phase, "intent outside the question phase");
        Err(ViewError::Unknown)
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidAnswer` if the option does not belong to the question,
    /// `ViewError::Unknown` outside the question phase.
    pub fn select_option(&mut self, option_id: &str) -> Result<(), ViewError> {
        self.ensure_question_phase()?;
        let option_id = OptionId::new(option_id).map_err(|_| ViewError::InvalidAnswer)?;
        self.run
            .answer_current(AnswerValue::Choice(option_id))
            .map_err(ViewError::from)
    }

    /// # Errors
    ///
    /// Returns `ViewError::InvalidAnswer` if the value is outside the scale,
    /// `ViewError::Unknown` outside the question phase.
    pub fn set_scale(&mut self, value: i32) -> Result<(), ViewError> {
        self.ensure_question_phase()?;
        self.run
            .answer_current(AnswerValue::Scale(value))
            .map_err(ViewError::from)
    }

    /// Advance past the current question; scores the run after the last one.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unanswered` if nothing has been selected yet,
    /// `ViewError::Unknown` outside the question phase.
    pub fn next(
        &mut self,
        assessment_loop: &AssessmentLoopService,
    ) -> Result<AssessmentOutcome, ViewError> {
        self.ensure_question_phase()?;
        match self.run.advance()? {
            AdvanceOutcome::Next => Ok(AssessmentOutcome::Continue),
            AdvanceOutcome::Completed => {
                self.report = Some(assessment_loop.finish(&self.run)?);
                self.phase = AssessmentPhase::Results;
                Ok(AssessmentOutcome::Completed)
            }
        }
    }

    /// # Errors
    ///
    /// Propagates the error of the handled intent.
    pub fn dispatch(
        &mut self,
        intent: AssessmentIntent,
        assessment_loop: &AssessmentLoopService,
    ) -> Result<AssessmentOutcome, ViewError> {
        match intent {
            AssessmentIntent::Start => self.start(),
            AssessmentIntent::SelectOption(option_id) => self.select_option(&option_id)?,
            AssessmentIntent::SetScale(value) => self.set_scale(value)?,
            AssessmentIntent::Next => return self.next(assessment_loop),
        }
        Ok(AssessmentOutcome::Continue)
    }
}

#[must_use]
pub fn start_assessment(assessment_loop: &AssessmentLoopService) -> AssessmentVm {
    AssessmentVm::new(assessment_loop.start())
}
