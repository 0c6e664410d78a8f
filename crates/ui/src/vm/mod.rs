mod assessment_vm;
mod question_vm;
mod results_vm;

pub use assessment_vm::{
    AssessmentIntent, AssessmentOutcome, AssessmentPhase, AssessmentVm, start_assessment,
};
pub use question_vm::{
    IntroVm, OptionVm, ProgressHeaderVm, QuestionBodyVm, QuestionCardVm, ScalePositionVm,
    map_intro, map_progress_header, map_question_card,
};
pub use results_vm::{ChartBarVm, GrowthAreaVm, PlanPhaseVm, ResultsVm, StrengthVm, map_results};
