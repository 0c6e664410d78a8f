use services::AssessmentLoopService;

use crate::views::ViewError;
use crate::vm::{
    AssessmentIntent, AssessmentOutcome, AssessmentVm, QuestionBodyVm, start_assessment,
};

use super::test_harness::{ViewKind, render_view, test_loop};

fn answer_first(vm: &mut AssessmentVm, svc: &AssessmentLoopService) -> AssessmentOutcome {
    let intent = match vm.question_card().unwrap().body {
        QuestionBodyVm::Choice { options, .. } => {
            AssessmentIntent::SelectOption(options[0].id.clone())
        }
        QuestionBodyVm::Scale { positions, .. } => AssessmentIntent::SetScale(positions[0].value),
    };
    vm.dispatch(intent, svc).unwrap();
    vm.dispatch(AssessmentIntent::Next, svc).unwrap()
}

#[test]
fn assessment_view_starts_on_intro() {
    let html = render_view(ViewKind::Assessment);
    let has = |text: &str| html.contains(text);
    assert!(has("Giving Constructive Feedback"), "{html}");
    assert!(has("19 questions"), "{html}");
    assert!(has("4 parts"), "{html}");
    assert!(has("Introduction"), "{html}");
    assert!(has("Constructive feedback, when done right"), "{html}");
    assert!(has("Your responses are private"), "{html}");
    assert!(has("Start Assessment"), "{html}");
}

#[test]
fn question_view_renders_header_and_options() {
    let svc = test_loop();
    let mut vm = start_assessment(&svc);
    vm.dispatch(AssessmentIntent::Start, &svc).unwrap();
    let select = AssessmentIntent::SelectOption("b".to_string());
    vm.dispatch(select, &svc).unwrap();

    let html = render_view(ViewKind::Question {
        header: vm.header().unwrap(),
        card: vm.question_card().unwrap(),
    });
    let has = |text: &str| html.contains(text);
    assert!(has("Communication Intelligence"), "{html}");
    assert!(has("Question 1 of 19"), "{html}");
    assert!(has("Scenario"), "{html}");
    assert!(has("option selected"), "{html}");
    assert!(has("Continue"), "{html}");
}

#[test]
fn question_view_renders_scale_on_last_question() {
    let svc = test_loop();
    let mut vm = start_assessment(&svc);
    vm.start();
    for _ in 1..19 {
        answer_first(&mut vm, &svc);
    }

    let html = render_view(ViewKind::Question {
        header: vm.header().unwrap(),
        card: vm.question_card().unwrap(),
    });
    let has = |text: &str| html.contains(text);
    assert!(has("Question 19 of 19"), "{html}");
    assert!(has("scale-point"), "{html}");
    assert!(has("Continue"), "{html}");
    assert!(!has("Complete Assessment"), "{html}");
    assert!(!has(ViewError::Unanswered.message()));
}

#[test]
fn results_view_renders_profile() {
    let svc = test_loop();
    let mut vm = start_assessment(&svc);
    vm.start();
    while answer_first(&mut vm, &svc) == AssessmentOutcome::Continue {}

    let results = vm.results().unwrap();
    let html = render_view(ViewKind::Results(results.clone()));
    let has = |text: &str| html.contains(text);
    assert!(has("Your Feedback Profile"), "{html}");
    assert!(has(results.tier_label), "{html}");
    assert!(has("Conflict Nav"), "{html}");
    assert!(has("Follow-up"), "{html}");
    assert!(has("SBI Framework Practice"), "{html}");
    assert!(has("Team Analysis"), "{html}");
}
