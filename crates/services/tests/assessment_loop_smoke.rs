use std::sync::Arc;

use assess_core::model::{AnswerValue, OptionId};
use assess_core::time::fixed_now;
use services::results::Tier;
use services::{
    AdvanceOutcome, AssessmentLoopService, Clock, ScoringConfig, ScoringMode, builtin_catalog,
    parse_catalog,
};

fn best_answer(question: &assess_core::model::Question) -> AnswerValue {
    match question.scale() {
        Some(scale) => AnswerValue::Scale(scale.max()),
        None => {
            let best = question
                .options()
                .iter()
                .max_by_key(|option| option.value)
                .expect("choice question has options");
            AnswerValue::Choice(best.id.clone())
        }
    }
}

#[test]
fn assessment_loop_produces_report() {
    let catalog = Arc::new(builtin_catalog().expect("builtin catalog"));
    let loop_svc = AssessmentLoopService::new(Clock::fixed(fixed_now()), catalog)
        .with_scoring(ScoringConfig {
            mode: ScoringMode::Weighted,
            seed: None,
        });

    let mut run = loop_svc.start();
    let mut report = None;
    while !run.is_complete() {
        let value = best_answer(run.current_question().expect("question available"));
        let result = loop_svc.answer_current(&mut run, value).expect("answer");
        if result.outcome == AdvanceOutcome::Completed {
            assert!(result.progress.is_complete);
            report = result.report;
        }
    }

    let report = report.expect("report after last answer");
    assert_eq!(report.answered, 19);
    assert_eq!(report.total_questions, 19);
    assert_eq!(report.overall(), 100);
    assert_eq!(report.tier, Tier::ConfidentFeedbackGiver);
    assert_eq!(report.strengths.len(), 3);
    assert!(report.growth_opportunities.is_empty());
}

#[test]
fn two_section_catalog_walkthrough() {
    let catalog = parse_catalog(
        r#"{
            "title": "Mini",
            "sections": [
                {"id": "a", "title": "A", "description": "", "questions": [
                    {"id": "a1", "type": "mcq", "question": "One?",
                     "options": [{"id": "x", "text": "X", "value": 1}]},
                    {"id": "a2", "type": "likert", "question": "Two?"}
                ]},
                {"id": "b", "title": "B", "description": "", "questions": [
                    {"id": "b1", "type": "tone-judgment", "question": "Three?",
                     "statement": "Hmm.",
                     "options": [{"id": "y", "text": "Y", "value": 2}]}
                ]}
            ]
        }"#,
    )
    .expect("valid catalog");

    let loop_svc = AssessmentLoopService::new(Clock::fixed(fixed_now()), Arc::new(catalog))
        .with_scoring(ScoringConfig {
            mode: ScoringMode::Placeholder,
            seed: Some(1),
        });
    let mut run = loop_svc.start();

    let first = loop_svc
        .answer_current(&mut run, AnswerValue::Choice(OptionId::new("x").unwrap()))
        .unwrap();
    assert_eq!(first.progress.section_index, Some(0));
    assert_eq!(first.progress.question_number, 2);

    let second = loop_svc
        .answer_current(&mut run, AnswerValue::Scale(3))
        .unwrap();
    assert_eq!(second.progress.section_index, Some(1));
    assert!(second.progress.is_last_question);

    let third = loop_svc
        .answer_current(&mut run, AnswerValue::Choice(OptionId::new("y").unwrap()))
        .unwrap();
    assert_eq!(third.outcome, AdvanceOutcome::Completed);
    let report = third.report.expect("report");
    assert!(report.overall() >= 85);
    assert_eq!(run.completed_at(), Some(fixed_now()));
}
