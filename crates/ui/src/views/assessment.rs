use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::views::{IntroView, QuestionView, ResultsView, ViewError};
use crate::vm::{AssessmentIntent, AssessmentOutcome, AssessmentPhase, start_assessment};

#[component]
pub fn AssessmentView() -> Element {
    let ctx = use_context::<AppContext>();
    let assessment_loop = ctx.assessment_loop();

    let vm = use_signal(|| start_assessment(&assessment_loop));
    let mut error = use_signal(|| None::<ViewError>);

    let dispatch = use_callback(move |intent: AssessmentIntent| {
        let mut vm = vm;
        debug!(?intent, "assessment intent");
        match vm.write().dispatch(intent, &assessment_loop) {
            Ok(AssessmentOutcome::Completed) => {
                debug!("assessment completed");
                error.set(None);
            }
            Ok(AssessmentOutcome::Continue) => error.set(None),
            Err(err) => error.set(Some(err)),
        }
    });

    let phase = vm.read().phase();
    match phase {
        AssessmentPhase::Intro => {
            let intro = vm.read().intro();
            rsx! {
                IntroView {
                    intro,
                    on_start: move |_| dispatch.call(AssessmentIntent::Start),
                }
            }
        }
        AssessmentPhase::Question => {
            let (header, card) = {
                let vm = vm.read();
                (vm.header(), vm.question_card())
            };
            let on_select = move |id: String| dispatch.call(AssessmentIntent::SelectOption(id));
            let on_scale = move |value: i32| dispatch.call(AssessmentIntent::SetScale(value));
            match (header, card) {
                (Some(header), Some(card)) => rsx! {
                    QuestionView {
                        header,
                        card,
                        error: error(),
                        on_select,
                        on_scale,
                        on_next: move |_| dispatch.call(AssessmentIntent::Next),
                    }
                },
                _ => rsx! {
                    p { class: "error", "{ViewError::Unknown.message()}" }
                },
            }
        }
        AssessmentPhase::Results => match vm.read().results() {
            Some(results) => rsx! {
                ResultsView { results }
            },
            None => rsx! {
                p { class: "error", "{ViewError::Unknown.message()}" }
            },
        },
    }
}
