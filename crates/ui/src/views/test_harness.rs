use std::sync::Arc;

use assess_core::time::fixed_clock;
use dioxus::prelude::*;
use services::{AssessmentLoopService, ScoringConfig, ScoringMode, builtin_catalog};

use crate::context::{UiApp, build_app_context};
use crate::views::{AssessmentView, QuestionView, ResultsView};
use crate::vm::{ProgressHeaderVm, QuestionCardVm, ResultsVm};

struct TestApp {
    assessment_loop: Arc<AssessmentLoopService>,
}

impl UiApp for TestApp {
    fn assessment_loop(&self) -> Arc<AssessmentLoopService> {
        Arc::clone(&self.assessment_loop)
    }
}

pub fn test_loop() -> AssessmentLoopService {
    let catalog = Arc::new(builtin_catalog().expect("builtin catalog"));
    let scoring = ScoringConfig {
        mode: ScoringMode::Placeholder,
        seed: Some(7),
    };
    AssessmentLoopService::new(fixed_clock(), catalog).with_scoring(scoring)
}

#[derive(Clone)]
pub enum ViewKind {
    Assessment,
    Question {
        header: ProgressHeaderVm,
        card: QuestionCardVm,
    },
    Results(ResultsVm),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    match props.view.clone() {
        ViewKind::Assessment => rsx! { AssessmentView {} },
        ViewKind::Question { header, card } => rsx! {
            QuestionView {
                header,
                card,
                error: None,
                on_select: |_| {},
                on_scale: |_| {},
                on_next: |_| {},
            }
        },
        ViewKind::Results(results) => rsx! { ResultsView { results } },
    }
}

/// Build, rebuild, and render a view to HTML.
pub fn render_view(view: ViewKind) -> String {
    let app = Arc::new(TestApp {
        assessment_loop: Arc::new(test_loop()),
    });
    let mut dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app, view });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
