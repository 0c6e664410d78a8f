use dioxus::prelude::*;

use crate::vm::IntroVm;

const INTRODUCTION: [&str; 2] = [
    "Giving feedback is one of the most essential—and often avoided—forms of communication \
     in both professional and personal life. Constructive feedback, when done right, drives \
     clarity, trust, and performance. When mishandled, it can damage relationships, trigger \
     defensiveness, and erode team cohesion.",
    "This assessment helps you explore your Collaboration & Communication Intelligence through \
     the specific lens of how you give feedback: your clarity, tone, empathy, timing, and \
     approach in high-stakes or routine settings.",
];

const PRIVACY_NOTE: &str =
    "Your responses are private and will be used only to generate your personalized results.";

const DISCOVER: [&str; 4] = [
    "Your unique Feedback Style",
    "Team communication fit assessment",
    "Personalized growth recommendations",
    "COACH framework analysis",
];

#[component]
pub fn IntroView(intro: IntroVm, on_start: EventHandler<()>) -> Element {
    rsx! {
        div { class: "page intro",
            header { class: "intro-header",
                h1 { "{intro.title}" }
                p { class: "subtitle", "{intro.subtitle}" }
            }

            section { class: "card introduction",
                h3 { "Introduction" }
                for paragraph in INTRODUCTION {
                    p { class: "lead", "{paragraph}" }
                }
            }

            div { class: "intro-grid",
                section { class: "card",
                    h3 { "What You'll Discover" }
                    ul { class: "checklist",
                        for item in DISCOVER {
                            li { "{item}" }
                        }
                    }
                }

                section { class: "card",
                    h3 { "Assessment Details" }
                    dl { class: "details",
                        dt { "Duration" }
                        dd { "{intro.duration_label}" }

                        dt { "Questions" }
                        dd { "{intro.questions_label}" }

                        dt { "Sections" }
                        dd { "{intro.sections_label}" }

                        dt { "Format" }
                        dd { "{intro.format_label}" }
                    }
                }
            }

            button {
                id: "intro-start",
                class: "btn btn-primary",
                onclick: move |_| on_start.call(()),
                "Start Assessment"
            }
            p { class: "privacy-note", "{PRIVACY_NOTE}" }
        }
    }
}
