use dioxus::prelude::*;

use crate::views::ViewError;
use crate::vm::{ProgressHeaderVm, QuestionBodyVm, QuestionCardVm};

#[component]
pub fn QuestionView(
    header: ProgressHeaderVm,
    card: QuestionCardVm,
    error: Option<ViewError>,
    on_select: EventHandler<String>,
    on_scale: EventHandler<i32>,
    on_next: EventHandler<()>,
) -> Element {
    let progress_style = format!("width: {}%", header.percent);

    rsx! {
        div { class: "page question",
            header { class: "progress-header",
                span { class: "badge", "{header.section_title}" }
                p { class: "section-description", "{header.section_description}" }
                div { class: "progress-meta",
                    span { "{header.question_label}" }
                    span { "{header.percent_label}" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "{progress_style}" }
                }
            }

            section { class: "card question-card",
                span { class: "kind", "{card.kind_label}" }
                h2 { "{card.prompt}" }
                if let Some(description) = card.description.as_ref() {
                    p { class: "description", "{description}" }
                }
                if let Some(scenario) = card.scenario.as_ref() {
                    blockquote { class: "scenario", "{scenario}" }
                }
                if let Some((heading, text)) = card.statement.as_ref() {
                    div { class: "statement",
                        if let Some(heading) = heading {
                            h4 { "{heading}" }
                        }
                        blockquote { "\"{text}\"" }
                    }
                }

                QuestionBody { body: card.body.clone(), on_select, on_scale }
            }

            if let Some(err) = error {
                p { class: "error", "{err.message()}" }
            }

            button {
                id: "question-next",
                class: "btn btn-primary",
                disabled: !card.can_continue,
                onclick: move |_| on_next.call(()),
                "Continue"
            }
        }
    }
}

#[component]
fn QuestionBody(
    body: QuestionBodyVm,
    on_select: EventHandler<String>,
    on_scale: EventHandler<i32>,
) -> Element {
    match body {
        QuestionBodyVm::Choice { heading, options } => rsx! {
            if let Some(heading) = heading {
                h4 { "{heading}" }
            }
            div { class: "options",
                {options.into_iter().map(|option| {
                    let class = if option.selected {
                        "option selected"
                    } else {
                        "option"
                    };
                    let id = option.id.clone();
                    rsx! {
                        button {
                            key: "{option.id}",
                            class: "{class}",
                            onclick: move |_| on_select.call(id.clone()),
                            span { class: "letter", "{option.letter}" }
                            span { "{option.text}" }
                        }
                    }
                })}
            }
        },
        QuestionBodyVm::Scale {
            low_label,
            high_label,
            positions,
        } => rsx! {
            div { class: "scale",
                div { class: "scale-ends",
                    span { "{low_label}" }
                    span { "{high_label}" }
                }
                div { class: "scale-positions",
                    {positions.into_iter().map(|position| {
                        let class = if position.selected {
                            "scale-point selected"
                        } else {
                            "scale-point"
                        };
                        let value = position.value;
                        rsx! {
                            button {
                                key: "{value}",
                                class: "{class}",
                                title: "{position.label}",
                                onclick: move |_| on_scale.call(value),
                                "{value}"
                            }
                        }
                    })}
                }
            }
        },
    }
}
