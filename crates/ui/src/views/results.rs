use dioxus::prelude::*;

use crate::vm::{ChartBarVm, ResultsVm};

#[component]
pub fn ResultsView(results: ResultsVm) -> Element {
    rsx! {
        div { class: "page results",
            header { class: "results-header",
                h1 { "Your Feedback Profile" }
                div { class: "overall",
                    span { class: "overall-score", "{results.overall}" }
                    span { class: "overall-max", "/100" }
                }
                p { class: "tier", "{results.tier_label}" }
                p { class: "style", "Feedback Style: {results.style_label}" }
            }

            div { class: "results-grid",
                section { class: "card",
                    h3 { "COACH Framework" }
                    ChartBars { bars: results.coach.clone() }
                }
                section { class: "card",
                    h3 { "Skill Breakdown" }
                    ChartBars { bars: results.breakdown.clone() }
                }
            }

            section { class: "card",
                h3 { "Your Strengths" }
                ul { class: "strengths",
                    for strength in results.strengths.iter() {
                        li {
                            h4 { "{strength.title}" }
                            p { "{strength.description}" }
                        }
                    }
                }
            }

            if !results.growth_areas.is_empty() {
                section { class: "card",
                    h3 { "Growth Opportunities" }
                    ul { class: "growth",
                        for area in results.growth_areas.iter() {
                            li {
                                div { class: "bar-label",
                                    span { "{area.label}" }
                                    span { "{area.score_label}" }
                                }
                                div { class: "progress-track",
                                    div { class: "progress-fill", style: "{area.width_style}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "card",
                h3 { "Your Growth Plan" }
                ol { class: "plan",
                    for phase in results.plan.iter() {
                        li {
                            span { class: "weeks", "{phase.weeks}" }
                            h4 { "{phase.focus}" }
                            p { "{phase.description}" }
                        }
                    }
                }
            }

            // No handlers: export and sharing are not wired up.
            div { class: "actions",
                button { class: "btn", "Download Report" }
                button { class: "btn", "Share Results" }
                button { class: "btn btn-primary", "Team Analysis" }
            }
        }
    }
}

#[component]
fn ChartBars(bars: Vec<ChartBarVm>) -> Element {
    rsx! {
        ul { class: "bars",
            for bar in bars {
                li {
                    div { class: "bar-label",
                        span { "{bar.label}" }
                        span { "{bar.score}" }
                    }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "{bar.width_style}" }
                    }
                }
            }
        }
    }
}
