use dioxus::prelude::*;
use dioxus_router::use_navigator;

use britpass_core::model::{Progress, TestMode};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress_service = ctx.progress();

    let resource = use_resource(move || {
        let progress_service = progress_service.clone();
        async move {
            progress_service
                .load()
                .await
                .map_err(|_| ViewError::Unknown)
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page home-page",
            header { class: "hero",
                h2 { class: "hero-title",
                    "Master the "
                    span { class: "hero-accent", "Life in the UK" }
                    " Test"
                }
                p { class: "hero-subtitle",
                    "Targeted practice on the most common exam questions, with an AI tutor on hand to explain the answers."
                }
            }

            div { class: "mode-grid",
                ModeCard {
                    mode: TestMode::HighFrequency,
                    description: "The 40 most common questions reported from real exams. Start here for the best results.",
                    cta: "Start Common 40 Test",
                }
                ModeCard {
                    mode: TestMode::Mock,
                    description: "A complete 24-question test simulating the official exam.",
                    cta: "Start Mock Test",
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(progress) => rsx! {
                    HomeStats { progress }
                },
            }
        }
    }
}

#[component]
fn ModeCard(mode: TestMode, description: &'static str, cta: &'static str) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "mode-card",
            h3 { class: "mode-title", "{mode.label()}" }
            p { class: "mode-description", "{description}" }
            button {
                class: "btn btn-primary mode-start",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Test { mode });
                },
                "{cta}"
            }
        }
    }
}

#[component]
fn HomeStats(progress: Progress) -> Element {
    rsx! {
        div { class: "stat-strip",
            div { class: "stat-tile",
                span { class: "stat-value", "{progress.tests_taken()}" }
                span { class: "stat-label", "Tests Taken" }
            }
            div { class: "stat-tile",
                span { class: "stat-value", "{progress.average_score()}%" }
                span { class: "stat-label", "Avg. Score" }
            }
            div { class: "stat-tile",
                span { class: "stat-value stat-value--pass", "{progress.passes()}" }
                span { class: "stat-label", "Passes" }
            }
            div { class: "stat-tile",
                span { class: "stat-value stat-value--fail", "{progress.failures()}" }
                span { class: "stat-label", "Failures" }
            }
        }
    }
}
