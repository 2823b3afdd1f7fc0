use dioxus::prelude::*;
use dioxus_router::use_navigator;

use britpass_core::model::SessionResult;

use crate::routes::Route;
use crate::vm::ReviewRowVm;

#[component]
pub fn ResultPanel(
    result: SessionResult,
    rows: Vec<ReviewRowVm>,
    on_retake: EventHandler<()>,
) -> Element {
    let navigator = use_navigator();
    let (banner_class, heading) = if result.passed() {
        ("result-banner result-banner--pass", "Test Passed!")
    } else {
        ("result-banner result-banner--fail", "Test Failed")
    };

    rsx! {
        div { class: "result",
            div { class: "{banner_class}",
                h2 { class: "result-heading", "{heading}" }
                p { class: "result-score",
                    "You scored {result.correct()} out of {result.total()} ({result.score()}%)"
                }
                div { class: "result-actions",
                    button {
                        class: "btn btn-light",
                        r#type: "button",
                        onclick: move |_| on_retake.call(()),
                        "Retake Test"
                    }
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Home {});
                        },
                        "Go Home"
                    }
                }
            }

            h3 { class: "review-title", "Question Review" }
            ul { class: "review-list",
                for row in rows {
                    ReviewRow { row }
                }
            }
        }
    }
}

#[component]
fn ReviewRow(row: ReviewRowVm) -> Element {
    let card_class = if row.is_correct {
        "review-card review-card--correct"
    } else {
        "review-card review-card--wrong"
    };
    let answer_class = if row.is_correct {
        "answer answer--correct"
    } else {
        "answer answer--wrong"
    };
    let your_answer = row
        .your_answer
        .clone()
        .unwrap_or_else(|| "No answer".to_string());

    rsx! {
        li { class: "{card_class}",
            span { class: "review-number", "{row.number}" }
            div { class: "review-body",
                h4 { class: "review-prompt", "{row.prompt}" }
                p { class: "review-answer",
                    span { class: "review-label", "Your answer: " }
                    span { class: "{answer_class}", "{your_answer}" }
                }
                if !row.is_correct {
                    p { class: "review-answer",
                        span { class: "review-label", "Correct answer: " }
                        span { class: "answer answer--correct", "{row.correct_answer}" }
                    }
                }
                p { class: "review-context", "{row.explanation}" }
            }
        }
    }
}
