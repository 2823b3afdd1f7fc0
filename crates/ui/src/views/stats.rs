use dioxus::prelude::*;

use britpass_core::model::Progress;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{map_history_rows, map_trend_bars};

#[component]
pub fn StatsView() -> Element {
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
        div { class: "page stats-page",
            h2 { class: "view-title", "Your Progress" }

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
                    StatsContent { progress }
                },
            }
        }
    }
}

#[component]
fn StatsContent(progress: Progress) -> Element {
    let stats = progress.stats();
    let bars = map_trend_bars(&progress);
    let rows = map_history_rows(&progress);

    let bar_nodes = bars.iter().map(|bar| {
        let class = if bar.passed {
            "trend-bar trend-bar--pass"
        } else {
            "trend-bar trend-bar--fail"
        };
        // Keep even a zero score visible as a sliver.
        let height = bar.score.max(4);
        let title = bar.title.clone();
        rsx! {
            div { class: "{class}", style: "height: {height}%", title: "{title}" }
        }
    });

    let row_nodes = rows.iter().map(|row| {
        let badge = if row.passed {
            "badge badge--pass"
        } else {
            "badge badge--fail"
        };
        let date = row.date.clone();
        let mode = row.mode_label;
        let score = row.score_label.clone();
        let outcome = row.outcome_label;
        rsx! {
            tr {
                td { "{date}" }
                td { "{mode}" }
                td { "{score}" }
                td {
                    span { class: "{badge}", "{outcome}" }
                }
            }
        }
    });

    rsx! {
        div { class: "stat-strip",
            div { class: "stat-tile",
                span { class: "stat-value", "{stats.pass_rate}%" }
                span { class: "stat-label", "Pass Rate" }
            }
            div { class: "stat-tile",
                span { class: "stat-value stat-value--streak", "{stats.current_streak}" }
                span { class: "stat-label", "Current Streak" }
            }
            div { class: "stat-tile",
                span { class: "stat-value stat-value--pass", "{stats.average_score}%" }
                span { class: "stat-label", "Average Score" }
            }
        }

        section { class: "panel",
            h3 { class: "panel-title", "Performance History" }
            if progress.is_empty() {
                p { class: "panel-empty", "No tests taken yet." }
            } else {
                div { class: "trend-strip",
                    {bar_nodes}
                }
            }
        }

        section { class: "panel",
            h3 { class: "panel-title", "Recent Test Log" }
            if progress.is_empty() {
                p { class: "panel-empty", "No tests taken yet." }
            } else {
                table { class: "history-table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Mode" }
                            th { "Score" }
                            th { "Result" }
                        }
                    }
                    tbody {
                        {row_nodes}
                    }
                }
            }
        }
    }
}
