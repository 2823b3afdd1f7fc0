use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use britpass_core::model::TestMode;

use crate::views::{HomeView, StatsView, TestView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/test/:mode", TestView)] Test { mode: TestMode },
        #[route("/stats", StatsView)] Stats {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Topbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Topbar() -> Element {
    rsx! {
        nav { class: "topbar",
            Link { class: "brand", to: Route::Home {},
                span { class: "brand-mark", "B" }
                span { class: "brand-name", "BritPass" }
            }
            Link { class: "topbar-link", to: Route::Stats {}, "Statistics" }
        }
    }
}
