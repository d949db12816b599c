use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::{HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Banner {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Persistent header shown on every page.
#[component]
pub fn Banner() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.title().to_string();

    rsx! {
        header { class: "banner",
            h1 { class: "banner__title", "{title}" }
        }
    }
}
