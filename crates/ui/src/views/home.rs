use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let count = ctx.survey_service().question_count();
    let count_label = if count == 1 {
        "1 question".to_string()
    } else {
        format!("{count} questions")
    };

    rsx! {
        div { class: "page landing",
            div { class: "landing__pitch",
                p { "Which money roles do you like to take? Take the quiz and find out!" }
            }
            p { class: "landing__meta", "{count_label}. Pick the answer that fits your household best." }
            Link { class: "btn btn-primary", to: Route::Quiz {}, "Start Now" }
        }
    }
}
