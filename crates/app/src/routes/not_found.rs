use dioxus::prelude::*;

use crate::routes::Route;

/// Catch-all page. Sits outside the auth guard, so it also answers
/// signed-out visitors.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            div { class: "not-found-card",
                div { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "No such page" }
                p { class: "not-found-message",
                    "Nothing lives at "
                    code { "{path}" }
                    ". It may have moved, or the link is out of date."
                }
                Link { to: Route::Home {},
                    class: "not-found-link",
                    "Back to the dashboard"
                }
            }
        }
    }
}
