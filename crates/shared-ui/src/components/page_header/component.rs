use dioxus::prelude::*;

/// Title row of a page, with optional subtitle and actions.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header", {children} }
    }
}

#[component]
pub fn PageTitle(#[props(default)] subtitle: Option<String>, children: Element) -> Element {
    rsx! {
        div { class: "page-title-block",
            h1 { class: "page-title", {children} }
            if let Some(subtitle) = subtitle {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn PageActions(children: Element) -> Element {
    rsx! {
        div { class: "page-actions", {children} }
    }
}
