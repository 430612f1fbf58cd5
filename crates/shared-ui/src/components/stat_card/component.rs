use dioxus::prelude::*;

/// A single headline metric: a label, a large value and an optional hint.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            span { class: "stat-card-label", "{label}" }
            strong { class: "stat-card-value", "{value}" }
            if let Some(hint) = hint {
                span { class: "stat-card-hint", "{hint}" }
            }
        }
    }
}

#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid", {children} }
    }
}
