use dioxus::prelude::*;

/// Container for label/value rows in a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// A label/value row inside a `DetailList`.
///
/// Plain text goes in `value`; rich content (badges, links) goes in
/// children, which take precedence.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value",
                if has_children {
                    {children}
                } else {
                    "{value}"
                }
            }
        }
    }
}

/// Responsive grid of cards on detail pages.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}
