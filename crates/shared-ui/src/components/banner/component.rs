use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BannerTone {
    #[default]
    Info,
    Warning,
}

impl BannerTone {
    fn as_str(self) -> &'static str {
        match self {
            BannerTone::Info => "info",
            BannerTone::Warning => "warning",
        }
    }
}

/// Inline notice spanning the content column, with action buttons as children.
#[component]
pub fn Banner(
    message: String,
    #[props(default)] tone: BannerTone,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "banner",
            role: "status",
            "data-tone": tone.as_str(),
            p { class: "banner-message", "{message}" }
            div { class: "banner-actions", {children} }
        }
    }
}
