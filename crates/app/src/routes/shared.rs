//! Pieces every list and detail page uses.

use dioxus::prelude::*;
use shared_types::{AppError, ListQuery, PaginationMeta};
use shared_ui::components::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    SearchBar, SkeletonRows,
};

/// Search text, status filter and page of a list page.
///
/// Search and status edits reset to page 1.
#[derive(Clone, Copy, PartialEq)]
pub struct ListState {
    pub page: Signal<i64>,
    pub search: Signal<String>,
    pub status: Signal<String>,
}

impl ListState {
    /// Reactive: reads every signal, so resources built from it refetch.
    pub fn query(&self) -> ListQuery {
        ListQuery::new()
            .page((self.page)())
            .search((self.search)())
            .status((self.status)())
    }
}

pub fn use_list_state() -> ListState {
    ListState {
        page: use_signal(|| 1i64),
        search: use_signal(String::new),
        status: use_signal(|| "all".to_string()),
    }
}

/// Search box plus an optional status dropdown.
///
/// `statuses` holds `(value, label)` pairs; an "All" entry is prepended.
#[component]
pub fn ListFilters(
    state: ListState,
    placeholder: &'static str,
    #[props(default)] statuses: Vec<(&'static str, &'static str)>,
) -> Element {
    let mut draft = use_signal(|| state.search.peek().clone());
    let mut page = state.page;
    let mut search = state.search;
    let mut status = state.status;

    rsx! {
        div { class: "list-filters",
            SearchBar {
                Input {
                    value: draft(),
                    placeholder: placeholder,
                    on_input: move |evt: FormEvent| draft.set(evt.value()),
                }
                Button {
                    onclick: move |_| {
                        search.set(draft());
                        page.set(1);
                    },
                    "Search"
                }
                if !search.read().is_empty() {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| {
                            draft.set(String::new());
                            search.set(String::new());
                            page.set(1);
                        },
                        "Clear"
                    }
                }
            }
            if !statuses.is_empty() {
                select {
                    "aria-label": "Status",
                    value: status(),
                    onchange: move |evt: FormEvent| {
                        status.set(evt.value());
                        page.set(1);
                    },
                    option { value: "all", "All statuses" }
                    for (value, label) in statuses {
                        option { key: "{value}", value: value, "{label}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PaginationControls(meta: PaginationMeta, page: Signal<i64>) -> Element {
    rsx! {
        div { class: "pagination",
            if meta.has_prev {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let current = *page.read();
                        page.set(current - 1);
                    },
                    "Previous"
                }
            }
            span { class: "pagination-info",
                "Page {meta.page} of {meta.total_pages} ({meta.total} total)"
            }
            if meta.has_next {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        let current = *page.read();
                        page.set(current + 1);
                    },
                    "Next"
                }
            }
        }
    }
}

#[component]
pub fn ErrorCard(error: AppError) -> Element {
    rsx! {
        Card { class: "page-error",
            CardHeader {
                CardTitle { "Could not load this page" }
                CardDescription { "{error.friendly_message()}" }
            }
        }
    }
}

#[component]
pub fn EmptyCard(message: &'static str) -> Element {
    rsx! {
        Card {
            CardContent {
                p { "{message}" }
            }
        }
    }
}

/// Shown in place of a page whose feature flag is off.
#[component]
pub fn DisabledCard(feature: &'static str) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{feature} is turned off" }
                CardDescription { "Enable it under [features] in dashboard.toml." }
            }
        }
    }
}

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading", SkeletonRows { rows: 4 } }
    }
}
