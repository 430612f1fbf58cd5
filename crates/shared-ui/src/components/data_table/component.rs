use dioxus::prelude::*;

/// Horizontally scrollable table.
#[component]
pub fn DataTable(#[props(default)] caption: Option<String>, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                if let Some(caption) = caption {
                    caption { class: "data-table-caption", "{caption}" }
                }
                {children}
            }
        }
    }
}

/// Wraps `DataTableColumn`s in `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        th {
            scope: "col",
            class: if numeric { "numeric" } else { "" },
            {children}
        }
    }
}

/// Row; becomes clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(#[props(default = false)] numeric: bool, children: Element) -> Element {
    rsx! {
        td {
            class: if numeric { "numeric" } else { "" },
            {children}
        }
    }
}

/// Full-width row shown when a table has no data.
#[component]
pub fn DataTableEmpty(columns: usize, children: Element) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{columns}", {children} }
        }
    }
}
