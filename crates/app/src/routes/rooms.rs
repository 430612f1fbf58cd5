use dioxus::prelude::*;
use shared_types::{format_cents, Room, RoomStatus};
use shared_ui::components::{
    Badge, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, PageHeader, PageTitle,
};

use super::shared::{
    use_list_state, EmptyCard, ErrorCard, ListFilters, Loading, PaginationControls,
};
use crate::api::ApiClient;
use crate::format_helpers::room_badge;

/// Room catalogue as guests see it: type, capacity and rate.
#[component]
pub fn Rooms() -> Element {
    rsx! { RoomList { admin: false } }
}

/// Rooms are property inventory, so the list is never customer-scoped;
/// `admin` adds the housekeeping status filter and columns.
#[component]
pub fn RoomList(admin: bool) -> Element {
    let api = use_context::<ApiClient>();
    let state = use_list_state();

    let data = use_resource(move || {
        let api = api.clone();
        let query = state.query();
        async move { api.list_rooms(&query).await }
    });

    let statuses: Vec<(&'static str, &'static str)> = if admin {
        RoomStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    } else {
        Vec::new()
    };

    rsx! {
        PageHeader {
            PageTitle { "Rooms" }
        }

        ListFilters {
            state: state,
            placeholder: "Search by number or type...",
            statuses: statuses,
        }

        match &*data.read() {
            Some(Ok(resp)) if resp.data.is_empty() => rsx! {
                EmptyCard { message: "No rooms match." }
            },
            Some(Ok(resp)) => rsx! {
                RoomTable { rooms: resp.data.clone(), admin: admin }
                PaginationControls { meta: resp.meta.clone(), page: state.page }
            },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
fn RoomTable(rooms: Vec<Room>, admin: bool) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Room" }
                DataTableColumn { "Type" }
                if admin {
                    DataTableColumn { "Floor" }
                }
                DataTableColumn { numeric: true, "Sleeps" }
                DataTableColumn { numeric: true, "Nightly rate" }
                if admin {
                    DataTableColumn { "Status" }
                }
            }
            DataTableBody {
                for room in rooms {
                    DataTableRow { key: "{room.id}",
                        DataTableCell { "{room.number}" }
                        DataTableCell { "{room.room_type}" }
                        if admin {
                            DataTableCell { "{room.floor}" }
                        }
                        DataTableCell { numeric: true, "{room.capacity}" }
                        DataTableCell { numeric: true, "{format_cents(room.nightly_rate_cents)}" }
                        if admin {
                            DataTableCell {
                                Badge { variant: room_badge(room.status), "{room.status.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
