use dioxus::prelude::*;
use shared_types::{format_cents, Reservation, ReservationStatus};
use shared_ui::components::{
    Badge, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, DetailGrid,
    DetailItem, DetailList, PageActions, PageHeader, PageTitle,
};

use super::shared::{
    use_list_state, EmptyCard, ErrorCard, ListFilters, Loading, PaginationControls,
};
use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::format_helpers::{format_date, format_stay, reservation_badge};
use crate::routes::Route;

/// The signed-in guest's reservations.
#[component]
pub fn Reservations() -> Element {
    rsx! { ReservationList { scoped: true } }
}

/// Reservation list. `scoped` limits it to the signed-in customer.
#[component]
pub fn ReservationList(scoped: bool) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_auth();
    let state = use_list_state();

    let data = use_resource(move || {
        let api = api.clone();
        let customer = if scoped { auth.customer_id() } else { None };
        let query = state.query().customer(customer);
        async move { api.list_reservations(&query).await }
    });

    let statuses: Vec<(&'static str, &'static str)> = ReservationStatus::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();

    rsx! {
        PageHeader {
            PageTitle {
                subtitle: Some(if scoped { "Upcoming and past stays" } else { "Every booking across the property" }.to_string()),
                if scoped { "My reservations" } else { "Reservations" }
            }
        }

        ListFilters {
            state: state,
            placeholder: "Search by guest or room...",
            statuses: statuses,
        }

        match &*data.read() {
            Some(Ok(resp)) if resp.data.is_empty() => rsx! {
                EmptyCard { message: "No reservations found." }
            },
            Some(Ok(resp)) => rsx! {
                ReservationTable { reservations: resp.data.clone(), admin: !scoped }
                PaginationControls { meta: resp.meta.clone(), page: state.page }
            },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }
    }
}

/// Reservation rows. Admin rows open the guest, user rows open the booking.
#[component]
pub fn ReservationTable(reservations: Vec<Reservation>, admin: bool) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "#" }
                if admin {
                    DataTableColumn { "Guest" }
                }
                DataTableColumn { "Room" }
                DataTableColumn { "Stay" }
                DataTableColumn { "Status" }
                DataTableColumn { numeric: true, "Total" }
            }
            DataTableBody {
                for reservation in reservations {
                    ReservationRow { key: "{reservation.id}", reservation: reservation, admin: admin }
                }
            }
        }
    }
}

#[component]
fn ReservationRow(reservation: Reservation, admin: bool) -> Element {
    let target = if admin {
        Route::AdminCustomerDetail { id: reservation.customer_id }
    } else {
        Route::ReservationDetail { id: reservation.id }
    };

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(target.clone());
            },
            DataTableCell { "{reservation.id}" }
            if admin {
                DataTableCell { "{reservation.customer_name}" }
            }
            DataTableCell { "{reservation.room_number}" }
            DataTableCell { "{format_stay(reservation.check_in, reservation.check_out)}" }
            DataTableCell {
                Badge { variant: reservation_badge(reservation.status), "{reservation.status.label()}" }
            }
            DataTableCell { numeric: true, "{format_cents(reservation.total_cents)}" }
        }
    }
}

#[component]
pub fn ReservationDetail(id: i64) -> Element {
    let api = use_context::<ApiClient>();

    let data = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        async move { api.get_reservation(id).await }
    }));

    rsx! {
        PageHeader {
            PageTitle { "Reservation #{id}" }
            PageActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::Reservations {});
                    },
                    "Back to reservations"
                }
            }
        }

        match &*data.read() {
            Some(Ok(reservation)) => rsx! { ReservationSummary { reservation: reservation.clone() } },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
fn ReservationSummary(reservation: Reservation) -> Element {
    let nights = reservation.nights();

    rsx! {
        DetailGrid {
            Card {
                CardHeader { CardTitle { "Stay" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Room", value: reservation.room_number.clone() }
                        DetailItem { label: "Check-in", value: format_date(reservation.check_in) }
                        DetailItem { label: "Check-out", value: format_date(reservation.check_out) }
                        DetailItem { label: "Nights", value: nights.to_string() }
                        DetailItem { label: "Guests", value: reservation.guests.to_string() }
                        DetailItem { label: "Status",
                            Badge { variant: reservation_badge(reservation.status), "{reservation.status.label()}" }
                        }
                    }
                }
            }
            Card {
                CardHeader { CardTitle { "Billing" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Guest", value: reservation.customer_name.clone() }
                        DetailItem { label: "Total", value: format_cents(reservation.total_cents) }
                        if let Some(notes) = reservation.notes.clone() {
                            DetailItem { label: "Notes", value: notes }
                        }
                    }
                }
            }
        }
    }
}
