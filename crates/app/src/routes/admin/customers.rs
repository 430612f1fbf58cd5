use dioxus::prelude::*;
use shared_types::{Customer, ListQuery};
use shared_ui::components::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    DetailGrid, DetailItem, DetailList, PageActions, PageHeader, PageTitle,
};

use crate::api::ApiClient;
use crate::format_helpers::format_timestamp;
use crate::routes::reservations::ReservationTable;
use crate::routes::shared::{
    use_list_state, EmptyCard, ErrorCard, ListFilters, Loading, PaginationControls,
};
use crate::routes::Route;

#[component]
pub fn AdminCustomers() -> Element {
    let api = use_context::<ApiClient>();
    let state = use_list_state();

    let data = use_resource(move || {
        let api = api.clone();
        let query = state.query();
        async move { api.list_customers(&query).await }
    });

    rsx! {
        PageHeader {
            PageTitle { "Customers" }
        }

        ListFilters { state: state, placeholder: "Search by name or email..." }

        match &*data.read() {
            Some(Ok(resp)) if resp.data.is_empty() => rsx! {
                EmptyCard { message: "No customers found." }
            },
            Some(Ok(resp)) => rsx! {
                CustomerTable { customers: resp.data.clone() }
                PaginationControls { meta: resp.meta.clone(), page: state.page }
            },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
fn CustomerTable(customers: Vec<Customer>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Email" }
                DataTableColumn { "Phone" }
                DataTableColumn { numeric: true, "Stays" }
            }
            DataTableBody {
                for customer in customers {
                    CustomerRow { key: "{customer.id}", customer: customer }
                }
            }
        }
    }
}

#[component]
fn CustomerRow(customer: Customer) -> Element {
    let id = customer.id;
    let phone = customer.phone.clone().unwrap_or_else(|| "--".to_string());

    rsx! {
        DataTableRow {
            onclick: move |_| {
                navigator().push(Route::AdminCustomerDetail { id });
            },
            DataTableCell {
                "{customer.full_name()} "
                if customer.vip {
                    Badge { variant: BadgeVariant::Warning, "VIP" }
                }
            }
            DataTableCell { "{customer.email}" }
            DataTableCell { "{phone}" }
            DataTableCell { numeric: true, "{customer.total_stays}" }
        }
    }
}

#[component]
pub fn AdminCustomerDetail(id: i64) -> Element {
    let api = use_context::<ApiClient>();

    let customer = use_resource(use_reactive((&id,), {
        let api = api.clone();
        move |(id,)| {
            let api = api.clone();
            async move { api.get_customer(id).await }
        }
    }));

    let stays = use_resource(use_reactive((&id,), move |(id,)| {
        let api = api.clone();
        let query = ListQuery::new().customer(Some(id));
        async move { api.list_reservations(&query).await }
    }));

    rsx! {
        PageHeader {
            PageTitle { "Customer #{id}" }
            PageActions {
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| {
                        navigator().push(Route::AdminCustomers {});
                    },
                    "Back to customers"
                }
            }
        }

        match &*customer.read() {
            Some(Ok(customer)) => rsx! { CustomerProfile { customer: customer.clone() } },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }

        Card {
            CardHeader { CardTitle { "Reservations" } }
            CardContent {
                match &*stays.read() {
                    Some(Ok(resp)) if resp.data.is_empty() => rsx! {
                        EmptyCard { message: "This guest has no reservations." }
                    },
                    Some(Ok(resp)) => rsx! {
                        ReservationTable { reservations: resp.data.clone(), admin: true }
                    },
                    Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
                    None => rsx! { Loading {} },
                }
            }
        }
    }
}

#[component]
fn CustomerProfile(customer: Customer) -> Element {
    rsx! {
        DetailGrid {
            Card {
                CardHeader { CardTitle { "{customer.full_name()}" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Email", value: customer.email.clone() }
                        DetailItem {
                            label: "Phone",
                            value: customer.phone.clone().unwrap_or_else(|| "--".to_string()),
                        }
                        DetailItem { label: "Stays", value: customer.total_stays.to_string() }
                        DetailItem { label: "Guest since", value: format_timestamp(&customer.created_at) }
                        if customer.vip {
                            DetailItem { label: "Tier",
                                Badge { variant: BadgeVariant::Warning, "VIP" }
                            }
                        }
                    }
                }
            }
        }
    }
}
