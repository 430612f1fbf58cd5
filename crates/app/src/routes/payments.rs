use dioxus::prelude::*;
use shared_types::{format_cents, Payment, PaymentStatus};
use shared_ui::components::{
    Badge, DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader,
    DataTableRow, PageHeader, PageTitle,
};

use super::shared::{
    use_list_state, EmptyCard, ErrorCard, ListFilters, Loading, PaginationControls,
};
use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::format_helpers::{format_timestamp, payment_badge};

#[component]
pub fn Payments() -> Element {
    rsx! { PaymentList { scoped: true } }
}

/// Payment list. `scoped` limits it to the signed-in customer.
#[component]
pub fn PaymentList(scoped: bool) -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_auth();
    let state = use_list_state();

    let data = use_resource(move || {
        let api = api.clone();
        let customer = if scoped { auth.customer_id() } else { None };
        let query = state.query().customer(customer);
        async move { api.list_payments(&query).await }
    });

    let statuses: Vec<(&'static str, &'static str)> = PaymentStatus::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();

    rsx! {
        PageHeader {
            PageTitle { if scoped { "My payments" } else { "Payments" } }
        }

        ListFilters {
            state: state,
            placeholder: "Search by method or reservation...",
            statuses: statuses,
        }

        match &*data.read() {
            Some(Ok(resp)) if resp.data.is_empty() => rsx! {
                EmptyCard { message: "No payments recorded yet." }
            },
            Some(Ok(resp)) => rsx! {
                PaymentTable { payments: resp.data.clone() }
                PaginationControls { meta: resp.meta.clone(), page: state.page }
            },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
pub fn PaymentTable(payments: Vec<Payment>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Reservation" }
                DataTableColumn { "Method" }
                DataTableColumn { "Paid at" }
                DataTableColumn { "Status" }
                DataTableColumn { numeric: true, "Amount" }
            }
            DataTableBody {
                for payment in payments {
                    DataTableRow { key: "{payment.id}",
                        DataTableCell { "#{payment.reservation_id}" }
                        DataTableCell { "{payment.method}" }
                        DataTableCell {
                            {payment.paid_at.as_deref().map(format_timestamp).unwrap_or_else(|| "--".to_string())}
                        }
                        DataTableCell {
                            Badge { variant: payment_badge(payment.status), "{payment.status.label()}" }
                        }
                        DataTableCell { numeric: true,
                            "{format_cents(payment.amount_cents)} {payment.currency}"
                        }
                    }
                }
            }
        }
    }
}
