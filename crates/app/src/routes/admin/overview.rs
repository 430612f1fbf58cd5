use dioxus::prelude::*;
use shared_types::{format_cents, AnalyticsSummary, Role};
use shared_ui::components::{
    Badge, Card, CardContent, CardDescription, CardHeader, CardTitle, DetailItem, DetailList,
    PageHeader, PageTitle, StatCard, StatGrid,
};

use crate::api::ApiClient;
use crate::routes::shared::{ErrorCard, Loading};
use crate::use_features;

#[component]
pub fn AdminOverview() -> Element {
    let api = use_context::<ApiClient>();
    let roles = use_resource(move || {
        let api = api.clone();
        async move { api.list_roles().await }
    });

    rsx! {
        PageHeader {
            PageTitle { subtitle: Some("How the property is doing today".to_string()), "Overview" }
        }

        OverviewStats {}

        match &*roles.read() {
            Some(Ok(roles)) => rsx! { RolesCard { roles: roles.clone() } },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }
    }
}

/// Headline numbers from the analytics summary. Renders nothing when
/// analytics is switched off.
#[component]
pub fn OverviewStats() -> Element {
    let features = use_features();
    let api = use_context::<ApiClient>();

    let summary = use_resource(move || {
        let api = api.clone();
        let enabled = features.analytics;
        async move {
            if enabled {
                api.analytics().await.map(Some)
            } else {
                Ok(None)
            }
        }
    });

    match &*summary.read() {
        Some(Ok(Some(summary))) => rsx! { SummaryStats { summary: summary.clone() } },
        Some(Ok(None)) => rsx! {},
        Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
        None => rsx! { Loading {} },
    }
}

#[component]
pub fn SummaryStats(summary: AnalyticsSummary) -> Element {
    let occupancy = format!("{:.0}%", summary.occupancy_rate());
    let rooms_hint = format!("{} of {} rooms", summary.occupied_rooms, summary.total_rooms);

    rsx! {
        StatGrid {
            StatCard { label: "Occupancy", value: occupancy, hint: rooms_hint }
            StatCard { label: "Active reservations", value: summary.active_reservations.to_string() }
            StatCard { label: "Customers", value: summary.total_customers.to_string() }
            StatCard {
                label: "Revenue this month",
                value: format_cents(summary.revenue_month_cents),
            }
        }
    }
}

#[component]
fn RolesCard(roles: Vec<Role>) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Staff roles" }
                CardDescription { "Permissions granted to each dashboard role." }
            }
            CardContent {
                DetailList {
                    for role in roles {
                        DetailItem { key: "{role.id}", label: "Role",
                            strong { "{role.name}" }
                            for permission in role.permissions.iter() {
                                Badge { "{permission}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
