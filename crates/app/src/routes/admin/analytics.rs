use dioxus::prelude::*;
use shared_types::{format_cents, AnalyticsSummary};
use shared_ui::components::{
    Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use super::overview::SummaryStats;
use crate::api::ApiClient;
use crate::routes::shared::{DisabledCard, ErrorCard, Loading};
use crate::use_features;

#[component]
pub fn AdminAnalytics() -> Element {
    let features = use_features();

    rsx! {
        PageHeader {
            PageTitle { "Analytics" }
        }
        if features.analytics {
            AnalyticsReport {}
        } else {
            DisabledCard { feature: "Analytics" }
        }
    }
}

#[component]
fn AnalyticsReport() -> Element {
    let api = use_context::<ApiClient>();
    let summary = use_resource(move || {
        let api = api.clone();
        async move { api.analytics().await }
    });

    match &*summary.read() {
        Some(Ok(summary)) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./analytics.css") }
            SummaryStats { summary: summary.clone() }
            RevenueByMonth { summary: summary.clone() }
        },
        Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
        None => rsx! { Loading {} },
    }
}

/// Monthly revenue with a bar scaled against the best month.
#[component]
fn RevenueByMonth(summary: AnalyticsSummary) -> Element {
    let peak = summary.peak_revenue_cents();

    rsx! {
        Card {
            CardHeader { CardTitle { "Revenue by month" } }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Month" }
                        DataTableColumn { "" }
                        DataTableColumn { numeric: true, "Revenue" }
                    }
                    DataTableBody {
                        if summary.revenue_by_month.is_empty() {
                            DataTableEmpty { columns: 3, "No revenue recorded yet." }
                        }
                        for point in summary.revenue_by_month.iter() {
                            DataTableRow { key: "{point.month}",
                                DataTableCell { "{point.month}" }
                                DataTableCell {
                                    div { class: "revenue-bar",
                                        div {
                                            class: "revenue-bar-fill",
                                            style: "width: {bar_width(point.revenue_cents, peak)}%",
                                        }
                                    }
                                }
                                DataTableCell { numeric: true, "{format_cents(point.revenue_cents)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Bar width in percent of the peak month, 0 when there is no revenue.
fn bar_width(revenue_cents: i64, peak_cents: i64) -> i64 {
    if peak_cents <= 0 {
        return 0;
    }
    (revenue_cents.max(0) * 100 / peak_cents).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::RevenuePoint;

    #[test]
    fn bars_scale_against_the_peak() {
        assert_eq!(bar_width(50_000, 200_000), 25);
        assert_eq!(bar_width(200_000, 200_000), 100);
        assert_eq!(bar_width(-10, 200_000), 0);
        assert_eq!(bar_width(10, 0), 0);
    }

    #[test]
    fn revenue_table_renders_each_month() {
        let summary = AnalyticsSummary {
            revenue_by_month: vec![
                RevenuePoint { month: "2026-08".into(), revenue_cents: 900_000 },
                RevenuePoint { month: "2026-09".into(), revenue_cents: 450_000 },
            ],
            ..AnalyticsSummary::default()
        };
        let html = dioxus_ssr::render_element(rsx! {
            RevenueByMonth { summary: summary }
        });
        assert!(html.contains("2026-08"), "{html}");
        assert!(html.contains("width: 50%"));
        assert!(html.contains("$9,000.00"));
        assert!(!html.contains("No revenue recorded yet."));
    }
}
