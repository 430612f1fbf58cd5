use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::{ListQuery, Reservation, View};
use shared_ui::components::{PageHeader, PageTitle, StatCard, StatGrid};

use super::admin::OverviewStats;
use super::shared::{ErrorCard, Loading};
use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::format_helpers::format_date;
use crate::view::use_current_view;

/// Landing page. The path belongs to neither view, so what it shows follows
/// whichever view is active.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let view = use_current_view();

    let name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    rsx! {
        PageHeader {
            PageTitle { subtitle: Some(subtitle(view).to_string()), "Welcome back, {name}" }
        }

        match view {
            View::User => rsx! { GuestHome {} },
            View::Admin => rsx! { OverviewStats {} },
        }
    }
}

fn subtitle(view: View) -> &'static str {
    match view {
        View::User => "Your stays at a glance",
        View::Admin => "Front desk summary",
    }
}

#[component]
fn GuestHome() -> Element {
    let api = use_context::<ApiClient>();
    let auth = use_auth();

    let data = use_resource(move || {
        let api = api.clone();
        let query = ListQuery::new().limit(100).customer(auth.customer_id());
        async move { api.list_reservations(&query).await }
    });

    match &*data.read() {
        Some(Ok(resp)) => {
            let summary = GuestSummary::from_reservations(&resp.data, chrono::Utc::now().date_naive());
            rsx! { GuestStats { summary: summary } }
        }
        Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
        None => rsx! { Loading {} },
    }
}

/// What a guest wants to know first: how many stays are live and when the
/// next one starts.
#[derive(Debug, Clone, PartialEq)]
struct GuestSummary {
    active: usize,
    next_check_in: Option<NaiveDate>,
}

impl GuestSummary {
    fn from_reservations(reservations: &[Reservation], today: NaiveDate) -> Self {
        let active = reservations.iter().filter(|r| r.status.is_active());
        let next_check_in = active
            .clone()
            .map(|r| r.check_in)
            .filter(|d| *d >= today)
            .min();

        Self {
            active: active.count(),
            next_check_in,
        }
    }
}

#[component]
fn GuestStats(summary: GuestSummary) -> Element {
    let next = summary
        .next_check_in
        .map(format_date)
        .unwrap_or_else(|| "None booked".to_string());

    rsx! {
        StatGrid {
            StatCard { label: "Active stays", value: summary.active.to_string() }
            StatCard { label: "Next check-in", value: next }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ReservationStatus;

    fn stay(id: i64, check_in: &str, status: ReservationStatus) -> Reservation {
        let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d").unwrap();
        Reservation {
            id,
            customer_id: 3,
            customer_name: "Ana Silva".to_string(),
            room_number: "204".to_string(),
            check_in,
            check_out: check_in + chrono::Days::new(2),
            guests: 2,
            status,
            total_cents: 36_000,
            notes: None,
        }
    }

    #[test]
    fn summary_counts_active_stays_and_finds_next_check_in() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let reservations = vec![
            stay(1, "2026-12-01", ReservationStatus::Confirmed),
            stay(2, "2026-11-02", ReservationStatus::Pending),
            stay(3, "2026-10-18", ReservationStatus::CheckedIn),
            stay(4, "2026-10-25", ReservationStatus::Cancelled),
            stay(5, "2026-03-01", ReservationStatus::CheckedOut),
        ];

        let summary = GuestSummary::from_reservations(&reservations, today);

        assert_eq!(
            summary,
            GuestSummary {
                active: 3,
                next_check_in: NaiveDate::from_ymd_opt(2026, 11, 2),
            }
        );
    }

    #[test]
    fn guest_without_bookings_sees_none_booked() {
        let summary = GuestSummary::from_reservations(&[], NaiveDate::default());
        let html = dioxus_ssr::render_element(rsx! {
            GuestStats { summary: summary }
        });
        assert!(html.contains("None booked"), "{html}");
        assert!(html.contains("Active stays"));
    }
}
