//! Display helpers shared by the dashboard pages.

use chrono::{DateTime, NaiveDate};
use shared_types::{PaymentStatus, ReservationStatus, RoomStatus};
use shared_ui::BadgeVariant;

/// "Jan 20, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "Jan 20 – Jan 23, 2026 (3 nights)".
pub fn format_stay(check_in: NaiveDate, check_out: NaiveDate) -> String {
    let nights = (check_out - check_in).num_days().max(0);
    let unit = if nights == 1 { "night" } else { "nights" };
    format!(
        "{} – {} ({nights} {unit})",
        check_in.format("%b %-d"),
        format_date(check_out)
    )
}

/// Format an RFC 3339 timestamp as "Jan 20, 2026 9:35 PM".
///
/// Unparseable input is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn reservation_badge(status: ReservationStatus) -> BadgeVariant {
    match status {
        ReservationStatus::Pending => BadgeVariant::Warning,
        ReservationStatus::Confirmed => BadgeVariant::Info,
        ReservationStatus::CheckedIn => BadgeVariant::Success,
        ReservationStatus::CheckedOut => BadgeVariant::Neutral,
        ReservationStatus::Cancelled => BadgeVariant::Danger,
    }
}

pub fn payment_badge(status: PaymentStatus) -> BadgeVariant {
    match status {
        PaymentStatus::Pending => BadgeVariant::Warning,
        PaymentStatus::Paid => BadgeVariant::Success,
        PaymentStatus::Refunded => BadgeVariant::Neutral,
        PaymentStatus::Failed => BadgeVariant::Danger,
    }
}

pub fn room_badge(status: RoomStatus) -> BadgeVariant {
    match status {
        RoomStatus::Available => BadgeVariant::Success,
        RoomStatus::Occupied => BadgeVariant::Info,
        RoomStatus::Cleaning => BadgeVariant::Warning,
        RoomStatus::Maintenance => BadgeVariant::Danger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dates_are_human_readable() {
        assert_eq!(format_date(date(2026, 1, 5)), "Jan 5, 2026");
        assert_eq!(
            format_stay(date(2026, 1, 20), date(2026, 1, 23)),
            "Jan 20 – Jan 23, 2026 (3 nights)"
        );
        assert_eq!(
            format_stay(date(2026, 3, 1), date(2026, 3, 2)),
            "Mar 1 – Mar 2, 2026 (1 night)"
        );
    }

    #[test]
    fn timestamps_fall_back_to_raw() {
        assert_eq!(
            format_timestamp("2026-01-20T21:35:00Z"),
            "Jan 20, 2026 9:35 PM"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn cancelled_reads_as_danger() {
        assert_eq!(
            reservation_badge(ReservationStatus::Cancelled),
            BadgeVariant::Danger
        );
        assert_eq!(payment_badge(PaymentStatus::Paid), BadgeVariant::Success);
        assert_eq!(room_badge(RoomStatus::Cleaning), BadgeVariant::Warning);
    }
}
