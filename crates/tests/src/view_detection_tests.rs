use pretty_assertions::assert_eq;
use shared_types::{detect, RouteTable, View, ViewDetection};

use crate::common::DASHBOARD_PATHS;

#[test]
fn test_guest_view_entering_admin_customers_switches_to_admin() {
    let table = RouteTable::dashboard();
    assert_eq!(
        detect(&table, "/admin/customers", View::User),
        ViewDetection {
            target_view: Some(View::Admin),
            should_switch_view: true,
        }
    );
}

#[test]
fn test_admin_view_entering_reservations_switches_to_user() {
    let table = RouteTable::dashboard();
    assert_eq!(
        detect(&table, "/reservations", View::Admin),
        ViewDetection {
            target_view: Some(View::User),
            should_switch_view: true,
        }
    );
}

#[test]
fn test_admin_view_on_profile_stays_put() {
    let table = RouteTable::dashboard();
    assert_eq!(
        detect(&table, "/profile", View::Admin),
        ViewDetection {
            target_view: None,
            should_switch_view: false,
        }
    );
}

#[test]
fn test_switch_only_when_target_differs() {
    let table = RouteTable::dashboard();
    for (path, expected) in DASHBOARD_PATHS {
        for current in View::ALL {
            let detection = detect(&table, path, current);
            assert_eq!(detection.target_view, *expected, "{path}");
            assert_eq!(
                detection.should_switch_view,
                expected.is_some_and(|target| target != current),
                "{path} from {current}"
            );
        }
    }
}

#[test]
fn test_detect_is_deterministic() {
    let table = RouteTable::dashboard();
    for (path, _) in DASHBOARD_PATHS {
        for current in View::ALL {
            let first = detect(&table, path, current);
            assert_eq!(detect(&table, path, current), first);
            assert_eq!(detect(&RouteTable::dashboard(), path, current), first);
        }
    }
}

#[test]
fn test_switch_target_only_when_switching() {
    let table = RouteTable::dashboard();
    assert_eq!(
        detect(&table, "/admin", View::User).switch_target(),
        Some(View::Admin)
    );
    assert_eq!(detect(&table, "/admin", View::Admin).switch_target(), None);
    assert_eq!(detect(&table, "/", View::Admin).switch_target(), None);
}

#[test]
fn test_detection_serializes_for_logs() {
    let detection = detect(&RouteTable::dashboard(), "/admin", View::User);
    let json = serde_json::to_value(detection).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "target_view": "admin", "should_switch_view": true })
    );
}
