use pretty_assertions::assert_eq;
use shared_types::{RouteTable, View, ViewStore};

use crate::common::{navigate, recorded_store};

#[test]
fn test_session_follows_navigation_across_areas() {
    let table = RouteTable::dashboard();
    let (store, seen) = recorded_store(View::User);

    for path in [
        "/reservations",
        "/admin",
        "/admin/customers/7",
        "/profile",
        "/",
        "/payments",
        "/rooms",
    ] {
        navigate(&table, &store, path);
    }

    // Only the two area crossings notify; agnostic pages keep the view.
    assert_eq!(*seen.borrow(), vec![View::Admin, View::User]);
    assert_eq!(store.get(), View::User);
}

#[test]
fn test_agnostic_pages_keep_whatever_view_is_active() {
    let table = RouteTable::dashboard();
    let (store, seen) = recorded_store(View::Admin);

    for path in ["/profile", "/", "/login", "/no/such/page"] {
        let detection = navigate(&table, &store, path);
        assert_eq!(detection.target_view, None, "{path}");
    }

    assert!(seen.borrow().is_empty());
    assert_eq!(store.get(), View::Admin);
}

#[test]
fn test_two_sessions_navigate_independently() {
    let table = RouteTable::dashboard();
    let guest = ViewStore::new(View::User);
    let staff = ViewStore::new(View::User);

    navigate(&table, &staff, "/admin/analytics");
    navigate(&table, &guest, "/reservations");

    assert_eq!(staff.get(), View::Admin);
    assert_eq!(guest.get(), View::User);
}

#[test]
fn test_repeat_navigation_within_area_is_quiet() {
    let table = RouteTable::dashboard();
    let (store, seen) = recorded_store(View::User);

    for _ in 0..3 {
        navigate(&table, &store, "/admin/rooms");
    }

    assert_eq!(*seen.borrow(), vec![View::Admin]);
}
