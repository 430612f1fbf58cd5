use pretty_assertions::assert_eq;
use shared_types::{normalize_path, RoutePrefix, RouteTable, RouteTableError, View};

use crate::common::DASHBOARD_PATHS;

#[test]
fn test_every_dashboard_path_classifies_as_declared() {
    let table = RouteTable::dashboard();
    for (path, expected) in DASHBOARD_PATHS {
        assert_eq!(table.classify(path), *expected, "{path}");
    }
}

#[test]
fn test_classification_ignores_query_fragment_and_slashes() {
    let table = RouteTable::dashboard();
    for path in [
        "/admin/customers/",
        "//admin//customers",
        "/admin/customers?page=2",
        "/admin/customers#top",
        "admin/customers",
        "  /admin/customers  ",
    ] {
        assert_eq!(table.classify(path), Some(View::Admin), "{path:?}");
    }
}

#[test]
fn test_prefix_match_respects_segment_boundaries() {
    let table = RouteTable::dashboard();
    assert_eq!(table.classify("/administrator"), None);
    assert_eq!(table.classify("/rooms-and-rates"), None);
    assert_eq!(table.classify("/paymentsx/1"), None);
}

#[test]
fn test_classification_is_total() {
    let table = RouteTable::dashboard();
    for path in ["", " ", "?", "#", "///", "/%%%", "\u{1F600}", "/admin/\0"] {
        let _ = table.classify(path);
    }
    assert_eq!(table.classify(""), None);
    assert_eq!(table.classify("///"), None);
    assert_eq!(table.classify("/admin/\0"), Some(View::Admin));
}

#[test]
fn test_longest_prefix_wins_over_declaration_order() {
    let table = RouteTable::new(&[
        RoutePrefix::new("/admin", View::Admin),
        RoutePrefix::new("/admin/help", View::User),
    ])
    .unwrap();

    assert_eq!(table.classify("/admin/help/faq"), Some(View::User));
    assert_eq!(table.classify("/admin/helpdesk"), Some(View::Admin));
    assert_eq!(
        table.matching_prefix("/admin/help").map(|p| p.prefix),
        Some("/admin/help")
    );
}

#[test]
fn test_invalid_tables_are_rejected() {
    assert_eq!(
        RouteTable::new(&[RoutePrefix::new("", View::User)]).unwrap_err(),
        RouteTableError::EmptyPrefix
    );
    assert_eq!(
        RouteTable::new(&[RoutePrefix::new("/admin/", View::Admin)]).unwrap_err(),
        RouteTableError::NotNormalized {
            prefix: "/admin/",
            expected: "/admin".to_string(),
        }
    );
    assert_eq!(
        RouteTable::new(&[
            RoutePrefix::new("/rooms", View::User),
            RoutePrefix::new("/rooms", View::Admin),
        ])
        .unwrap_err(),
        RouteTableError::DuplicatePrefix("/rooms")
    );
}

#[test]
fn test_prefixes_for_each_view() {
    let table = RouteTable::dashboard();
    let mut user: Vec<_> = table.prefixes_for(View::User).collect();
    user.sort();
    assert_eq!(user, vec!["/payments", "/reservations", "/rooms"]);
    assert_eq!(table.prefixes_for(View::Admin).collect::<Vec<_>>(), vec!["/admin"]);
}

#[test]
fn test_normalize_path_forms() {
    assert_eq!(normalize_path("/"), Some("/".to_string()));
    assert_eq!(normalize_path("rooms/"), Some("/rooms".to_string()));
    assert_eq!(normalize_path("?page=1"), None);
    assert_eq!(normalize_path("   "), None);
}
