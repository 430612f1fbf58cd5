use std::cell::RefCell;
use std::rc::Rc;

use shared_types::{detect, AuthUser, RouteTable, View, ViewDetection, ViewStore};

/// Every path the dashboard router can show, paired with the view it
/// belongs to (`None` for pages shared by both views).
pub const DASHBOARD_PATHS: &[(&str, Option<View>)] = &[
    ("/", None),
    ("/login", None),
    ("/profile", None),
    ("/reservations", Some(View::User)),
    ("/reservations/42", Some(View::User)),
    ("/payments", Some(View::User)),
    ("/rooms", Some(View::User)),
    ("/admin", Some(View::Admin)),
    ("/admin/reservations", Some(View::Admin)),
    ("/admin/customers", Some(View::Admin)),
    ("/admin/customers/7", Some(View::Admin)),
    ("/admin/payments", Some(View::Admin)),
    ("/admin/rooms", Some(View::Admin)),
    ("/admin/products", Some(View::Admin)),
    ("/admin/analytics", Some(View::Admin)),
];

/// A store plus a log of every value its observer was handed.
pub fn recorded_store(initial: View) -> (ViewStore, Rc<RefCell<Vec<View>>>) {
    let store = ViewStore::new(initial);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |view| sink.borrow_mut().push(view));
    (store, seen)
}

/// Navigate the way the dashboard shell does under the auto policy: detect,
/// then apply the switch if one is warranted.
pub fn navigate(table: &RouteTable, store: &ViewStore, path: &str) -> ViewDetection {
    let detection = detect(table, path, store.get());
    if let Some(target) = detection.switch_target() {
        store.set(target);
    }
    detection
}

pub fn test_user(role: &str) -> AuthUser {
    AuthUser {
        id: 1,
        username: "jdoe".to_string(),
        display_name: "Jamie Doe".to_string(),
        email: "jamie@example.com".to_string(),
        role: role.to_string(),
        customer_id: Some(12),
        avatar_url: None,
    }
}
