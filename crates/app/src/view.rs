//! Session view state for the dashboard.
//!
//! The `ViewStore` from `shared_types` is the single source of truth. A
//! `Signal` subscribed to it lets components re-render when it changes,
//! whoever the writer is.

use dioxus::prelude::*;
use shared_types::{detect, RouteTable, View, ViewDetection, ViewStore, ViewSwitchPolicy};
use std::rc::Rc;

use crate::auth::use_auth;
use crate::routes::Route;

#[derive(Clone)]
pub struct ViewContext {
    store: ViewStore,
    current: Signal<View>,
    table: Rc<RouteTable>,
    policy: ViewSwitchPolicy,
}

impl ViewContext {
    /// Reactive read; subscribes the calling component.
    pub fn current(&self) -> View {
        (self.current)()
    }

    /// Returns whether the view actually changed.
    pub fn set(&self, view: View) -> bool {
        let changed = self.store.set(view);
        if changed {
            tracing::info!(view = %view, "dashboard view changed");
        }
        changed
    }

    pub fn toggle(&self) -> View {
        let view = self.store.toggle();
        tracing::info!(view = %view, "dashboard view toggled");
        view
    }

    pub fn policy(&self) -> ViewSwitchPolicy {
        self.policy
    }

    /// Detection for `path` against the current view.
    pub fn detect(&self, path: &str) -> ViewDetection {
        detect(&self.table, path, self.current())
    }
}

/// Create the session's view context and provide it to descendants.
pub fn use_view_provider(initial: View, policy: ViewSwitchPolicy) -> ViewContext {
    let (ctx, subscription) = use_hook(|| {
        let store = ViewStore::new(initial);
        let current = Signal::new(initial);
        let subscription = store.subscribe(move |view| {
            let mut current = current;
            current.set(view);
        });
        let ctx = ViewContext {
            store,
            current,
            table: Rc::new(RouteTable::dashboard()),
            policy,
        };
        (ctx, subscription)
    });

    let store = ctx.store.clone();
    use_drop(move || {
        store.unsubscribe(subscription);
    });

    use_context_provider(|| ctx)
}

pub fn use_view_context() -> ViewContext {
    use_context::<ViewContext>()
}

/// The view the signed-in user is actually shown. Reactive on both the
/// store and the session.
pub fn use_current_view() -> View {
    let auth = use_auth();
    permitted_view(use_view_context().current(), |view| auth.can_use(view))
}

/// Detection for the route the router is currently showing.
pub fn use_route_view_detection() -> ViewDetection {
    let route: Route = use_route();
    use_view_context().detect(&route.to_string())
}

/// What the shell should do about a detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    Keep,
    Switch(View),
    Offer(View),
}

/// Decide how the shell reacts to `detection`. Users without admin rights
/// are never moved into the admin view.
pub fn reconcile(
    detection: ViewDetection,
    policy: ViewSwitchPolicy,
    is_admin: bool,
) -> Reconciliation {
    let Some(target) = detection.switch_target() else {
        return Reconciliation::Keep;
    };
    if target == View::Admin && !is_admin {
        return Reconciliation::Keep;
    }
    match policy {
        ViewSwitchPolicy::Auto => Reconciliation::Switch(target),
        ViewSwitchPolicy::Prompt => Reconciliation::Offer(target),
    }
}

/// `stored` if the user may see it, otherwise the user view. A configured
/// admin default never reaches a guest.
pub fn permitted_view(stored: View, can_use: impl Fn(View) -> bool) -> View {
    if can_use(stored) {
        stored
    } else {
        View::User
    }
}

/// The switch still on offer at `path`. A dismissal only covers the path it
/// was made on, so the offer returns with the next navigation.
pub fn pending_offer(
    action: Reconciliation,
    path: &str,
    dismissed_on: Option<&str>,
) -> Option<View> {
    match action {
        Reconciliation::Offer(target) if dismissed_on != Some(path) => Some(target),
        _ => None,
    }
}
