use dioxus::prelude::*;
use shared_types::View;
use shared_ui::components::{Badge, BadgeVariant, Button, ButtonSize, ButtonVariant};

use crate::auth::use_is_admin;
use crate::routes::Route;
use crate::view::{use_current_view, use_view_context};

/// Segmented control for switching between the guest and admin views.
///
/// Only admins get the control; for everyone else it renders nothing.
/// Picking a view also navigates to that view's landing page, so the
/// route and the stored view agree straight away.
#[component]
pub fn ViewSwitch() -> Element {
    let is_admin = use_is_admin();
    let ctx = use_view_context();

    if !is_admin {
        return rsx! {};
    }

    let current = ctx.current();

    rsx! {
        div { class: "view-switch", role: "group", "aria-label": "Dashboard view",
            for view in View::ALL {
                Button {
                    key: "{view}",
                    size: ButtonSize::Small,
                    variant: if view == current { ButtonVariant::Primary } else { ButtonVariant::Ghost },
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| {
                            ctx.set(view);
                            navigator().push(landing_route(view));
                        }
                    },
                    "{view.label()}"
                }
            }
        }
    }
}

/// Where a view starts when picked from the switch.
pub fn landing_route(view: View) -> Route {
    match view {
        View::User => Route::Reservations {},
        View::Admin => Route::AdminOverview {},
    }
}

/// Read-only indicator of the active view.
#[component]
pub fn ViewBadge() -> Element {
    let view = use_current_view();
    let variant = match view {
        View::User => BadgeVariant::Info,
        View::Admin => BadgeVariant::Warning,
    };

    rsx! {
        Badge { variant: variant, "{view.label()}" }
    }
}
