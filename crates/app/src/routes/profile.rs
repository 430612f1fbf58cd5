use dioxus::prelude::*;
use shared_types::AuthUser;
use shared_ui::components::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    DetailGrid, DetailItem, DetailList, PageHeader, PageTitle,
};

use crate::auth::use_auth;
use crate::components::ViewBadge;
use crate::view::use_view_context;

/// Account details plus the view preference. Shared by both views.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let user = auth.current_user.read().clone();

    rsx! {
        PageHeader {
            PageTitle { "Profile" }
        }

        DetailGrid {
            if let Some(user) = user {
                AccountCard { user: user }
            }
            ViewPreferenceCard { is_admin: auth.is_admin() }
        }
    }
}

#[component]
fn AccountCard(user: AuthUser) -> Element {
    let guest_record = user
        .customer_id
        .map(|id| format!("#{id}"))
        .unwrap_or_else(|| "Not linked".to_string());

    rsx! {
        Card {
            CardHeader {
                CardTitle { "{user.display_name}" }
                CardDescription { "{user.initials()} · @{user.username}" }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Email", value: user.email.clone() }
                    DetailItem { label: "Role", value: user.role.clone() }
                    DetailItem { label: "Guest record", value: guest_record }
                }
            }
        }
    }
}

#[component]
fn ViewPreferenceCard(is_admin: bool) -> Element {
    let views = use_view_context();
    let current = views.current();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Dashboard view" }
                CardDescription {
                    if is_admin {
                        "Pages under /admin open the admin view; everything else uses the user view."
                    } else {
                        "Your account has access to the user view."
                    }
                }
            }
            CardContent {
                DetailList {
                    DetailItem { label: "Active view",
                        ViewBadge {}
                    }
                }
                if is_admin {
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Small,
                        onclick: move |_| {
                            views.toggle();
                        },
                        "Switch to {current.toggled().label()}"
                    }
                }
            }
        }
    }
}
