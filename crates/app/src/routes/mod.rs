pub mod admin;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payments;
pub mod profile;
pub mod reservations;
pub mod rooms;
mod shared;

use crate::api::ApiClient;
use crate::auth::use_auth;
use crate::components::{ViewBadge, ViewSwitch};
use crate::use_features;
use crate::view::{
    pending_offer, reconcile, use_current_view, use_route_view_detection, use_view_context,
    Reconciliation,
};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBriefcase, LdCalendar, LdFileText, LdLayoutDashboard, LdPackage, LdShield,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::View;
use shared_ui::{
    use_toast, Banner, BannerTone, Button, ButtonSize, ButtonVariant, Sidebar, SidebarContent,
    SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarTrigger, ToastOptions,
};

use admin::{
    AdminAnalytics, AdminCustomerDetail, AdminCustomers, AdminOverview, AdminPayments,
    AdminProducts, AdminReservations, AdminRooms,
};
use home::Home;
use login::Login;
use not_found::NotFound;
use payments::Payments;
use profile::Profile;
use reservations::{ReservationDetail, Reservations};
use rooms::Rooms;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(DashboardShell)]
        #[route("/")]
        Home {},
        #[route("/reservations")]
        Reservations {},
        #[route("/reservations/:id")]
        ReservationDetail { id: i64 },
        #[route("/payments")]
        Payments {},
        #[route("/rooms")]
        Rooms {},
        #[route("/profile")]
        Profile {},
        #[nest("/admin")]
        #[layout(AdminGuard)]
            #[route("/")]
            AdminOverview {},
            #[route("/reservations")]
            AdminReservations {},
            #[route("/customers")]
            AdminCustomers {},
            #[route("/customers/:id")]
            AdminCustomerDetail { id: i64 },
            #[route("/payments")]
            AdminPayments {},
            #[route("/rooms")]
            AdminRooms {},
            #[route("/products")]
            AdminProducts {},
            #[route("/analytics")]
            AdminAnalytics {},
        #[end_layout]
        #[end_nest]
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login { .. } => "Sign in",
            Route::Home {} => "Home",
            Route::Reservations {} | Route::ReservationDetail { .. } => "My reservations",
            Route::Payments {} => "My payments",
            Route::Rooms {} => "Rooms",
            Route::Profile {} => "Profile",
            Route::AdminOverview {} => "Overview",
            Route::AdminReservations {} => "Reservations",
            Route::AdminCustomers {} | Route::AdminCustomerDetail { .. } => "Customers",
            Route::AdminPayments {} => "Payments",
            Route::AdminRooms {} => "Rooms",
            Route::AdminProducts {} => "Products",
            Route::AdminAnalytics {} => "Analytics",
            Route::NotFound { .. } => "Not found",
        }
    }
}

/// Redirects to /login unless `GET /auth/me` yields a user.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let api = use_context::<ApiClient>();
    let route: Route = use_route();

    let resource = use_resource(move || {
        let api = api.clone();
        async move { api.current_user().await }
    });

    if auth.is_authenticated() {
        return rsx! { Outlet::<Route> {} };
    }

    let result = resource.read().as_ref().cloned();
    match result {
        Some(Ok(Some(user))) => {
            auth.set_user(user);
            rsx! { Outlet::<Route> {} }
        }
        Some(outcome) => {
            if let Err(e) = outcome {
                tracing::warn!(error = %e, "session check failed");
            }
            tracing::debug!(path = %route, "no session, redirecting to login");
            navigator().replace(Route::Login {
                redirect: Some(route.to_string()),
            });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to sign in..." }
                }
            }
        }
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}

/// Admin area guard. Non-admins are sent to their reservations.
#[component]
fn AdminGuard() -> Element {
    let auth = use_auth();

    if auth.is_admin() {
        return rsx! { Outlet::<Route> {} };
    }

    tracing::debug!("admin area requested without admin role");
    navigator().replace(Route::Reservations {});
    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}

/// Layout for every signed-in page: keeps the stored view in line with the
/// route and renders the navigation of the active view.
#[component]
fn DashboardShell() -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let views = use_view_context();
    let mut auth = use_auth();
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let is_admin = auth.is_admin();
    let action = reconcile(use_route_view_detection(), views.policy(), is_admin);

    let reconcile_views = views.clone();
    use_effect(use_reactive((&path, &action), move |(path, action)| {
        if let Reconciliation::Switch(target) = action {
            if reconcile_views.set(target) {
                tracing::info!(path = %path, view = %target, "view reconciled with route");
            }
        }
    }));

    // Path the prompt was dismissed on; compared during render so the offer
    // is back on the first frame after navigating.
    let mut dismissed_on = use_signal(|| Option::<String>::None);
    use_effect(use_reactive((&path,), move |(path,)| {
        if dismissed_on.peek().as_deref().is_some_and(|d| d != path) {
            dismissed_on.set(None);
        }
    }));

    let offer = pending_offer(action, &path, dismissed_on.read().as_deref());

    let stored = views.current();
    let current = use_current_view();
    let clamp_views = views.clone();
    use_effect(use_reactive((&stored, &current), move |(stored, current)| {
        if stored != current && clamp_views.set(current) {
            tracing::info!(view = %current, "stored view not permitted for this user");
        }
    }));

    let accept_views = views.clone();
    let dismiss_path = path.clone();

    let sign_out = move |_| {
        let api = api.clone();
        spawn(async move {
            if let Err(e) = api.logout().await {
                toast.error(e.friendly_message(), ToastOptions::new());
            }
        });
        auth.clear_auth();
        views.set(View::User);
        navigator().push(Route::Login { redirect: None });
    };

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { view: current.as_str(),
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Hotel Dashboard" }
                        ViewBadge {}
                    }
                }
                SidebarContent {
                    match current {
                        View::User => rsx! { UserNavigation { route: route.clone() } },
                        View::Admin => rsx! { AdminNavigation { route: route.clone() } },
                    }
                }
                SidebarFooter {
                    div { class: "sidebar-user",
                        Link { to: Route::Profile {}, class: "sidebar-user-name", "{display_name}" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Small,
                            onclick: sign_out,
                            "Sign out"
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger { span { class: "topbar-trigger-icon", "\u{2630}" } }
                    span { class: "topbar-title", "{route.title()}" }
                    div { class: "topbar-spacer" }
                    ViewSwitch {}
                }

                if let Some(target) = offer {
                    Banner {
                        message: format!("This page belongs to the {}.", target.label().to_lowercase()),
                        tone: BannerTone::Info,
                        Button {
                            size: ButtonSize::Small,
                            onclick: move |_| {
                                accept_views.set(target);
                            },
                            "Switch to {target.label().to_lowercase()}"
                        }
                        Button {
                            size: ButtonSize::Small,
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| dismissed_on.set(Some(dismiss_path.clone())),
                            "Dismiss"
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavEntry(to: Route, active: bool, label: &'static str, children: Element) -> Element {
    rsx! {
        SidebarMenuItem {
            SidebarMenuButton { active: active,
                Link { to: to,
                    {children}
                    span { "{label}" }
                }
            }
        }
    }
}

#[component]
fn UserNavigation(route: Route) -> Element {
    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "My stay" }
            SidebarMenu {
                NavEntry { to: Route::Home {}, active: matches!(route, Route::Home {}), label: "Home",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                }
                NavEntry {
                    to: Route::Reservations {},
                    active: matches!(route, Route::Reservations {} | Route::ReservationDetail { .. }),
                    label: "Reservations",
                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                }
                NavEntry { to: Route::Payments {}, active: matches!(route, Route::Payments {}), label: "Payments",
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                }
                NavEntry { to: Route::Rooms {}, active: matches!(route, Route::Rooms {}), label: "Rooms",
                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                }
                NavEntry { to: Route::Profile {}, active: matches!(route, Route::Profile {}), label: "Profile",
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                }
            }
        }
    }
}

#[component]
fn AdminNavigation(route: Route) -> Element {
    let features = use_features();

    rsx! {
        SidebarGroup {
            SidebarGroupLabel { "Operations" }
            SidebarMenu {
                NavEntry { to: Route::AdminOverview {}, active: matches!(route, Route::AdminOverview {}), label: "Overview",
                    Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                }
                NavEntry {
                    to: Route::AdminReservations {},
                    active: matches!(route, Route::AdminReservations {}),
                    label: "Reservations",
                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                }
                NavEntry {
                    to: Route::AdminCustomers {},
                    active: matches!(route, Route::AdminCustomers {} | Route::AdminCustomerDetail { .. }),
                    label: "Customers",
                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                }
                NavEntry { to: Route::AdminPayments {}, active: matches!(route, Route::AdminPayments {}), label: "Payments",
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                }
                NavEntry { to: Route::AdminRooms {}, active: matches!(route, Route::AdminRooms {}), label: "Rooms",
                    Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                }
            }
        }
        if features.products || features.analytics {
            SidebarGroup {
                SidebarGroupLabel { "Business" }
                SidebarMenu {
                    if features.products {
                        NavEntry { to: Route::AdminProducts {}, active: matches!(route, Route::AdminProducts {}), label: "Products",
                            Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                        }
                    }
                    if features.analytics {
                        NavEntry { to: Route::AdminAnalytics {}, active: matches!(route, Route::AdminAnalytics {}), label: "Analytics",
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 }
                        }
                    }
                }
            }
        }
        SidebarGroup {
            SidebarGroupLabel { "Account" }
            SidebarMenu {
                NavEntry { to: Route::Profile {}, active: matches!(route, Route::Profile {}), label: "Profile",
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                }
            }
        }
    }
}
