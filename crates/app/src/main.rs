use dioxus::prelude::*;
use shared_types::{DashboardConfig, FeatureFlags};

mod api;
mod auth;
mod components;
mod config;
mod format_helpers;
mod routes;
mod view;

use api::ApiClient;
use auth::AuthState;
use routes::Route;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config: DashboardConfig = config::dashboard_config().clone();

    use_context_provider(|| ApiClient::new(config.api_base_url.clone()));
    use_context_provider(|| config.features.clone());
    use_context_provider(AuthState::new);
    view::use_view_provider(config.default_view, config.view_switch);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

/// Feature flags from `dashboard.toml`.
pub fn use_features() -> FeatureFlags {
    use_context::<FeatureFlags>()
}
