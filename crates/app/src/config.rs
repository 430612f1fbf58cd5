use shared_types::DashboardConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// Dashboard settings baked into the binary.
const EMBEDDED_CONFIG: &str = include_str!("../dashboard.toml");

/// Parse the embedded `dashboard.toml` once and return it.
///
/// A broken file falls back to defaults; the build-time `HOTEL_API_URL`
/// variable wins over the file's `api_base_url` either way.
pub fn dashboard_config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| resolve(EMBEDDED_CONFIG, option_env!("HOTEL_API_URL")))
}

fn resolve(contents: &str, api_override: Option<&str>) -> DashboardConfig {
    let config = match DashboardConfig::from_toml_str(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "dashboard.toml rejected, using defaults");
            DashboardConfig::default()
        }
    };
    let config = config.with_api_override(api_override);
    tracing::info!(
        api_base_url = %config.api_base_url,
        default_view = %config.default_view,
        view_switch = ?config.view_switch,
        "dashboard config loaded"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{View, ViewSwitchPolicy, DEFAULT_API_BASE_URL};

    #[test]
    fn embedded_file_parses() {
        let config = resolve(EMBEDDED_CONFIG, None);
        assert_eq!(config.default_view, View::User);
        assert_eq!(config.view_switch, ViewSwitchPolicy::Auto);
        assert!(config.features.analytics);
        assert!(config.features.products);
    }

    #[test]
    fn broken_file_falls_back_to_defaults() {
        let config = resolve("view_switch = [", None);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn override_beats_file() {
        let config = resolve(
            r#"api_base_url = "http://file.example/api""#,
            Some("https://api.hotel.example/v1/"),
        );
        assert_eq!(config.api_base_url, "https://api.hotel.example/v1");

        let blank = resolve("", Some("  "));
        assert_eq!(blank.api_base_url, DEFAULT_API_BASE_URL);
    }
}
