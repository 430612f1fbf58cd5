use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::view::View;

/// What the dashboard shell does when navigation lands on a route that
/// belongs to the other view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewSwitchPolicy {
    /// Switch silently.
    #[default]
    Auto,
    /// Offer the switch in a banner and let the user decide.
    Prompt,
}

/// Optional dashboard surfaces.
///
/// Missing keys keep the surface enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default = "enabled")]
    pub analytics: bool,
    #[serde(default = "enabled")]
    pub products: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            analytics: true,
            products: true,
        }
    }
}

fn enabled() -> bool {
    true
}

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Top-level dashboard configuration, matching `dashboard.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// View a fresh session starts in.
    #[serde(default)]
    pub default_view: View,
    #[serde(default)]
    pub view_switch: ViewSwitchPolicy,
    #[serde(default)]
    pub features: FeatureFlags,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_view: View::default(),
            view_switch: ViewSwitchPolicy::default(),
            features: FeatureFlags::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a TOML document. Trailing slashes on the base URL are dropped so
    /// endpoint paths can be appended directly.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let mut config: DashboardConfig = toml::from_str(contents)
            .map_err(|e| AppError::bad_request(format!("invalid dashboard config: {e}")))?;
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        if config.api_base_url.is_empty() {
            config.api_base_url = default_api_base_url();
        }
        Ok(config)
    }

    /// Replace the API base URL when an override is present and non-blank.
    pub fn with_api_override(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        self
    }
}
