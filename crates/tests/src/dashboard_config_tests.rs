use pretty_assertions::assert_eq;
use shared_types::{
    AppErrorKind, DashboardConfig, FeatureFlags, View, ViewSwitchPolicy, DEFAULT_API_BASE_URL,
};

use crate::common::test_user;

#[test]
fn test_full_config_parses() {
    let config = DashboardConfig::from_toml_str(
        r#"
        api_base_url = "https://api.hotel.test/v1/"
        default_view = "admin"
        view_switch = "prompt"

        [features]
        analytics = false
        products = true
        "#,
    )
    .unwrap();

    assert_eq!(
        config,
        DashboardConfig {
            api_base_url: "https://api.hotel.test/v1".to_string(),
            default_view: View::Admin,
            view_switch: ViewSwitchPolicy::Prompt,
            features: FeatureFlags {
                analytics: false,
                products: true,
            },
        }
    );
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = DashboardConfig::from_toml_str("").unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.default_view, View::User);
    assert_eq!(config.view_switch, ViewSwitchPolicy::Auto);
}

#[test]
fn test_default_view_parses_leniently() {
    let upper = DashboardConfig::from_toml_str(r#"default_view = " Admin ""#).unwrap();
    assert_eq!(upper.default_view, View::Admin);

    let unknown = DashboardConfig::from_toml_str(r#"default_view = "superuser""#).unwrap();
    assert_eq!(unknown.default_view, View::User);
}

#[test]
fn test_unknown_policy_is_rejected() {
    let err = DashboardConfig::from_toml_str(r#"view_switch = "sometimes""#).unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert!(err.message.contains("invalid dashboard config"), "{}", err.message);
}

#[test]
fn test_api_override_wins_unless_blank() {
    let config = DashboardConfig::default();
    assert_eq!(
        config
            .clone()
            .with_api_override(Some("http://10.0.0.5:9000/api/"))
            .api_base_url,
        "http://10.0.0.5:9000/api"
    );
    assert_eq!(
        config.clone().with_api_override(Some("  ")).api_base_url,
        DEFAULT_API_BASE_URL
    );
    assert_eq!(config.with_api_override(None).api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn test_only_admins_may_use_the_admin_view() {
    let guest = test_user("user");
    let staff = test_user("Admin");

    assert!(guest.can_use(View::User));
    assert!(!guest.can_use(View::Admin));
    assert!(staff.can_use(View::Admin));
    assert_eq!(staff.initials(), "JD");
}
