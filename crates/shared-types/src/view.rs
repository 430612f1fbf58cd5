use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse dashboard mode controlling which navigation and layout variant is
/// shown.
///
/// Deserializes leniently through [`View::from_str_or_default`], so a
/// mistyped `default_view` in config lands on `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum View {
    #[default]
    User,
    Admin,
}

impl View {
    /// Both views in display order.
    pub const ALL: [View; 2] = [View::User, View::Admin];

    /// Parse a view name. Unknown values fall back to `User`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "admin" => View::Admin,
            _ => View::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::User => "user",
            View::Admin => "admin",
        }
    }

    /// Human-readable label for toggles and banners.
    pub fn label(&self) -> &'static str {
        match self {
            View::User => "Guest view",
            View::Admin => "Admin view",
        }
    }

    /// The other view. The transition between the two is symmetric.
    pub fn toggled(self) -> Self {
        match self {
            View::User => View::Admin,
            View::Admin => View::User,
        }
    }
}

impl From<String> for View {
    fn from(s: String) -> Self {
        View::from_str_or_default(&s)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_user() {
        assert_eq!(View::default(), View::User);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!(View::from_str_or_default("ADMIN"), View::Admin);
        assert_eq!(View::from_str_or_default(" admin "), View::Admin);
        assert_eq!(View::from_str_or_default("user"), View::User);
    }

    #[test]
    fn unknown_names_fall_back_to_user() {
        assert_eq!(View::from_str_or_default("superuser"), View::User);
        assert_eq!(View::from_str_or_default(""), View::User);
    }

    #[test]
    fn toggled_is_an_involution() {
        for view in View::ALL {
            assert_ne!(view.toggled(), view);
            assert_eq!(view.toggled().toggled(), view);
        }
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&View::Admin).unwrap(), r#""admin""#);
        let parsed: View = serde_json::from_str(r#""user""#).unwrap();
        assert_eq!(parsed, View::User);
        let lenient: View = serde_json::from_str(r#""Admin""#).unwrap();
        assert_eq!(lenient, View::Admin);
    }
}
