use dioxus::prelude::*;
use shared_types::{AuthUser, View};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.current_user
            .read()
            .as_ref()
            .is_some_and(AuthUser::is_admin)
    }

    /// Whether the signed-in user may be shown `view`.
    pub fn can_use(&self, view: View) -> bool {
        self.current_user
            .read()
            .as_ref()
            .is_some_and(|u| u.can_use(view))
    }

    /// Guest record of the signed-in user; scopes user-view lists.
    pub fn customer_id(&self) -> Option<i64> {
        self.current_user.read().as_ref().and_then(|u| u.customer_id)
    }

    pub fn set_user(&mut self, user: AuthUser) {
        tracing::info!(user = %user.username, admin = user.is_admin(), "signed in");
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to check if the current user has the admin role.
pub fn use_is_admin() -> bool {
    use_auth().is_admin()
}
