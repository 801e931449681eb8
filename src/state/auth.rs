//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Owned by the app root and
//! provided as an `RwSignal<AuthState>` context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and the startup
/// restore-in-progress flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// The in-memory session, if authenticated.
    pub user: Option<User>,
    /// True from mount until the one-shot session restore has finished.
    pub loading: bool,
}

impl AuthState {
    /// Initial state at mount: unauthenticated, restore pending.
    pub fn restoring() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Whether a session is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
