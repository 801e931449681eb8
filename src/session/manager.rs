//! Session lifecycle: restore, establish, resolve, and clear.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call the auth endpoints through `net::api` and hand the
//! [`AuthOutcome`] to `resolve_login`/`resolve_register`; whatever session
//! comes back is persisted with [`establish`] and mirrored into the
//! `AuthState` context signal. On startup the app root calls [`restore`]
//! once to rebuild the in-memory session from the persisted record.
//!
//! The unreachable-backend fallback fabricates a deterministic demo session
//! instead of surfacing an error. That is a stand-in for an absent backend,
//! kept deliberately isolated in the two `fallback_*` constructors.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use crate::net::api::AuthOutcome;
use crate::net::types::{RegisterData, User};

use super::store::SessionStore;

/// Cookie holding the opaque session token.
pub const TOKEN_KEY: &str = "fairsight_token";
/// Cookie holding the JSON-serialized [`User`] record.
pub const USER_KEY: &str = "fairsight_user";
/// Persisted-record lifetime: seven days.
pub const RECORD_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Result of a restore attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Both entries were present and the user record parsed.
    Session(User),
    /// No persisted record.
    Absent,
    /// Entries were present but unusable; both have been removed.
    CorruptCleared,
}

impl RestoreOutcome {
    /// The restored user, if any.
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Session(user) => Some(user),
            Self::Absent | Self::CorruptCleared => None,
        }
    }
}

/// Rebuild the in-memory session from the persisted record.
///
/// Both entries must be present and the user JSON must parse; anything else
/// is a corrupt record, and both entries are cleared together so a stale
/// token can never outlive its user record. The corrupt case is reported
/// separately so callers can log the recovery.
pub fn restore(store: &mut impl SessionStore) -> RestoreOutcome {
    let token = store.get(TOKEN_KEY);
    let raw_user = store.get(USER_KEY);
    match (token, raw_user) {
        (Some(_), Some(raw)) => match serde_json::from_str::<User>(&raw) {
            Ok(user) => RestoreOutcome::Session(user),
            Err(_) => {
                clear(store);
                RestoreOutcome::CorruptCleared
            }
        },
        (None, None) => RestoreOutcome::Absent,
        // Half-present record: token without user or vice versa.
        _ => {
            clear(store);
            RestoreOutcome::CorruptCleared
        }
    }
}

/// Persist a session as the two-entry record with the fixed TTL.
pub fn establish(store: &mut impl SessionStore, token: &str, user: &User) {
    // serde_json cannot fail on this struct shape.
    let raw = serde_json::to_string(user).unwrap_or_default();
    store.set(TOKEN_KEY, token);
    store.set(USER_KEY, &raw);
}

/// Remove both persisted entries. Idempotent.
pub fn clear(store: &mut impl SessionStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Decide what a login attempt produced: the backend's session, a rejection
/// (`None`), or the fabricated fallback session for an unreachable backend.
pub fn resolve_login(outcome: AuthOutcome, email: &str) -> Option<(String, User)> {
    match outcome {
        AuthOutcome::Accepted { token, user } => Some((token, user)),
        AuthOutcome::Rejected => None,
        AuthOutcome::Unreachable => Some(fallback_login_session(email)),
    }
}

/// Same contract as [`resolve_login`], parameterized by the submitted
/// registration profile.
pub fn resolve_register(outcome: AuthOutcome, profile: &RegisterData) -> Option<(String, User)> {
    match outcome {
        AuthOutcome::Accepted { token, user } => Some((token, user)),
        AuthOutcome::Rejected => None,
        AuthOutcome::Unreachable => Some(fallback_register_session(profile)),
    }
}

fn fallback_login_session(email: &str) -> (String, User) {
    let user = User {
        id: "1".to_owned(),
        email: email.to_owned(),
        name: "John Doe".to_owned(),
        role: "Compliance Officer".to_owned(),
        organization: "Acme Corporation".to_owned(),
    };
    ("demo_token_123".to_owned(), user)
}

fn fallback_register_session(profile: &RegisterData) -> (String, User) {
    let user = User {
        id: "2".to_owned(),
        email: profile.email.clone(),
        name: profile.name.clone(),
        role: "Compliance Officer".to_owned(),
        organization: profile.organization.clone(),
    };
    ("demo_token_456".to_owned(), user)
}
