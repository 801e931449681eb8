//! REST calls for the two authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Native builds get
//! stubs that report the backend as unreachable, since there is no backend
//! outside the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers never see an `Err` or a panic. Every call collapses into
//! [`AuthOutcome`], and the session manager decides what each variant means
//! (see `session::manager::resolve_login`).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{RegisterData, User};

/// Result of an authentication call, flattened to the three cases the
/// session manager distinguishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The backend accepted the credentials and returned a session.
    Accepted {
        /// Opaque session token.
        token: String,
        /// The authenticated user.
        user: User,
    },
    /// The backend answered with a non-success status.
    Rejected,
    /// The backend could not be reached (or returned an unreadable body).
    Unreachable,
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

/// Authenticate via `POST /api/auth/login`.
pub async fn login(email: &str, password: &str) -> AuthOutcome {
    #[cfg(feature = "hydrate")]
    {
        let payload = login_payload(email, password);
        post_auth("/api/auth/login", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        AuthOutcome::Unreachable
    }
}

/// Create an account via `POST /api/auth/register`.
pub async fn register(profile: &RegisterData) -> AuthOutcome {
    #[cfg(feature = "hydrate")]
    {
        post_auth("/api/auth/register", profile).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        AuthOutcome::Unreachable
    }
}

#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(url: &str, body: &B) -> AuthOutcome {
    use super::types::AuthResponse;

    let Ok(request) = gloo_net::http::Request::post(url).json(body) else {
        return AuthOutcome::Unreachable;
    };
    let Ok(resp) = request.send().await else {
        return AuthOutcome::Unreachable;
    };
    if !resp.ok() {
        return AuthOutcome::Rejected;
    }
    match resp.json::<AuthResponse>().await {
        Ok(body) => AuthOutcome::Accepted {
            token: body.token,
            user: body.user,
        },
        // A 2xx with an unreadable body is treated like an unreachable
        // backend so the caller falls back instead of failing.
        Err(_) => AuthOutcome::Unreachable,
    }
}
