//! Wire DTOs for the authentication endpoints.
//!
//! DESIGN
//! ======
//! `User` doubles as the persisted session record: the same JSON shape is
//! written to the `fairsight_user` cookie, so deserialization here defines
//! what counts as a valid persisted record.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user's identity record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role shown in the header user menu (e.g. `"Compliance Officer"`).
    pub role: String,
    /// Organization the account belongs to.
    pub organization: String,
}

/// Profile submitted by the registration form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    /// Full name.
    pub name: String,
    /// Login email address.
    pub email: String,
    /// Organization name.
    pub organization: String,
    /// Plain-text password; only ever sent to the register endpoint.
    pub password: String,
}

/// Successful response body of `POST /api/auth/login` and
/// `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque session token.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}
