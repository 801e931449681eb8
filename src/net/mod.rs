//! Networking modules for the authentication REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login/register HTTP calls, `types` defines the payload
//! schema shared with the (external) backend.

pub mod api;
pub mod types;
