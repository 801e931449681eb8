//! Shared view state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one `RwSignal` per state struct and provides it via
//! context (no module-level singletons); pages and components are passive
//! consumers.

pub mod auth;
pub mod ui;
