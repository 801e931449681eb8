//! Session manager: the authentication lifecycle and its persisted record.
//!
//! ARCHITECTURE
//! ============
//! The lifecycle (`manager`) is pure and operates on the [`store::SessionStore`]
//! trait, so every state transition is unit tested natively against an
//! in-memory store. `cookie` holds the pure cookie-string codec, and
//! `browser` is the thin hydrate-only glue binding the lifecycle to
//! `document.cookie`.
//!
//! INVARIANT
//! =========
//! The persisted record is two entries (token + user JSON) that are only
//! ever written and cleared together. A half-present or unparseable record
//! is corrupt and both entries are removed on restore.

pub mod browser;
pub mod cookie;
pub mod manager;
pub mod store;
