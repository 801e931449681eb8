//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading/writing shared state
//! from Leptos context providers; view content lives in `pages`.

pub mod header;
pub mod sidebar;
pub mod stat_card;
