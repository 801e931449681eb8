//! Page modules for route-level screens and sidebar views.
//!
//! ARCHITECTURE
//! ============
//! `login` and `register` are the unauthenticated routes; `shell` is the
//! guarded dashboard route that switches the remaining view modules through
//! `UiState::current_view`.

pub mod bias;
pub mod compliance;
pub mod explainability;
pub mod login;
pub mod overview;
pub mod register;
pub mod results;
pub mod risk;
pub mod settings;
pub mod shell;
pub mod upload;
