//! Hydrate-only glue binding the session lifecycle to `document.cookie`.
//!
//! Native builds get no-op stubs, mirroring the rest of the browser glue in
//! this crate, so the pure lifecycle stays testable without a DOM.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
use super::manager;
#[cfg(feature = "hydrate")]
use super::store::SessionStore;

/// `document.cookie`-backed [`SessionStore`].
#[cfg(feature = "hydrate")]
struct CookieStore;

#[cfg(feature = "hydrate")]
impl CookieStore {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        let doc = web_sys::window()?.document()?;
        doc.dyn_into::<web_sys::HtmlDocument>().ok()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = Self::document()?.cookie().ok()?;
        super::cookie::find_cookie(&raw, key)
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(doc) = Self::document() {
            let assignment =
                super::cookie::set_cookie_string(key, value, manager::RECORD_TTL_SECS);
            let _ = doc.set_cookie(&assignment);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(&super::cookie::clear_cookie_string(key));
        }
    }
}

/// Restore the session from the persisted cookie record, clearing it when
/// corrupt. Returns `None` off-browser.
pub fn restore() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let mut store = CookieStore;
        match manager::restore(&mut store) {
            manager::RestoreOutcome::Session(user) => {
                log::info!("session restored for {}", user.email);
                Some(user)
            }
            manager::RestoreOutcome::Absent => {
                log::debug!("no persisted session");
                None
            }
            manager::RestoreOutcome::CorruptCleared => {
                log::warn!("corrupt session record cleared");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly established session.
pub fn establish(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        manager::establish(&mut CookieStore, token, user);
        log::info!("session established for {}", user.email);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Drop the persisted record. Safe to call repeatedly.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        manager::clear(&mut CookieStore);
        log::info!("session cleared");
    }
}
