//! Browser localStorage helpers for UI chrome preferences.
//!
//! Preference persistence is best-effort browser-only behavior; native
//! builds no-op so tests stay deterministic.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

#[cfg(feature = "hydrate")]
const SIDEBAR_KEY: &str = "fairsight_sidebar_collapsed";

/// Parse a stored boolean flag; anything but `"true"` is false.
pub fn parse_flag(raw: &str) -> bool {
    raw == "true"
}

/// Read the persisted sidebar-collapsed preference.
pub fn read_sidebar_collapsed() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(SIDEBAR_KEY).ok().flatten())
            .is_some_and(|raw| parse_flag(&raw))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Persist the sidebar-collapsed preference.
pub fn write_sidebar_collapsed(collapsed: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(SIDEBAR_KEY, if collapsed { "true" } else { "false" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = collapsed;
    }
}
