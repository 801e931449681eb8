//! Dashboard chrome state: active view and sidebar collapse.
//!
//! DESIGN
//! ======
//! The main pane is switched by an enum rather than routes; only the auth
//! screens get their own routes. This keeps the protected area a single
//! guarded surface.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Views selectable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewType {
    #[default]
    Dashboard,
    Upload,
    Results,
    Bias,
    Explainability,
    Risk,
    Compliance,
    Settings,
}

impl ViewType {
    /// Sidebar order.
    pub fn all() -> [ViewType; 8] {
        [
            Self::Dashboard,
            Self::Upload,
            Self::Results,
            Self::Bias,
            Self::Explainability,
            Self::Risk,
            Self::Compliance,
            Self::Settings,
        ]
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Upload => "Upload & Audit",
            Self::Results => "Audit Results",
            Self::Bias => "Bias Analysis",
            Self::Explainability => "Explainability",
            Self::Risk => "Risk Assessment",
            Self::Compliance => "Compliance Details",
            Self::Settings => "Settings",
        }
    }
}

/// UI state for the dashboard shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Currently rendered main-pane view.
    pub current_view: ViewType,
    /// Whether the sidebar is collapsed to icon width.
    pub sidebar_collapsed: bool,
}
