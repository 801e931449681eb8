//! Headline stat card used on the dashboard overview.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Metric name above the value.
    label: &'static str,
    /// Rendered value, already formatted.
    value: String,
    /// One-line context below the value.
    note: &'static str,
    /// CSS modifier for the note tone (`"stat-card__note--good"` etc.).
    #[prop(default = "")]
    note_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-card__label">{label}</p>
            <p class="stat-card__value">{value}</p>
            <p class=format!("stat-card__note {note_class}")>{note}</p>
        </div>
    }
}
