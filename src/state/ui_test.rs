use super::*;

#[test]
fn default_view_is_dashboard_with_expanded_sidebar() {
    let state = UiState::default();
    assert_eq!(state.current_view, ViewType::Dashboard);
    assert!(!state.sidebar_collapsed);
}

#[test]
fn sidebar_order_starts_at_dashboard_and_ends_at_settings() {
    let all = ViewType::all();
    assert_eq!(all.first(), Some(&ViewType::Dashboard));
    assert_eq!(all.last(), Some(&ViewType::Settings));
}

#[test]
fn labels_are_unique() {
    let mut labels: Vec<_> = ViewType::all().iter().map(|v| v.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), ViewType::all().len());
}
