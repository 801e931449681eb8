use super::*;

#[test]
fn framework_filter_keeps_only_that_law() {
    let violations = mock_violations();
    let gdpr = filter_violations(&violations, Some("GDPR"), None);
    assert_eq!(gdpr.len(), 1);
    assert_eq!(gdpr[0].model_name, "Loan Approval System");
}

#[test]
fn severity_filter_keeps_only_that_grade() {
    let violations = mock_violations();
    let high = filter_violations(&violations, None, Some(Severity::High));
    assert_eq!(high.len(), 2);
}

#[test]
fn filters_combine_conjunctively() {
    let violations = mock_violations();
    let hits = filter_violations(&violations, Some("EU AI Act"), Some(Severity::Critical));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].violation_type, "Data Bias");

    assert!(filter_violations(&violations, Some("GDPR"), Some(Severity::Critical)).is_empty());
}

#[test]
fn no_filters_returns_everything() {
    let violations = mock_violations();
    assert_eq!(filter_violations(&violations, None, None).len(), violations.len());
}

#[test]
fn every_violation_carries_recommendations() {
    assert!(mock_violations().iter().all(|v| !v.recommendations.is_empty()));
}
