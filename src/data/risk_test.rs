use super::*;

#[test]
fn category_filter_is_exact() {
    let risks = mock_assessments();
    let hits = filter_risks(&risks, Some("Data Quality"), None);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "3");
}

#[test]
fn regulation_filter_matches_substrings() {
    let risks = mock_assessments();
    // Every item cites an EU AI Act article.
    assert_eq!(filter_risks(&risks, None, Some("EU AI Act")).len(), 5);
    // Item 2 cites GDPR alongside the EU AI Act.
    let gdpr = filter_risks(&risks, None, Some("GDPR"));
    assert_eq!(gdpr.len(), 1);
    assert_eq!(gdpr[0].category, "Bias and Discrimination");
}

#[test]
fn filters_combine_conjunctively() {
    let risks = mock_assessments();
    assert!(filter_risks(&risks, Some("Data Quality"), Some("GDPR")).is_empty());
    assert_eq!(
        filter_risks(&risks, Some("Human Oversight"), Some("Article 14")).len(),
        1
    );
}

#[test]
fn no_filters_returns_everything() {
    let risks = mock_assessments();
    assert_eq!(filter_risks(&risks, None, None).len(), risks.len());
}
