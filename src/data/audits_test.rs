use super::*;

#[test]
fn filter_by_status_keeps_only_matching_rows() {
    let results = mock_results();
    let running = filter_results(&results, Some(AuditStatus::Running), "");
    assert_eq!(running.len(), 1);
    assert_eq!(running[0].model_name, "Hiring Algorithm v1.3");
}

#[test]
fn search_is_case_insensitive_substring_match() {
    let results = mock_results();
    let hits = filter_results(&results, None, "loan approval");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "3");
}

#[test]
fn status_and_search_combine() {
    let results = mock_results();
    assert!(filter_results(&results, Some(AuditStatus::Completed), "hiring").is_empty());
    assert_eq!(filter_results(&results, Some(AuditStatus::Completed), "model").len(), 1);
}

#[test]
fn empty_search_and_no_status_returns_everything() {
    let results = mock_results();
    assert_eq!(filter_results(&results, None, "").len(), results.len());
}

#[test]
fn score_bands_split_at_90_and_70() {
    assert_eq!(score_band(94), ScoreBand::Good);
    assert_eq!(score_band(90), ScoreBand::Good);
    assert_eq!(score_band(72), ScoreBand::Warning);
    assert_eq!(score_band(68), ScoreBand::Poor);
}
