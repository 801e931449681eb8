use super::*;

#[test]
fn risk_distribution_covers_the_whole_fleet() {
    let total: u32 = mock_risk_distribution().iter().map(|s| u32::from(s.share)).sum();
    assert_eq!(total, 100);
}

#[test]
fn bias_trend_spans_six_months_in_unit_range() {
    let trend = mock_bias_trend();
    assert_eq!(trend.len(), 6);
    assert!(trend.iter().all(|p| (0.0..=1.0).contains(&p.score)));
}
