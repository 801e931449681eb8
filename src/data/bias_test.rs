use super::*;

#[test]
fn fairness_pass_requires_reaching_the_threshold() {
    let metrics = mock_fairness_metrics();
    let verdicts: Vec<_> = metrics.iter().map(FairnessMetric::passes).collect();
    // Demographic Parity and Equalized Odds pass; the other two fall short.
    assert_eq!(verdicts, vec![true, false, true, false]);
}

#[test]
fn boundary_value_passes() {
    let metric = FairnessMetric {
        metric: "Boundary",
        value: 0.8,
        threshold: 0.8,
    };
    assert!(metric.passes());
}

#[test]
fn group_metric_selector_picks_the_right_column() {
    let group = GroupPerformance {
        group: "Male",
        accuracy: 0.92,
        precision: 0.89,
        recall: 0.94,
    };
    assert!((group.metric(PerfMetric::Accuracy) - 0.92).abs() < f64::EPSILON);
    assert!((group.metric(PerfMetric::Precision) - 0.89).abs() < f64::EPSILON);
    assert!((group.metric(PerfMetric::Recall) - 0.94).abs() < f64::EPSILON);
}

#[test]
fn bias_metrics_stay_in_unit_range() {
    assert!(mock_bias_metrics()
        .iter()
        .all(|m| (0.0..=1.0).contains(&m.bias_score)));
}
