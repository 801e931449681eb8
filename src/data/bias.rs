//! Bias and fairness metrics for the bias-analysis view.

#[cfg(test)]
#[path = "bias_test.rs"]
mod bias_test;

/// Severity of detected bias on a protected attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BiasStatus {
    Low,
    Moderate,
    High,
}

impl BiasStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Bias measurement for one protected attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct BiasMetric {
    pub attribute: &'static str,
    /// 0.0 (none) to 1.0 (severe).
    pub bias_score: f64,
    pub status: BiasStatus,
}

/// A fairness criterion scored against a fixed threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct FairnessMetric {
    pub metric: &'static str,
    pub value: f64,
    pub threshold: f64,
}

impl FairnessMetric {
    /// A metric passes when it reaches its threshold.
    pub fn passes(&self) -> bool {
        self.value >= self.threshold
    }
}

/// Performance metric selectable in the group-performance table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PerfMetric {
    #[default]
    Accuracy,
    Precision,
    Recall,
}

impl PerfMetric {
    pub fn all() -> [PerfMetric; 3] {
        [Self::Accuracy, Self::Precision, Self::Recall]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Precision => "Precision",
            Self::Recall => "Recall",
        }
    }
}

/// Model performance broken down by demographic group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupPerformance {
    pub group: &'static str,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
}

impl GroupPerformance {
    /// Select one metric for comparison rendering.
    pub fn metric(&self, which: PerfMetric) -> f64 {
        match which {
            PerfMetric::Accuracy => self.accuracy,
            PerfMetric::Precision => self.precision,
            PerfMetric::Recall => self.recall,
        }
    }
}

/// Per-attribute bias scores.
pub fn mock_bias_metrics() -> Vec<BiasMetric> {
    vec![
        BiasMetric { attribute: "Gender", bias_score: 0.15, status: BiasStatus::Moderate },
        BiasMetric { attribute: "Age", bias_score: 0.08, status: BiasStatus::Low },
        BiasMetric { attribute: "Race", bias_score: 0.23, status: BiasStatus::High },
        BiasMetric { attribute: "Income", bias_score: 0.12, status: BiasStatus::Moderate },
    ]
}

/// Fairness criteria scored against their thresholds.
pub fn mock_fairness_metrics() -> Vec<FairnessMetric> {
    vec![
        FairnessMetric { metric: "Demographic Parity", value: 0.85, threshold: 0.8 },
        FairnessMetric { metric: "Equal Opportunity", value: 0.78, threshold: 0.8 },
        FairnessMetric { metric: "Equalized Odds", value: 0.82, threshold: 0.8 },
        FairnessMetric { metric: "Calibration", value: 0.76, threshold: 0.8 },
    ]
}

/// Per-group performance.
pub fn mock_group_performance() -> Vec<GroupPerformance> {
    vec![
        GroupPerformance { group: "Male", accuracy: 0.92, precision: 0.89, recall: 0.94 },
        GroupPerformance { group: "Female", accuracy: 0.88, precision: 0.85, recall: 0.91 },
        GroupPerformance { group: "Age 18-30", accuracy: 0.91, precision: 0.88, recall: 0.93 },
        GroupPerformance { group: "Age 31-50", accuracy: 0.90, precision: 0.87, recall: 0.92 },
        GroupPerformance { group: "Age 50+", accuracy: 0.87, precision: 0.84, recall: 0.89 },
    ]
}
