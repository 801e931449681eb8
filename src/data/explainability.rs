//! SHAP-style feature attributions for the explainability view.

#[cfg(test)]
#[path = "explainability_test.rs"]
mod explainability_test;

/// Direction of a feature's contribution, derived from its sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Positive,
    Negative,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

/// Global importance of one input feature.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapValue {
    pub feature: &'static str,
    /// Signed mean contribution; negative pushes toward rejection.
    pub importance: f64,
}

impl ShapValue {
    pub fn direction(&self) -> Direction {
        if self.importance < 0.0 {
            Direction::Negative
        } else {
            Direction::Positive
        }
    }
}

/// Pairwise feature interaction effect.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureInteraction {
    pub features: &'static str,
    pub impact: f64,
    pub description: &'static str,
}

/// Contribution of one feature to a single prediction.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureImpact {
    pub name: &'static str,
    pub impact: f64,
}

/// One sample prediction with its top contributing features.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePrediction {
    pub id: u32,
    pub prediction: &'static str,
    /// Model confidence in the predicted class, 0.0-1.0.
    pub confidence: f64,
    pub top_features: &'static [FeatureImpact],
}

/// Global SHAP importances, sorted by absolute magnitude.
pub fn mock_shap_values() -> Vec<ShapValue> {
    vec![
        ShapValue { feature: "Credit Score", importance: 0.45 },
        ShapValue { feature: "Annual Income", importance: 0.32 },
        ShapValue { feature: "Debt-to-Income", importance: -0.28 },
        ShapValue { feature: "Employment Years", importance: 0.15 },
        ShapValue { feature: "Age", importance: -0.12 },
        ShapValue { feature: "Education Level", importance: 0.08 },
    ]
}

/// Feature interaction effects.
pub fn mock_interactions() -> Vec<FeatureInteraction> {
    vec![
        FeatureInteraction {
            features: "Credit Score × Income",
            impact: 0.18,
            description: "Strong positive interaction",
        },
        FeatureInteraction {
            features: "Age × Employment Years",
            impact: -0.09,
            description: "Moderate negative interaction",
        },
        FeatureInteraction {
            features: "Debt Ratio × Income",
            impact: -0.14,
            description: "Strong negative interaction",
        },
    ]
}

/// Local explanations for two sample predictions.
pub fn mock_sample_predictions() -> Vec<SamplePrediction> {
    vec![
        SamplePrediction {
            id: 1,
            prediction: "Approved",
            confidence: 0.87,
            top_features: &[
                FeatureImpact { name: "Credit Score: 780", impact: 0.34 },
                FeatureImpact { name: "Income: $85K", impact: 0.21 },
                FeatureImpact { name: "Debt Ratio: 15%", impact: 0.18 },
            ],
        },
        SamplePrediction {
            id: 2,
            prediction: "Rejected",
            confidence: 0.92,
            top_features: &[
                FeatureImpact { name: "Credit Score: 580", impact: -0.42 },
                FeatureImpact { name: "Debt Ratio: 65%", impact: -0.31 },
                FeatureImpact { name: "Income: $32K", impact: -0.19 },
            ],
        },
    ]
}
