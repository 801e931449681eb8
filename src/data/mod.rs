//! Static mock datasets backing the dashboard views.
//!
//! DESIGN
//! ======
//! Every data set is an in-memory literal; there is no ingestion or real
//! analysis. The only computation offered here is filtering and small
//! derived classifications over those literals, kept as pure functions so
//! the view code stays declarative.

pub mod audits;
pub mod bias;
pub mod compliance;
pub mod explainability;
pub mod overview;
pub mod risk;
pub mod upload;

/// Risk grading shared by audits, overview, and risk assessment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// CSS modifier used by badge styling.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Low => "badge--low",
            Self::Medium => "badge--medium",
            Self::High => "badge--high",
            Self::Critical => "badge--critical",
        }
    }
}
