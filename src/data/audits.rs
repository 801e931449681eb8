//! Audit-result records and the results-table filter.

#[cfg(test)]
#[path = "audits_test.rs"]
mod audits_test;

use super::RiskLevel;

/// Lifecycle of an audit run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuditStatus {
    Completed,
    Running,
    Failed,
}

impl AuditStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Running => "Running",
            Self::Failed => "Failed",
        }
    }
}

/// Color band for a 0-100 score: >= 90 good, >= 70 warning, else poor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Warning,
    Poor,
}

impl ScoreBand {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "score--good",
            Self::Warning => "score--warning",
            Self::Poor => "score--poor",
        }
    }
}

/// Classify a 0-100 score into its display band.
pub fn score_band(score: u8) -> ScoreBand {
    if score >= 90 {
        ScoreBand::Good
    } else if score >= 70 {
        ScoreBand::Warning
    } else {
        ScoreBand::Poor
    }
}

/// One row of the audit-results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditResult {
    pub id: &'static str,
    pub model_name: &'static str,
    pub status: AuditStatus,
    pub risk_level: RiskLevel,
    pub compliance_score: u8,
    pub bias_score: u8,
    pub fairness_score: u8,
    pub created_at: &'static str,
    pub completed_at: Option<&'static str>,
    /// Number of issues flagged by the run.
    pub issues: u32,
}

/// The audit-results data set.
pub fn mock_results() -> Vec<AuditResult> {
    vec![
        AuditResult {
            id: "1",
            model_name: "Credit Scoring Model v2.1",
            status: AuditStatus::Completed,
            risk_level: RiskLevel::Low,
            compliance_score: 94,
            bias_score: 92,
            fairness_score: 96,
            created_at: "2024-01-15 10:30",
            completed_at: Some("2024-01-15 11:45"),
            issues: 2,
        },
        AuditResult {
            id: "2",
            model_name: "Hiring Algorithm v1.3",
            status: AuditStatus::Running,
            risk_level: RiskLevel::Medium,
            compliance_score: 0,
            bias_score: 0,
            fairness_score: 0,
            created_at: "2024-01-15 14:20",
            completed_at: None,
            issues: 0,
        },
        AuditResult {
            id: "3",
            model_name: "Loan Approval System",
            status: AuditStatus::Completed,
            risk_level: RiskLevel::High,
            compliance_score: 72,
            bias_score: 68,
            fairness_score: 75,
            created_at: "2024-01-14 09:15",
            completed_at: Some("2024-01-14 10:30"),
            issues: 8,
        },
        AuditResult {
            id: "4",
            model_name: "Content Moderation AI",
            status: AuditStatus::Completed,
            risk_level: RiskLevel::Low,
            compliance_score: 88,
            bias_score: 85,
            fairness_score: 91,
            created_at: "2024-01-13 16:45",
            completed_at: Some("2024-01-13 17:30"),
            issues: 3,
        },
    ]
}

/// Filter rows by status (`None` = all) and a case-insensitive model-name
/// search term.
pub fn filter_results(
    results: &[AuditResult],
    status: Option<AuditStatus>,
    search: &str,
) -> Vec<AuditResult> {
    let needle = search.to_lowercase();
    results
        .iter()
        .filter(|r| status.is_none_or(|s| r.status == s))
        .filter(|r| needle.is_empty() || r.model_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
