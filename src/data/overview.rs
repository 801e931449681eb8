//! Headline numbers for the dashboard overview.

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;

use super::RiskLevel;
use super::audits::AuditStatus;

/// Top-row stat cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverviewStats {
    pub models_audited: u32,
    /// 0-100 aggregate compliance.
    pub compliance_score: u8,
    pub high_risk_models: u32,
    pub active_audits: u32,
}

/// One month of the bias-score trend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    /// Fairness score, 0.0-1.0.
    pub score: f64,
}

/// One slice of the risk-level distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskSlice {
    pub level: RiskLevel,
    /// Share of models, percent.
    pub share: u8,
}

/// Recent-audit list entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecentAudit {
    pub name: &'static str,
    pub status: AuditStatus,
    pub risk_level: RiskLevel,
    pub date: &'static str,
}

pub fn mock_stats() -> OverviewStats {
    OverviewStats {
        models_audited: 247,
        compliance_score: 92,
        high_risk_models: 8,
        active_audits: 3,
    }
}

/// Six-month fairness-score trend.
pub fn mock_bias_trend() -> Vec<TrendPoint> {
    vec![
        TrendPoint { month: "Jan", score: 0.85 },
        TrendPoint { month: "Feb", score: 0.88 },
        TrendPoint { month: "Mar", score: 0.82 },
        TrendPoint { month: "Apr", score: 0.90 },
        TrendPoint { month: "May", score: 0.87 },
        TrendPoint { month: "Jun", score: 0.92 },
    ]
}

/// Risk-level distribution across the model fleet.
pub fn mock_risk_distribution() -> Vec<RiskSlice> {
    vec![
        RiskSlice { level: RiskLevel::Low, share: 60 },
        RiskSlice { level: RiskLevel::Medium, share: 30 },
        RiskSlice { level: RiskLevel::High, share: 10 },
    ]
}

/// Most recent audit runs.
pub fn mock_recent_audits() -> Vec<RecentAudit> {
    vec![
        RecentAudit {
            name: "Credit Scoring Model v2.1",
            status: AuditStatus::Completed,
            risk_level: RiskLevel::Low,
            date: "2 hours ago",
        },
        RecentAudit {
            name: "Hiring Algorithm v1.3",
            status: AuditStatus::Running,
            risk_level: RiskLevel::Medium,
            date: "5 hours ago",
        },
        RecentAudit {
            name: "Loan Approval System",
            status: AuditStatus::Completed,
            risk_level: RiskLevel::High,
            date: "1 day ago",
        },
        RecentAudit {
            name: "Content Moderation AI",
            status: AuditStatus::Completed,
            risk_level: RiskLevel::Low,
            date: "2 days ago",
        },
    ]
}
