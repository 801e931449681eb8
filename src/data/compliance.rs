//! Regulatory violations and framework scores for the compliance view.

#[cfg(test)]
#[path = "compliance_test.rs"]
mod compliance_test;

/// Violation severity grading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// Where a finding stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViolationStatus {
    Violation,
    Warning,
    Compliant,
}

impl ViolationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Violation => "Violation",
            Self::Warning => "Warning",
            Self::Compliant => "Compliant",
        }
    }
}

/// One regulatory finding against a model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawViolation {
    pub id: &'static str,
    /// Framework name, used as the framework filter key.
    pub law: &'static str,
    pub article: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub model_name: &'static str,
    pub violation_type: &'static str,
    pub details: &'static str,
    pub recommendations: &'static [&'static str],
    pub deadline: &'static str,
    pub status: ViolationStatus,
}

/// A regulatory framework with its aggregate compliance score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplianceFramework {
    pub name: &'static str,
    /// 0-100 aggregate compliance.
    pub compliance: u8,
}

/// The violations data set.
pub fn mock_violations() -> Vec<LawViolation> {
    vec![
        LawViolation {
            id: "1",
            law: "EU AI Act",
            article: "Article 10 - Data and Data Governance",
            description: "Training data lacks sufficient representativeness across demographic groups",
            severity: Severity::Critical,
            model_name: "Credit Scoring Model v2.1",
            violation_type: "Data Bias",
            details: "Analysis reveals significant underrepresentation of minority groups (< 5% representation) in training data, violating requirements for representative datasets in high-risk AI systems.",
            recommendations: &[
                "Implement data collection strategy to increase minority group representation to minimum 15%",
                "Apply synthetic data generation techniques using privacy-preserving methods",
                "Establish ongoing data quality monitoring with quarterly reviews",
                "Document data governance procedures as required by Article 10(3)",
            ],
            deadline: "2024-02-15",
            status: ViolationStatus::Violation,
        },
        LawViolation {
            id: "2",
            law: "EU AI Act",
            article: "Article 13 - Transparency and Information",
            description: "Insufficient explainability for high-risk AI system classification",
            severity: Severity::High,
            model_name: "Hiring Algorithm v1.3",
            violation_type: "Transparency Deficit",
            details: "Model lacks required transparency measures for automated decision-making affecting employment. Current SHAP explanations do not meet Article 13 requirements for clear, meaningful information.",
            recommendations: &[
                "Implement comprehensive LIME and SHAP explanations with plain-language summaries",
                "Create user-facing explanation interface showing decision factors",
                "Establish human review process for contested decisions",
                "Provide clear information about automated decision-making to affected individuals",
            ],
            deadline: "2024-01-30",
            status: ViolationStatus::Violation,
        },
        LawViolation {
            id: "3",
            law: "GDPR",
            article: "Article 22 - Automated Decision-Making",
            description: "Lack of meaningful human intervention in automated decisions",
            severity: Severity::High,
            model_name: "Loan Approval System",
            violation_type: "Human Oversight",
            details: "System makes fully automated decisions affecting individuals without adequate human oversight mechanisms. No clear process for individuals to request human review.",
            recommendations: &[
                "Implement human-in-the-loop review for all high-impact decisions",
                "Create clear escalation process for contested decisions",
                "Train staff on manual review procedures and bias recognition",
                "Establish audit trail for all human interventions",
            ],
            deadline: "2024-02-01",
            status: ViolationStatus::Violation,
        },
        LawViolation {
            id: "4",
            law: "EU AI Act",
            article: "Article 14 - Human Oversight",
            description: "Inadequate human oversight measures for high-risk AI system",
            severity: Severity::Medium,
            model_name: "Content Moderation AI",
            violation_type: "Oversight Gap",
            details: "Current oversight measures do not ensure effective human supervision. Lack of real-time monitoring and intervention capabilities.",
            recommendations: &[
                "Implement real-time monitoring dashboard for human supervisors",
                "Establish clear escalation procedures for edge cases",
                "Provide comprehensive training for oversight personnel",
                "Create feedback mechanisms for continuous improvement",
            ],
            deadline: "2024-02-28",
            status: ViolationStatus::Warning,
        },
    ]
}

/// Frameworks summarized at the top of the view.
pub fn mock_frameworks() -> Vec<ComplianceFramework> {
    vec![
        ComplianceFramework { name: "EU AI Act", compliance: 72 },
        ComplianceFramework { name: "GDPR", compliance: 85 },
        ComplianceFramework { name: "US NIST AI RMF", compliance: 68 },
    ]
}

/// Filter violations by framework name and severity (`None` = all).
pub fn filter_violations(
    violations: &[LawViolation],
    law: Option<&str>,
    severity: Option<Severity>,
) -> Vec<LawViolation> {
    violations
        .iter()
        .filter(|v| law.is_none_or(|l| v.law == l))
        .filter(|v| severity.is_none_or(|s| v.severity == s))
        .cloned()
        .collect()
}
