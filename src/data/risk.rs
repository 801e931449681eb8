//! Risk-assessment items and regulatory frameworks.

#[cfg(test)]
#[path = "risk_test.rs"]
mod risk_test;

use super::RiskLevel;

/// Compliance standing of one risk item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    ReviewNeeded,
}

impl ComplianceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::NonCompliant => "Non-compliant",
            Self::ReviewNeeded => "Review needed",
        }
    }
}

/// One assessed risk with its regulation reference and mitigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskItem {
    pub id: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub risk_level: RiskLevel,
    /// Comma-separated regulation references; filtered by substring.
    pub regulation: &'static str,
    pub mitigation: &'static str,
    pub status: ComplianceStatus,
}

/// Summary card for one regulatory framework.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegulatoryFramework {
    pub name: &'static str,
    /// `"active"` regulation or non-binding `"guideline"`.
    pub status: &'static str,
    /// 0-100 aggregate compliance.
    pub compliance: u8,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
}

/// The risk-assessment data set.
pub fn mock_assessments() -> Vec<RiskItem> {
    vec![
        RiskItem {
            id: "1",
            category: "Algorithmic Transparency",
            description: "Model lacks sufficient explainability for high-risk AI system classification",
            risk_level: RiskLevel::High,
            regulation: "EU AI Act Article 13",
            mitigation: "Implement SHAP-based explanations and document decision logic",
            status: ComplianceStatus::ReviewNeeded,
        },
        RiskItem {
            id: "2",
            category: "Bias and Discrimination",
            description: "Detected bias against protected demographic groups",
            risk_level: RiskLevel::Critical,
            regulation: "EU AI Act Article 10, GDPR Article 22",
            mitigation: "Apply fairness constraints and bias mitigation techniques",
            status: ComplianceStatus::NonCompliant,
        },
        RiskItem {
            id: "3",
            category: "Data Quality",
            description: "Training data representativeness and quality assessment",
            risk_level: RiskLevel::Medium,
            regulation: "EU AI Act Article 10",
            mitigation: "Conduct data quality audit and improve sampling methodology",
            status: ComplianceStatus::Compliant,
        },
        RiskItem {
            id: "4",
            category: "Human Oversight",
            description: "Insufficient human oversight mechanisms for automated decisions",
            risk_level: RiskLevel::High,
            regulation: "EU AI Act Article 14",
            mitigation: "Implement human-in-the-loop review process for edge cases",
            status: ComplianceStatus::ReviewNeeded,
        },
        RiskItem {
            id: "5",
            category: "Accuracy and Robustness",
            description: "Model performance monitoring and validation procedures",
            risk_level: RiskLevel::Low,
            regulation: "EU AI Act Article 15",
            mitigation: "Establish continuous monitoring and performance tracking",
            status: ComplianceStatus::Compliant,
        },
    ]
}

/// Frameworks summarized alongside the risk table.
pub fn mock_regulatory_frameworks() -> Vec<RegulatoryFramework> {
    vec![
        RegulatoryFramework {
            name: "EU AI Act",
            status: "active",
            compliance: 72,
            description: "Comprehensive AI regulation framework",
            requirements: &["Risk assessment", "Transparency", "Human oversight", "Data governance"],
        },
        RegulatoryFramework {
            name: "GDPR Article 22",
            status: "active",
            compliance: 85,
            description: "Right not to be subject to automated decision-making",
            requirements: &["Explicit consent", "Right to explanation", "Human intervention"],
        },
        RegulatoryFramework {
            name: "US NIST AI RMF",
            status: "guideline",
            compliance: 68,
            description: "AI Risk Management Framework",
            requirements: &["Governance", "Map risks", "Measure impact", "Manage risks"],
        },
    ]
}

/// Filter risks by exact category and by regulation substring
/// (`None` = all). The substring match lets `"EU AI Act"` select every
/// article-level reference.
pub fn filter_risks(
    risks: &[RiskItem],
    category: Option<&str>,
    regulation: Option<&str>,
) -> Vec<RiskItem> {
    risks
        .iter()
        .filter(|r| category.is_none_or(|c| r.category == c))
        .filter(|r| regulation.is_none_or(|reg| r.regulation.contains(reg)))
        .cloned()
        .collect()
}
