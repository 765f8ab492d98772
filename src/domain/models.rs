/// Domain models for Interview Insights
///
/// These models represent the product-discovery report derived from each
/// analysis and are platform-agnostic. Every analysis produces a fresh
/// immutable set; nothing here is persisted or updated in place.
use serde::{Deserialize, Serialize};

/// A customer problem surfaced by the analysis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Problem {
    /// Short problem statement
    pub title: String,
    /// Free-form ratio description, e.g. "2/3 interviews"
    pub mentioned_in: String,
    /// High/Medium/Low by convention; accepted as-is, not validated
    pub impact: String,
    /// Supporting quotes, in the order they appeared
    pub evidence: Vec<String>,
}

impl Problem {
    /// Creates a problem with the given title and everything else empty
    pub fn new(title: String) -> Self {
        Self {
            title,
            mentioned_in: String::new(),
            impact: String::new(),
            evidence: Vec::new(),
        }
    }
}

/// A recommended feature derived from the identified problems
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feature {
    /// Feature name
    pub feature: String,
    /// Rationale linking the feature to a problem
    pub why: String,
    /// Small/Medium/Large by convention; accepted as-is, not validated
    pub effort: String,
    /// P0/P1/P2 by convention; accepted as-is, not validated
    pub priority: String,
}

impl Feature {
    /// Creates a feature with the given name and everything else empty
    pub fn new(feature: String) -> Self {
        Self {
            feature,
            why: String::new(),
            effort: String::new(),
            priority: String::new(),
        }
    }
}

/// The single top-priority recommendation of a report
///
/// Fields default to empty strings when the corresponding line is absent
/// from the model's response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopPriority {
    pub what: String,
    pub why: String,
    pub impact: String,
    pub evidence: String,
}

impl TopPriority {
    /// Creates a top priority with the given recommendation and everything else empty
    pub fn new(what: String) -> Self {
        Self {
            what,
            ..Default::default()
        }
    }
}

/// The full parsed product-discovery report
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiscoveryReport {
    pub problems: Vec<Problem>,
    pub features: Vec<Feature>,
    pub top_priority: Option<TopPriority>,
}

impl DiscoveryReport {
    /// True when the response yielded no recognizable sections at all
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty() && self.features.is_empty() && self.top_priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_new_defaults() {
        let problem = Problem::new("Slow onboarding".to_string());
        assert_eq!(problem.title, "Slow onboarding");
        assert!(problem.mentioned_in.is_empty());
        assert!(problem.impact.is_empty());
        assert!(problem.evidence.is_empty());
    }

    #[test]
    fn test_top_priority_new() {
        let top = TopPriority::new("Guided checklist".to_string());
        assert_eq!(top.what, "Guided checklist");
        assert!(top.why.is_empty());
    }

    #[test]
    fn test_empty_report() {
        let report = DiscoveryReport::default();
        assert!(report.is_empty());

        let report = DiscoveryReport {
            features: vec![Feature::new("Search".to_string())],
            ..Default::default()
        };
        assert!(!report.is_empty());
    }
}
