//! Evaluation criteria, in export column order.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Criterion {
    pub name: &'static str,
    /// Shown as the slider tooltip.
    pub description: &'static str,
}

pub const CRITERIA: [Criterion; 7] = [
    Criterion {
        name: "Biological Context",
        description: "Relevance to FSH, folliculogenesis, endocrine system",
    },
    Criterion {
        name: "Network Connectivity",
        description: "Gene/protein network edges and evidence quality",
    },
    Criterion {
        name: "Clinical Utility",
        description: "Supports drug/phenotype linkages and biomarker mapping",
    },
    Criterion {
        name: "AI-readiness",
        description: "Provides structured, ML-ready network features",
    },
    Criterion {
        name: "Interoperability",
        description: "API availability, export formats, reproducibility",
    },
    Criterion {
        name: "Clinical Explainability",
        description: "Ease of interpretation for clinicians",
    },
    Criterion {
        name: "Visual Insight",
        description: "Availability of clear, interactive, and exportable visuals",
    },
];

pub fn position(name: &str) -> Option<usize> {
    CRITERIA.iter().position(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_unique() {
        for (i, c) in CRITERIA.iter().enumerate() {
            assert_eq!(position(c.name), Some(i));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(position("Vibes"), None);
    }
}
