//! Core types for smell detection results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The four smell detectors.
///
/// Each variant carries its own display name and unit label, so the
/// report layer renders by variant rather than branching on strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SmellKind {
    #[serde(rename = "long_functions")]
    LongFunctions,
    #[serde(rename = "large_classes")]
    LargeClasses,
    #[serde(rename = "too_many_parameters")]
    TooManyParameters,
    #[serde(rename = "deep_nesting")]
    DeepNesting,
}

impl SmellKind {
    /// All detectors, in report order.
    pub const ALL: [SmellKind; 4] = [
        SmellKind::LongFunctions,
        SmellKind::LargeClasses,
        SmellKind::TooManyParameters,
        SmellKind::DeepNesting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SmellKind::LongFunctions => "long_functions",
            SmellKind::LargeClasses => "large_classes",
            SmellKind::TooManyParameters => "too_many_parameters",
            SmellKind::DeepNesting => "deep_nesting",
        }
    }

    /// Human-readable section heading for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            SmellKind::LongFunctions => "Long Functions",
            SmellKind::LargeClasses => "Large Classes",
            SmellKind::TooManyParameters => "Too Many Parameters",
            SmellKind::DeepNesting => "Deep Nesting",
        }
    }

    /// Unit label attached to each metric in reports.
    pub fn unit_label(&self) -> &'static str {
        match self {
            SmellKind::LongFunctions => "lines",
            SmellKind::LargeClasses => "methods",
            SmellKind::TooManyParameters => "parameters",
            SmellKind::DeepNesting => "nesting depth",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "long_functions" => Some(SmellKind::LongFunctions),
            "large_classes" => Some(SmellKind::LargeClasses),
            "too_many_parameters" => Some(SmellKind::TooManyParameters),
            "deep_nesting" => Some(SmellKind::DeepNesting),
            _ => None,
        }
    }
}

impl std::fmt::Display for SmellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Findings of one detector: entity name mapped to the metric that
/// exceeded the threshold.
///
/// Known limitation: entities are keyed by name alone, so same-named
/// functions or classes in different scopes collide on one key.
pub type FindingMap = BTreeMap<String, usize>;

/// An internal detector fault. Should not occur on a valid tree; kept
/// so one failing detector never aborts the others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorError {
    pub kind: SmellKind,
    pub message: String,
}

/// Combined output of one engine run: one finding map per detector,
/// plus any internal detector faults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub findings: BTreeMap<SmellKind, FindingMap>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DetectorError>,
}

impl AnalysisResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Findings for one detector; empty if the detector found nothing.
    pub fn findings_for(&self, kind: SmellKind) -> &FindingMap {
        static EMPTY: FindingMap = FindingMap::new();
        self.findings.get(&kind).unwrap_or(&EMPTY)
    }

    /// Total number of findings across all detectors.
    pub fn total_findings(&self) -> usize {
        self.findings.values().map(|m| m.len()).sum()
    }

    /// True when no detector reported anything.
    pub fn is_clean(&self) -> bool {
        self.total_findings() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in SmellKind::ALL {
            assert_eq!(SmellKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(SmellKind::parse("unknown"), None);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(SmellKind::LongFunctions.unit_label(), "lines");
        assert_eq!(SmellKind::LargeClasses.unit_label(), "methods");
        assert_eq!(SmellKind::TooManyParameters.unit_label(), "parameters");
        assert_eq!(SmellKind::DeepNesting.unit_label(), "nesting depth");
    }

    #[test]
    fn test_empty_result_is_clean() {
        let result = AnalysisResult::new();
        assert!(result.is_clean());
        assert!(result.findings_for(SmellKind::DeepNesting).is_empty());
    }
}
