//! The smell engine: runs the four detectors against one source unit.

use serde::{Deserialize, Serialize};

use crate::parser::SourceUnit;

use super::large_classes::detect_large_classes;
use super::long_functions::detect_long_functions;
use super::nesting::detect_deep_nesting;
use super::parameters::detect_too_many_parameters;
use super::types::{AnalysisResult, DetectorError, FindingMap, SmellKind};

/// Per-detector thresholds. An entity is reported only when its metric
/// strictly exceeds the matching threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Maximum docstring-adjusted line count per function (default 30).
    pub max_lines: usize,
    /// Maximum directly-declared methods per class (default 10).
    pub max_methods: usize,
    /// Maximum positional parameters per function, receiver excluded
    /// (default 5).
    pub max_params: usize,
    /// Maximum control-nesting depth per function (default 3).
    pub max_depth: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            max_lines: 30,
            max_methods: 10,
            max_params: 5,
            max_depth: 3,
        }
    }
}

/// Runs all four smell detectors against a parsed source unit.
///
/// The engine is a pure function of (unit, thresholds): it holds no
/// state across runs, never mutates the tree, and analyzing the same
/// unit twice yields identical results.
pub struct Engine {
    thresholds: Thresholds,
}

impl Engine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Analyze one source unit with every detector.
    ///
    /// Detectors are isolated: an internal fault in one is recorded in
    /// `errors` (with an empty finding map for that kind) and the
    /// remaining detectors still run. The result always carries one
    /// entry per [`SmellKind`].
    pub fn analyze(&self, unit: &SourceUnit) -> AnalysisResult {
        let mut result = AnalysisResult::new();

        for kind in SmellKind::ALL {
            match self.run_detector(kind, unit) {
                Ok(findings) => {
                    result.findings.insert(kind, findings);
                }
                Err(e) => {
                    result.findings.insert(kind, FindingMap::new());
                    result.errors.push(DetectorError {
                        kind,
                        message: e.to_string(),
                    });
                }
            }
        }

        result
    }

    fn run_detector(&self, kind: SmellKind, unit: &SourceUnit) -> anyhow::Result<FindingMap> {
        match kind {
            SmellKind::LongFunctions => detect_long_functions(unit, self.thresholds.max_lines),
            SmellKind::LargeClasses => detect_large_classes(unit, self.thresholds.max_methods),
            SmellKind::TooManyParameters => {
                detect_too_many_parameters(unit, self.thresholds.max_params)
            }
            SmellKind::DeepNesting => detect_deep_nesting(unit, self.thresholds.max_depth),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
