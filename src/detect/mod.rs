//! Smell detection engine for Python source units.

mod large_classes;
mod long_functions;
mod nesting;
mod parameters;
mod runner;
mod types;
mod walk;

pub use large_classes::detect_large_classes;
pub use long_functions::detect_long_functions;
pub use nesting::detect_deep_nesting;
pub use parameters::detect_too_many_parameters;
pub use runner::{Engine, Thresholds};
pub use types::{AnalysisResult, DetectorError, FindingMap, SmellKind};
