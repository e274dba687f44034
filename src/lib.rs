//! Smellcheck - structural code smell detector for Python.
//!
//! Smellcheck parses a Python source unit and flags four structural
//! code smells: over-long functions, over-large classes, functions
//! with too many parameters, and deeply nested control flow.
//!
//! # Architecture
//!
//! - `parser`: loads a file path or raw text into a tree-sitter syntax
//!   tree ([`SourceUnit`]); all resolution and syntax errors surface
//!   here.
//! - `detect`: the smell engine - four independent detectors over the
//!   same immutable tree, each producing a name-to-metric finding map.
//! - `config`: per-detector thresholds, optionally loaded from a
//!   `smellcheck.yaml` file.
//! - `report`: pretty and JSON rendering of the engine's output.
//! - `cli`: the command-line front-end.
//!
//! The engine never touches the filesystem and is a pure function of
//! (source unit, thresholds): re-running it yields identical findings.

pub mod cli;
pub mod config;
pub mod detect;
pub mod parser;
pub mod report;

pub use config::Config;
pub use detect::{AnalysisResult, Engine, FindingMap, SmellKind, Thresholds};
pub use parser::{parse_file, parse_source, ParseError, SourceUnit};
pub use report::FileReport;
