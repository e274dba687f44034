//! Output formatting for analysis results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::detect::{AnalysisResult, FindingMap, SmellKind};

/// One analyzed file and its findings.
pub struct FileReport {
    pub path: String,
    pub result: AnalysisResult,
}

// =============================================================================
// JSON format
// =============================================================================

#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files_scanned: usize,
    pub total_findings: usize,
    pub files: Vec<JsonFileReport>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonFileReport {
    pub path: String,
    /// One entry per detector, keyed by its identifier; empty maps are
    /// kept so "no issues found" is explicit in the payload too.
    pub smells: BTreeMap<String, FindingMap>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Render results as a JSON document.
pub fn render_json(reports: &[FileReport]) -> anyhow::Result<String> {
    let files: Vec<JsonFileReport> = reports
        .iter()
        .map(|r| JsonFileReport {
            path: r.path.clone(),
            smells: SmellKind::ALL
                .iter()
                .map(|kind| (kind.as_str().to_string(), r.result.findings_for(*kind).clone()))
                .collect(),
            errors: r.result.errors.iter().map(|e| e.message.clone()).collect(),
        })
        .collect();

    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        files_scanned: reports.len(),
        total_findings: reports.iter().map(|r| r.result.total_findings()).sum(),
        files,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}

/// Write results in JSON format to stdout.
pub fn write_json(reports: &[FileReport]) -> anyhow::Result<()> {
    println!("{}", render_json(reports)?);
    Ok(())
}

// =============================================================================
// Pretty format
// =============================================================================

/// Metric rendered with its detector's unit label.
fn format_metric(kind: SmellKind, value: usize) -> String {
    match kind {
        SmellKind::DeepNesting => format!("{} {}", kind.unit_label(), value),
        _ => format!("{} {}", value, kind.unit_label()),
    }
}

/// Render one detector section.
fn render_smell(out: &mut String, kind: SmellKind, findings: &FindingMap) {
    out.push_str(&format!(
        "{} {}:\n",
        "[SMELL]".cyan().bold(),
        kind.display_name()
    ));

    if findings.is_empty() {
        out.push_str(&format!("  {}\n", "no issues found.".dimmed()));
        return;
    }

    for (name, value) in findings {
        out.push_str(&format!(
            "  - {}: {}\n",
            name.yellow(),
            format_metric(kind, *value)
        ));
    }
}

/// Render results in pretty (human-readable) format.
pub fn render_pretty(reports: &[FileReport]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} {}\n",
        "=".repeat(10),
        "CODE SMELL REPORT".bold(),
        "=".repeat(10)
    ));

    for report in reports {
        out.push('\n');
        out.push_str(&format!("{}\n\n", report.path.underline()));

        for kind in SmellKind::ALL {
            render_smell(&mut out, kind, report.result.findings_for(kind));
            out.push('\n');
        }

        for error in &report.result.errors {
            out.push_str(&format!(
                "{} detector {} failed: {}\n",
                "warning:".yellow().bold(),
                error.kind,
                error.message
            ));
        }
    }

    let total: usize = reports.iter().map(|r| r.result.total_findings()).sum();
    if total == 0 {
        out.push_str(&format!("{}\n", "No code smells detected.".green().bold()));
    } else {
        out.push_str(&format!(
            "{}\n",
            format!(
                "{} code smell{} detected.",
                total,
                if total == 1 { "" } else { "s" }
            )
            .red()
            .bold()
        ));
    }

    out
}

/// Write results in pretty format to stdout.
pub fn write_pretty(reports: &[FileReport]) {
    print!("{}", render_pretty(reports));
}
