//! Detection of over-long functions.
//!
//! Length policy: docstring-adjusted span. The span runs from the
//! declaration line to the highest source line carried by any named
//! descendant; a leading docstring's lines (plus one for the opening
//! delimiter) are subtracted before comparing against the threshold,
//! so documentation never counts toward body size.
//!
//! The subtracted span is the string literal's full line range, so a
//! closing delimiter on its own line is subtracted too. Tools that
//! count only the docstring's content lines credit one line less for
//! that shape; this policy is applied uniformly, never mixed.

use tree_sitter::Node;

use crate::parser::SourceUnit;

use super::types::FindingMap;
use super::walk::{as_function, entity_name};

/// Return every function whose adjusted length strictly exceeds
/// `max_lines`, mapped to that length.
pub fn detect_long_functions(unit: &SourceUnit, max_lines: usize) -> anyhow::Result<FindingMap> {
    let mut findings = FindingMap::new();
    scan(unit, unit.root(), max_lines, &mut findings);
    Ok(findings)
}

/// Walk the tree collecting function definitions. Nested functions are
/// evaluated independently; the outer function's span still includes
/// the lines they occupy.
fn scan(unit: &SourceUnit, node: Node<'_>, max_lines: usize, findings: &mut FindingMap) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(func) = as_function(child) {
            let length = adjusted_length(func);
            if length > max_lines {
                findings.insert(entity_name(unit, func), length);
            }
            scan(unit, func, max_lines, findings);
        } else {
            scan(unit, child, max_lines, findings);
        }
    }
}

/// Docstring-adjusted line count of a function, clamped at zero for
/// functions whose body is nothing but a docstring.
fn adjusted_length(func: Node<'_>) -> usize {
    let start = func.start_position().row;
    let end = max_descendant_row(func);
    let raw = end - start + 1;

    match docstring(func) {
        Some(doc) => {
            let doc_span = doc.end_position().row - doc.start_position().row + 1;
            raw.saturating_sub(doc_span + 1)
        }
        None => raw,
    }
}

/// Highest source line (0-indexed row) among the node and its named
/// descendants. Falls back to the node's own line for an empty body.
/// Comments are skipped: they carry no executable statement.
fn max_descendant_row(node: Node<'_>) -> usize {
    let mut max = node.start_position().row;
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "comment" {
            continue;
        }
        max = max.max(max_descendant_row(child));
    }
    max
}

/// The function's docstring node, if its body starts with a bare
/// string literal.
fn docstring(func: Node<'_>) -> Option<Node<'_>> {
    let body = func.child_by_field_name("body")?;
    let first = body.named_child(0)?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.named_child(0)?;
    (expr.kind() == "string").then_some(expr)
}
