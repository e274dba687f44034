//! Detection of deeply nested control flow.
//!
//! Depth is counted per function: entering a function definition opens
//! a fresh context at depth zero, each `if`/`for`/`while`/`with`/`try`
//! entered adds one, and sibling subtrees never see each other's
//! increments. A nested function is measured and reported on its own;
//! its body never inflates the enclosing function's depth. Control
//! nodes outside any function (module or class body level) are out of
//! scope and simply skipped.

use tree_sitter::Node;

use crate::parser::SourceUnit;

use super::types::FindingMap;
use super::walk::{as_function, entity_name, is_control};

/// Return every function whose maximum internal nesting depth strictly
/// exceeds `max_depth`, mapped to that depth.
pub fn detect_deep_nesting(unit: &SourceUnit, max_depth: usize) -> anyhow::Result<FindingMap> {
    let mut findings = FindingMap::new();
    scan(unit, unit.root(), max_depth, &mut findings);
    Ok(findings)
}

/// Search for function definitions outside any function context.
/// Control nodes found here carry no depth; they are only traversed to
/// reach functions defined inside them.
fn scan(unit: &SourceUnit, node: Node<'_>, max_depth: usize, findings: &mut FindingMap) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(func) = as_function(child) {
            measure_function(unit, func, max_depth, findings);
        } else {
            scan(unit, child, max_depth, findings);
        }
    }
}

/// Measure one function's own maximum depth, then measure any nested
/// functions independently in their own fresh contexts.
fn measure_function(
    unit: &SourceUnit,
    func: Node<'_>,
    max_depth: usize,
    findings: &mut FindingMap,
) {
    let mut deepest = 0;
    let mut nested = Vec::new();

    if let Some(body) = func.child_by_field_name("body") {
        max_nesting(body, 0, &mut deepest, &mut nested);
    }

    if deepest > max_depth {
        findings.insert(entity_name(unit, func), deepest);
    }

    for inner in nested {
        measure_function(unit, inner, max_depth, findings);
    }
}

/// Recursive descent threading the current depth explicitly. The
/// running maximum and the list of nested functions to measure later
/// are both owned by the top-level call.
fn max_nesting<'t>(
    node: Node<'t>,
    depth: usize,
    deepest: &mut usize,
    nested: &mut Vec<Node<'t>>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(func) = as_function(child) {
            // Depth resets at the function boundary.
            nested.push(func);
            continue;
        }
        let next = if is_control(child) { depth + 1 } else { depth };
        *deepest = (*deepest).max(next);
        max_nesting(child, next, deepest, nested);
    }
}
