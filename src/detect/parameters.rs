//! Detection of functions with too many parameters.

use tree_sitter::Node;

use crate::parser::SourceUnit;

use super::types::FindingMap;
use super::walk::{as_function, entity_name};

/// Conventional receiver name; a leading `self` is excluded from the
/// count so methods are compared on their meaningful arguments.
const RECEIVER: &str = "self";

/// Return every function whose adjusted parameter count strictly
/// exceeds `max_params`, mapped to that count.
pub fn detect_too_many_parameters(
    unit: &SourceUnit,
    max_params: usize,
) -> anyhow::Result<FindingMap> {
    let mut findings = FindingMap::new();
    scan(unit, unit.root(), max_params, &mut findings);
    Ok(findings)
}

fn scan(unit: &SourceUnit, node: Node<'_>, max_params: usize, findings: &mut FindingMap) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(func) = as_function(child) {
            let count = parameter_count(unit, func);
            if count > max_params {
                findings.insert(entity_name(unit, func), count);
            }
            scan(unit, func, max_params, findings);
        } else {
            scan(unit, child, max_params, findings);
        }
    }
}

/// Count declared positional parameters (plain, typed, defaulted).
/// Counting stops at `*`/`*args`/`**kwargs`: variadic and keyword-only
/// parameters are out of scope. A leading `self` is excluded.
fn parameter_count(unit: &SourceUnit, func: Node<'_>) -> usize {
    let Some(params) = func.child_by_field_name("parameters") else {
        return 0;
    };

    let mut names: Vec<&str> = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            // "/" marker: everything before it is still positional
            "positional_separator" => continue,
            _ => {}
        }
        if let Some(name) = positional_name(unit, child) {
            names.push(name);
        }
    }

    if names.first() == Some(&RECEIVER) {
        names.len() - 1
    } else {
        names.len()
    }
}

/// Name of a positional parameter node, or `None` for anything that is
/// not one.
fn positional_name<'u>(unit: &'u SourceUnit, node: Node<'_>) -> Option<&'u str> {
    match node.kind() {
        "identifier" => Some(unit.text_of(node)),
        "typed_parameter" => node
            .named_child(0)
            .filter(|n| n.kind() == "identifier")
            .map(|n| unit.text_of(n)),
        "default_parameter" | "typed_default_parameter" => node
            .child_by_field_name("name")
            .filter(|n| n.kind() == "identifier")
            .map(|n| unit.text_of(n)),
        _ => None,
    }
}
