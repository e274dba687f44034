//! Shared tree-walking helpers for the detectors.

use tree_sitter::Node;

use crate::parser::SourceUnit;

/// Resolve a node to a function definition, unwrapping a decorator
/// wrapper if present. Returns `None` for anything else.
pub(crate) fn as_function(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "function_definition" => Some(node),
        "decorated_definition" => node
            .child_by_field_name("definition")
            .filter(|d| d.kind() == "function_definition"),
        _ => None,
    }
}

/// Resolve a node to a class definition, unwrapping a decorator
/// wrapper if present.
pub(crate) fn as_class(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "class_definition" => Some(node),
        "decorated_definition" => node
            .child_by_field_name("definition")
            .filter(|d| d.kind() == "class_definition"),
        _ => None,
    }
}

/// Declared name of a function or class definition.
pub(crate) fn entity_name(unit: &SourceUnit, definition: Node<'_>) -> String {
    definition
        .child_by_field_name("name")
        .map(|n| unit.text_of(n).to_string())
        .unwrap_or_default()
}

/// Control-flow constructs that deepen nesting by one when entered.
/// Branch clauses of the same construct (`elif`, `else`, `except`,
/// `finally`) are children of these nodes and do not compound depth.
pub(crate) fn is_control(node: Node<'_>) -> bool {
    matches!(
        node.kind(),
        "if_statement" | "for_statement" | "while_statement" | "with_statement" | "try_statement"
    )
}
