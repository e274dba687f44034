//! Detection of classes with too many methods.

use tree_sitter::Node;

use crate::parser::SourceUnit;

use super::types::FindingMap;
use super::walk::{as_class, as_function, entity_name};

/// Return every class whose direct method count strictly exceeds
/// `max_methods`, mapped to that count.
pub fn detect_large_classes(unit: &SourceUnit, max_methods: usize) -> anyhow::Result<FindingMap> {
    let mut findings = FindingMap::new();
    scan(unit, unit.root(), max_methods, &mut findings);
    Ok(findings)
}

fn scan(unit: &SourceUnit, node: Node<'_>, max_methods: usize, findings: &mut FindingMap) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if let Some(class) = as_class(child) {
            let count = method_count(class);
            if count > max_methods {
                findings.insert(entity_name(unit, class), count);
            }
            // Nested classes are evaluated on their own.
            scan(unit, class, max_methods, findings);
        } else {
            scan(unit, child, max_methods, findings);
        }
    }
}

/// Count function definitions that are direct children of the class
/// body. Constructors, regular, static, and class methods all count
/// the same; nothing inside nested scopes does.
fn method_count(class: Node<'_>) -> usize {
    let Some(body) = class.child_by_field_name("body") else {
        return 0;
    };
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter(|child| as_function(*child).is_some())
        .count()
}
