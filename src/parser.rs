//! Source loader: turns a file path or raw Python text into a parsed
//! [`SourceUnit`].
//!
//! The smell engine only ever consumes a successfully parsed unit; all
//! resolution and syntax failures surface here as [`ParseError`] and
//! never reach the detectors.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tree_sitter::{Node, Parser as TsParser, Tree};

/// Errors raised while loading and parsing a source unit.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source text does not parse; `line` is the first offending
    /// line (1-indexed) reported by the grammar.
    #[error("syntax error at line {line}")]
    Syntax { line: usize },

    #[error("failed to initialize Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

/// An immutable, parsed Python source unit: the source text paired with
/// its syntax tree. Created once per analysis run; the engine never
/// mutates it.
#[derive(Debug)]
pub struct SourceUnit {
    source: String,
    tree: Tree,
}

impl SourceUnit {
    /// Root node of the syntax tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Raw source bytes, for resolving node text.
    pub fn source_bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    /// Text of a node, or an empty string if it is not valid UTF-8.
    pub fn text_of(&self, node: Node<'_>) -> &str {
        node.utf8_text(self.source_bytes()).unwrap_or("")
    }
}

/// Parse a Python file from disk (UTF-8).
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<SourceUnit, ParseError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }
    let source = fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_source(source)
}

/// Parse Python source text directly.
pub fn parse_source(source: impl Into<String>) -> Result<SourceUnit, ParseError> {
    let source = source.into();

    let mut parser = TsParser::new();
    parser.set_language(&tree_sitter_python::LANGUAGE.into())?;

    // parse() only returns None on grammar misconfiguration, which
    // set_language has already ruled out
    let tree = parser
        .parse(&source, None)
        .ok_or(ParseError::Syntax { line: 1 })?;

    if tree.root_node().has_error() {
        let line = first_error_line(tree.root_node()).unwrap_or(1);
        return Err(ParseError::Syntax { line });
    }

    Ok(SourceUnit { source, tree })
}

/// Find the first ERROR or MISSING node in the tree, depth-first.
fn first_error_line(node: Node<'_>) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(line) = first_error_line(child) {
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_valid() {
        let unit = parse_source("def hello():\n    pass\n").unwrap();
        assert_eq!(unit.root().kind(), "module");
    }

    #[test]
    fn test_parse_source_syntax_error_reports_line() {
        let err = parse_source("def ok():\n    pass\n\ndef broken(:\n    pass\n").unwrap_err();
        match err {
            ParseError::Syntax { line } => {
                assert!(line >= 4, "expected error at or after line 4, got {line}")
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_file_not_found() {
        let err = parse_file("/nonexistent/never.py").unwrap_err();
        assert!(matches!(err, ParseError::NotFound(_)));
    }

    #[test]
    fn test_parse_file_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("mod.py");
        std::fs::write(&path, "x = 1\n").unwrap();

        let unit = parse_file(&path).unwrap();
        assert!(!unit.root().has_error());
    }

    #[test]
    fn test_text_of_resolves_identifiers() {
        let unit = parse_source("def named():\n    pass\n").unwrap();
        let func = unit.root().named_child(0).unwrap();
        let name = func.child_by_field_name("name").unwrap();
        assert_eq!(unit.text_of(name), "named");
    }
}
