//! End-to-end tests: loader + engine against real Python sources.

use std::path::PathBuf;

use smellcheck::{parse_file, parse_source, Engine, ParseError, SmellKind, Thresholds};

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

#[test]
fn test_clean_fixture_has_no_findings() {
    let unit = parse_file(testdata("clean.py")).unwrap();
    let result = Engine::default().analyze(&unit);

    assert!(result.is_clean());
    assert!(result.errors.is_empty());
    // All four maps are present even when empty.
    assert_eq!(result.findings.len(), 4);
}

#[test]
fn test_smelly_fixture_triggers_all_four_detectors() {
    let unit = parse_file(testdata("smelly.py")).unwrap();
    let result = Engine::default().analyze(&unit);

    assert_eq!(
        result.findings_for(SmellKind::LargeClasses).get("Monster"),
        Some(&11)
    );
    assert_eq!(
        result.findings_for(SmellKind::TooManyParameters).get("wide"),
        Some(&7)
    );
    assert_eq!(
        result.findings_for(SmellKind::DeepNesting).get("tangled"),
        Some(&4)
    );
    assert_eq!(
        result.findings_for(SmellKind::LongFunctions).get("sprawling"),
        Some(&42)
    );
    assert!(result.errors.is_empty());
}

#[test]
fn test_eleven_methods_flagged_ten_not() {
    let mut eleven = String::from("class Eleven:\n");
    for i in 0..11 {
        eleven.push_str(&format!("    def m{}(self):\n        pass\n", i));
    }
    let mut ten = String::from("class Ten:\n");
    for i in 0..10 {
        ten.push_str(&format!("    def m{}(self):\n        pass\n", i));
    }

    let engine = Engine::default();

    let unit = parse_source(eleven).unwrap();
    let result = engine.analyze(&unit);
    assert_eq!(
        result.findings_for(SmellKind::LargeClasses).get("Eleven"),
        Some(&11)
    );

    let unit = parse_source(ten).unwrap();
    let result = engine.analyze(&unit);
    assert!(result.findings_for(SmellKind::LargeClasses).is_empty());
}

#[test]
fn test_receiver_does_not_change_parameter_count() {
    let free = "def handle(a, b, c, d, e, f, g):\n    pass\n";
    let method = "\
class Handler:
    def handle(self, a, b, c, d, e, f, g):
        pass
";
    let engine = Engine::default();

    for source in [free, method] {
        let unit = parse_source(source).unwrap();
        let result = engine.analyze(&unit);
        assert_eq!(
            result.findings_for(SmellKind::TooManyParameters).get("handle"),
            Some(&7)
        );
    }
}

#[test]
fn test_single_pass_function_appears_nowhere() {
    let unit = parse_source("def noop():\n    pass\n").unwrap();
    let result = Engine::new(Thresholds {
        max_lines: 30,
        max_methods: 10,
        max_params: 5,
        max_depth: 3,
    })
    .analyze(&unit);

    for kind in SmellKind::ALL {
        assert!(
            result.findings_for(kind).is_empty(),
            "noop leaked into {kind}"
        );
    }
}

#[test]
fn test_scope_isolation_for_nested_function() {
    // inner sits under three levels of outer control flow but starts
    // its own count at zero.
    let source = "\
def outer(xs):
    if xs:
        for x in xs:
            if x:
                def inner(y):
                    if y:
                        return y
                    return 0
                inner(x)
";
    let unit = parse_source(source).unwrap();
    let result = Engine::new(Thresholds {
        max_depth: 2,
        ..Default::default()
    })
    .analyze(&unit);

    let nesting = result.findings_for(SmellKind::DeepNesting);
    assert_eq!(nesting.get("outer"), Some(&3));
    assert_eq!(nesting.get("inner"), None);
}

#[test]
fn test_engine_runs_are_idempotent() {
    let unit = parse_file(testdata("smelly.py")).unwrap();
    let engine = Engine::default();
    assert_eq!(engine.analyze(&unit), engine.analyze(&unit));
}

#[test]
fn test_loader_rejects_missing_file() {
    let err = parse_file(testdata("does_not_exist.py")).unwrap_err();
    assert!(matches!(err, ParseError::NotFound(_)));
}

#[test]
fn test_loader_rejects_bad_syntax_with_line() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("broken.py");
    std::fs::write(&path, "def fine():\n    pass\n\nclass Broken(\n").unwrap();

    match parse_file(&path).unwrap_err() {
        ParseError::Syntax { line } => assert!(line >= 4, "expected line >= 4, got {line}"),
        other => panic!("expected syntax error, got {other:?}"),
    }
}
