// tests/integration/loader.rs

use std::io::Write;

use tempfile::{Builder, NamedTempFile};
use taskplan::config::{load_document, parse_document};
use taskplan::errors::PlanError;
use taskplan::order_tasks;
use taskplan::types::InputFormat;

use crate::common::{ids, init_tracing};

fn temp_with_suffix(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn toml_document_is_loaded_by_extension() {
    init_tracing();
    let file = temp_with_suffix(
        ".toml",
        r#"
[[job]]
id = "second"
command = "echo 2"
priority = 1
dependencies = ["first"]

[[job]]
id = "first"
command = "echo 1"
priority = 1
dependencies = []
"#,
    );

    let doc = load_document(file.path(), None).unwrap();

    assert_eq!(ids(&order_tasks(&doc).unwrap()), ["first", "second"]);
}

#[test]
fn json_document_keeps_key_order() {
    init_tracing();
    let file = temp_with_suffix(
        ".json",
        r#"{
            "zeta": {"id": "zeta", "command": "z", "priority": 0, "dependencies": []},
            "alpha": {"id": "alpha", "command": "a", "priority": 0, "dependencies": []}
        }"#,
    );

    let doc = load_document(file.path(), None).unwrap();

    assert_eq!(ids(&order_tasks(&doc).unwrap()), ["zeta", "alpha"]);
}

#[test]
fn explicit_format_overrides_extension() {
    let file = temp_with_suffix(
        ".txt",
        r#"[{"id": "a", "command": "a", "priority": 0, "dependencies": []}]"#,
    );

    let doc = load_document(file.path(), Some(InputFormat::Json)).unwrap();

    assert_eq!(ids(&order_tasks(&doc).unwrap()), ["a"]);
}

#[test]
fn unknown_extension_without_format_is_rejected() {
    let file = temp_with_suffix(".yaml", "tasks: []");

    match load_document(file.path(), None) {
        Err(PlanError::UnsupportedFormat(msg)) => assert!(msg.contains("cannot infer format")),
        other => panic!("Expected UnsupportedFormat, got: {:?}", other),
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_document("definitely/not/here.toml", None);
    assert!(matches!(result, Err(PlanError::IoError(_))));
}

#[test]
fn invalid_text_reports_parser_error() {
    assert!(matches!(
        parse_document("[[job]\nid = ", InputFormat::Toml),
        Err(PlanError::TomlError(_))
    ));
    assert!(matches!(
        parse_document("{\"open\": ", InputFormat::Json),
        Err(PlanError::JsonError(_))
    ));
}

#[test]
fn toml_float_priority_is_not_a_task() {
    let doc = parse_document(
        r#"
[t]
id = "t"
command = "echo"
priority = 1.0
dependencies = []
"#,
        InputFormat::Toml,
    )
    .unwrap();

    assert!(order_tasks(&doc).unwrap().is_empty());
}

#[test]
fn input_format_from_str_and_path() {
    assert_eq!("TOML".parse::<InputFormat>(), Ok(InputFormat::Toml));
    assert_eq!(" json ".parse::<InputFormat>(), Ok(InputFormat::Json));
    assert!("yaml".parse::<InputFormat>().is_err());
    assert_eq!(
        InputFormat::from_path(std::path::Path::new("a/b.json")),
        Some(InputFormat::Json)
    );
    assert_eq!(InputFormat::from_path(std::path::Path::new("Makefile")), None);
}
