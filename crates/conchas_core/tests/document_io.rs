use conchas_core::{load_document, save_document, StoreError};
use serde_json::json;
use std::fs;

#[test]
fn save_then_load_round_trips_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    let document = json!({
        "categories": [{"id": "cat-001", "name": "Conchas de abanico"}],
        "systemSettings": [{"key": "currency", "value": "PEN"}],
        "total": 12.5,
    });

    save_document(&path, &document).unwrap();
    let loaded = load_document(&path).unwrap();

    assert_eq!(loaded, document);
}

#[test]
fn saved_output_uses_two_space_indentation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    save_document(&path, &json!({"users": [{"id": "user-001"}]})).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("{\n  \"users\""), "unexpected layout: {raw}");
    assert!(raw.contains("\n    \"id\""), "unexpected layout: {raw}");
}

#[test]
fn saved_output_keeps_non_ascii_literal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    save_document(
        &path,
        &json!({"systemSettings": [{"label": "Configuración de días"}]}),
    )
    .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("Configuración de días"));
    assert!(!raw.contains("\\u"));
}

#[test]
fn save_overwrites_previous_content_completely() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    fs::write(&path, "x".repeat(4096)).unwrap();

    save_document(&path, &json!({"users": []})).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"users\": []\n}");
}

#[test]
fn load_reports_parse_error_for_malformed_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");
    fs::write(&path, "colecciones").unwrap();

    let err = load_document(&path).unwrap_err();

    assert!(matches!(err, StoreError::Json(_)), "unexpected error: {err}");
}

#[test]
fn load_reports_io_error_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let err = load_document(&path).unwrap_err();

    assert!(matches!(err, StoreError::Io(_)), "unexpected error: {err}");
}
