//! Tests for loading style sheets from disk.

use std::io::Write;

use horizon_markup_style::prelude::*;
use horizon_markup_style::Error;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_load_toml_file() {
    init_tracing();
    let file = write_temp(
        ".toml",
        r##"
        [baseStyle]
        fontColor = "#333333"

        [[rules]]
        selector = "strong"
        style = { fontWeight = "black" }
        "##,
    );

    let sheet = StyleSheet::from_file(file.path()).expect("Failed to load sheet");

    assert_eq!(sheet.base_style.font_color.as_deref(), Some("#333333"));
    assert_eq!(
        sheet.rule_map().get("strong").unwrap().font_weight,
        Some(FontWeight::Black)
    );
}

#[test]
fn test_load_json_file_uppercase_extension() {
    init_tracing();
    let file = write_temp(
        ".JSON",
        r#"{ "rules": [ { "selector": "u", "style": { "textDecorationStyle": "dotted" } } ] }"#,
    );

    let sheet = StyleSheet::from_file(file.path()).expect("Failed to load sheet");

    assert_eq!(
        sheet.rules[0].style.text_decoration_style,
        Some(TextDecorationStyle::Dotted)
    );
}

#[test]
fn test_missing_file_is_io_error() {
    init_tracing();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");

    let err = StyleSheet::from_file(&path).unwrap_err();

    match err {
        Error::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_reports_format_error() {
    init_tracing();
    let file = write_temp(".toml", "[[rules]]\nselector = \n");

    let err = StyleSheet::from_file(file.path()).unwrap_err();

    assert!(matches!(err, Error::Toml(_)));
    assert!(err.to_string().starts_with("Invalid TOML style sheet"));
}
