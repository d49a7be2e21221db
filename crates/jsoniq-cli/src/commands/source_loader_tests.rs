use std::io::Write;

use super::source_loader::{LoadError, load_source};

#[test]
fn inline_text_wins() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "from file").unwrap();

    let source = load_source(Some(file.path()), Some("inline")).unwrap();
    assert_eq!(source, "inline");
}

#[test]
fn reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "for $x in 1 to 3\nreturn $x").unwrap();

    let source = load_source(Some(file.path()), None).unwrap();
    assert_eq!(source, "for $x in 1 to 3\nreturn $x");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.jq");

    let err = load_source(Some(&path), None).unwrap_err();
    assert!(matches!(err, LoadError::File { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
    assert!(err.to_string().contains("absent.jq"));
}

#[test]
fn nothing_given() {
    let err = load_source(None, None).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"source is required: use positional argument, '-' for stdin, or -s/--source");
}
