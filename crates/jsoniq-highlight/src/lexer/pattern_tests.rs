use super::{GrammarError, Pattern};

#[test]
fn anchored_at_start() {
    let pattern = Pattern::new("b").unwrap();
    assert_eq!(pattern.match_len("bc"), Some(1));
    assert_eq!(pattern.match_len("ab"), None);
}

#[test]
fn greedy_repetition() {
    let pattern = Pattern::new("[0-9]+").unwrap();
    assert_eq!(pattern.match_len("123x"), Some(3));
}

#[test]
fn optional_suffix_backs_off() {
    let pattern = Pattern::new(r"[0-9]+\.[0-9]*(?:[eE][+\-]?[0-9]+)?").unwrap();
    assert_eq!(pattern.match_len("1.5e"), Some(3));
    assert_eq!(pattern.match_len("1.5e+7)"), Some(6));
}

#[test]
fn any_char_spans_multibyte() {
    let pattern = Pattern::new(r"(?s:.)").unwrap();
    assert_eq!(pattern.match_len("é!"), Some(2));
    assert_eq!(pattern.match_len("\n"), Some(1));
    assert_eq!(pattern.match_len(""), None);
}

#[test]
fn negated_class_includes_newlines() {
    let pattern = Pattern::new(r"[^(:)]+").unwrap();
    assert_eq!(pattern.match_len(" a\nb (: c"), Some(5));
}

#[test]
fn literal_escapes_metacharacters() {
    let pattern = Pattern::literal("[?").unwrap();
    assert_eq!(pattern.as_str(), r"\[\?");
    assert_eq!(pattern.match_len("[?$$]"), Some(2));
    assert_eq!(pattern.match_len("[ ?"), None);
}

#[test]
fn empty_match_is_reported() {
    assert!(Pattern::new("a*").unwrap().matches_empty());
    assert!(!Pattern::new("a+").unwrap().matches_empty());
    assert_eq!(Pattern::new("a*").unwrap().match_len("b"), Some(0));
}

#[test]
fn invalid_pattern() {
    let err = Pattern::new("(").unwrap_err();
    assert!(matches!(err, GrammarError::InvalidPattern(ref p, _) if p == "("));
}

#[test]
fn display_shows_source() {
    let pattern = Pattern::new(r"\$\$").unwrap();
    assert_eq!(pattern.to_string(), r"\$\$");
    assert_eq!(format!("{pattern:?}"), r#"Pattern("\\$\\$")"#);
}
