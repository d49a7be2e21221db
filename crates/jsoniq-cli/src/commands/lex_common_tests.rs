use jsoniq_highlight::{Category, State, Termination};

use super::lex_common::{lex, line_col, unterminated_message};

#[test]
fn line_col_is_one_based() {
    let source = "let $x\n  := 1";
    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 4), (1, 5));
    assert_eq!(line_col(source, 6), (1, 7));
    assert_eq!(line_col(source, 7), (2, 1));
    assert_eq!(line_col(source, 9), (2, 3));
    assert_eq!(line_col(source, source.len()), (2, 7));
}

#[test]
fn line_col_counts_characters() {
    let source = "'café' x";
    assert_eq!(line_col(source, source.len() - 1), (1, 8));
}

#[test]
fn raw_keeps_rule_steps() {
    let source = "(: a (: b :) :)";
    assert_eq!(lex(source, false).tokens.len(), 1);

    let raw = lex(source, true).tokens;
    assert!(raw.len() > 1);
    assert!(raw.iter().all(|t| t.category == Category::Comment));
}

#[test]
fn reports_outermost_unterminated_construct() {
    let source = "1 +\n  (: outer (: inner :)";
    let lexed = lex(source, false);
    assert_eq!(
        lexed.termination,
        Termination::Unterminated {
            state: State::Comment,
            opened_at: 6,
        }
    );
    insta::assert_snapshot!(
        unterminated_message(source, lexed.termination).unwrap(),
        @"unterminated comment opened at 2:3"
    );
}

#[test]
fn complete_input_has_no_warning() {
    let source = r#"{ "a": 'b' } (: ok :)"#;
    assert_eq!(unterminated_message(source, lex(source, false).termination), None);
}

#[test]
fn unterminated_string_warning() {
    let source = r#"let $s := "open"#;
    insta::assert_snapshot!(
        unterminated_message(source, lex(source, true).termination).unwrap(),
        @"unterminated double-quoted string opened at 1:11"
    );
}
