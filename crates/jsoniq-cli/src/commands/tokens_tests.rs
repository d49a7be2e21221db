use indoc::indoc;

use super::lex_common::lex;
use super::tokens::{format_tokens, to_json};

#[test]
fn plain_dump() {
    let source = "let $x := jn:doc('a')";
    let lexed = lex(source, false);
    insta::assert_snapshot!(format_tokens(source, &lexed.tokens, false), @r#"
    Keyword "let"
    Whitespace " "
    Variable "$x"
    Whitespace " "
    Operator ":="
    Whitespace " "
    NamespacedFunctionName "jn:doc"
    Punctuation "("
    StringSingle "'a'"
    Punctuation ")"
    "#);
}

#[test]
fn dump_with_spans() {
    let source = indoc! {"
        (: hi :)
        $$.a
    "};
    let lexed = lex(source, false);
    insta::assert_snapshot!(format_tokens(source, &lexed.tokens, true), @r#"
    Comment "(: hi :)" [1:1-1:9]
    Whitespace "\n" [1:9-2:1]
    GlobalVariable "$$" [2:1-2:3]
    Punctuation "." [2:3-2:4]
    Identifier "a" [2:4-2:5]
    Whitespace "\n" [2:5-3:1]
    "#);
}

#[test]
fn raw_dump() {
    let source = r#""a""b""#;
    let lexed = lex(source, true);
    insta::assert_snapshot!(format_tokens(source, &lexed.tokens, false), @r#"
    StringDouble "\""
    StringDouble "a"
    StringDouble "\"\""
    StringDouble "b"
    StringDouble "\""
    "#);
}

#[test]
fn json_dump() {
    let source = "1 to\n2";
    let lexed = lex(source, false);
    let json = to_json(source, &lexed.tokens).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value.as_array().unwrap().len(), 5);
    assert_eq!(value[0]["category"], "IntegerNumber");
    assert_eq!(value[2]["category"], "Keyword");
    assert_eq!(value[2]["lexeme"], "to");
    assert_eq!(value[4]["start"], 5);
    assert_eq!(value[4]["end"], 6);
    assert_eq!(value[4]["line"], 2);
    assert_eq!(value[4]["column"], 1);
}

#[test]
fn empty_source() {
    let lexed = lex("", false);
    assert_eq!(format_tokens("", &lexed.tokens, true), "");
    assert_eq!(to_json("", &lexed.tokens).unwrap(), "[]");
}
