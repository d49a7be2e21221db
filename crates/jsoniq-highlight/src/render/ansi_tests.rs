use super::{Colors, ansi};
use crate::lexer::tokenize;

#[test]
fn colors_off_reproduces_input() {
    let source = "for $i in 1 to 10 (: loop :) return \"#\" || $i";
    assert_eq!(ansi(tokenize(source), Colors::OFF), source);
}

#[test]
fn colors_on_wraps_highlighted_categories() {
    let out = ansi(tokenize("let $x := 'a' (: c :)"), Colors::ON);
    assert_eq!(
        out,
        "\x1b[34mlet\x1b[0m $x := \x1b[32m'a'\x1b[0m \x1b[2m(: c :)\x1b[0m"
    );
}

#[test]
fn palette_switch() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::new(false).is_enabled());
    assert_eq!(Colors::default(), Colors::OFF);
}
