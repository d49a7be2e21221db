//! Lexing shared by the source-taking commands.

use jsoniq_highlight::{Coalesce, Termination, Token, jsoniq};

pub struct Lexed<'s> {
    pub tokens: Vec<Token<'s>>,
    pub termination: Termination,
}

/// Lexes `source`, merging same-category neighbours unless `raw`.
pub fn lex(source: &str, raw: bool) -> Lexed<'_> {
    let mut lexer = jsoniq().lex(source);
    let steps: Vec<Token> = lexer.by_ref().collect();
    let termination = lexer.termination();

    let tokens = if raw {
        steps
    } else {
        Coalesce::new(source, steps.into_iter()).collect()
    };

    Lexed {
        tokens,
        termination,
    }
}

/// 1-based line and column (in characters) of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

pub fn unterminated_message(source: &str, termination: Termination) -> Option<String> {
    match termination {
        Termination::Complete => None,
        Termination::Unterminated { state, opened_at } => {
            let (line, column) = line_col(source, opened_at);
            Some(format!("unterminated {state} opened at {line}:{column}"))
        }
    }
}

pub fn warn_unterminated(source: &str, termination: Termination) {
    if let Some(msg) = unterminated_message(source, termination) {
        eprintln!("warning: {}", msg);
    }
}
