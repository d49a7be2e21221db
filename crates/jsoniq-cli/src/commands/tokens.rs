use std::fmt::Write;
use std::path::PathBuf;

use jsoniq_highlight::{Category, Token};
use serde::Serialize;

use super::lex_common::{lex, line_col, warn_unterminated};
use super::source_loader::load_source_or_exit;

pub struct TokensArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub json: bool,
}

/// Token as printed by `--json`.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'s> {
    pub category: Category,
    pub lexeme: &'s str,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

pub fn run(args: TokensArgs) {
    let source = load_source_or_exit(args.source_path.as_deref(), args.source_text.as_deref());
    let lexed = lex(&source, args.raw);

    if args.json {
        match to_json(&source, &lexed.tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", format_tokens(&source, &lexed.tokens, args.spans));
    }

    warn_unterminated(&source, lexed.termination);
}

/// One `Category "lexeme"` line per token, optionally with `[line:col-line:col]`.
pub fn format_tokens(source: &str, tokens: &[Token], spans: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = write!(out, "{:?} {:?}", token.category, token.lexeme);
        if spans {
            let (start_line, start_col) = line_col(source, token.start);
            let (end_line, end_col) = line_col(source, token.end);
            let _ = write!(out, " [{start_line}:{start_col}-{end_line}:{end_col}]");
        }
        out.push('\n');
    }
    out
}

pub fn to_json(source: &str, tokens: &[Token]) -> serde_json::Result<String> {
    let records: Vec<TokenRecord> = tokens
        .iter()
        .map(|token| {
            let (line, column) = line_col(source, token.start);
            TokenRecord {
                category: token.category,
                lexeme: token.lexeme,
                start: token.start,
                end: token.end,
                line,
                column,
            }
        })
        .collect();
    serde_json::to_string_pretty(&records)
}
