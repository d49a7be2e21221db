use std::path::PathBuf;

use jsoniq_highlight::Colors;
use jsoniq_highlight::render::ansi;

use super::lex_common::{lex, warn_unterminated};
use super::source_loader::load_source_or_exit;

pub struct HighlightArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub color: bool,
}

pub fn run(args: HighlightArgs) {
    let source = load_source_or_exit(args.source_path.as_deref(), args.source_text.as_deref());
    let lexed = lex(&source, false);

    let out = ansi(lexed.tokens, Colors::new(args.color));
    print!("{}", out);
    if !out.ends_with('\n') {
        println!();
    }

    warn_unterminated(&source, lexed.termination);
}
