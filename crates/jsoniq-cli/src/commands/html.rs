use std::path::PathBuf;

use jsoniq_highlight::HtmlConfig;
use jsoniq_highlight::render::html;

use super::lex_common::{lex, warn_unterminated};
use super::source_loader::load_source_or_exit;

pub struct HtmlArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub wrap: bool,
    pub line_numbers: bool,
    pub css_class: String,
}

pub fn run(args: HtmlArgs) {
    let source = load_source_or_exit(args.source_path.as_deref(), args.source_text.as_deref());
    let lexed = lex(&source, false);

    let config = HtmlConfig::new()
        .wrap(args.wrap)
        .line_numbers(args.line_numbers)
        .css_class(args.css_class);
    println!("{}", html(lexed.tokens, &config));

    warn_unterminated(&source, lexed.termination);
}
