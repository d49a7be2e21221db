mod cli;
mod commands;

use cli::{HighlightParams, HtmlParams, TokensParams, WordsParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("html", m)) => {
            let params = HtmlParams::from_matches(m);
            commands::html::run(params.into());
        }
        Some(("highlight", m)) => {
            let params = HighlightParams::from_matches(m);
            commands::highlight::run(params.into());
        }
        Some(("words", m)) => {
            let params = WordsParams::from_matches(m);
            commands::words::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
