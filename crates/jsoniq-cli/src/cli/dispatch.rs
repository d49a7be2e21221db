//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but are populated from clap;
//! `From<*Params>` impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::highlight::HighlightArgs;
use crate::commands::html::HtmlArgs;
use crate::commands::tokens::TokensArgs;
use crate::commands::words::WordsArgs;

pub struct TokensParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub json: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            json: m.get_flag("json"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            raw: p.raw,
            spans: p.spans,
            json: p.json,
        }
    }
}

pub struct HtmlParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub no_wrap: bool,
    pub line_numbers: bool,
    pub css_class: String,
}

impl HtmlParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            no_wrap: m.get_flag("no_wrap"),
            line_numbers: m.get_flag("line_numbers"),
            css_class: m
                .get_one::<String>("css_class")
                .cloned()
                .unwrap_or_else(|| "highlight".to_string()),
        }
    }
}

impl From<HtmlParams> for HtmlArgs {
    fn from(p: HtmlParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            wrap: !p.no_wrap,
            line_numbers: p.line_numbers,
            css_class: p.css_class,
        }
    }
}

pub struct HighlightParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub color: ColorChoice,
}

impl HighlightParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<HighlightParams> for HighlightArgs {
    fn from(p: HighlightParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct WordsParams;

impl WordsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

impl From<WordsParams> for WordsArgs {
    fn from(_: WordsParams) -> Self {
        Self {}
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    m.get_one::<ColorChoice>("color").copied().unwrap_or_default()
}
