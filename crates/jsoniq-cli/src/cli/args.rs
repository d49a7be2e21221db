//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be composed
//! into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use super::ColorChoice;

/// Source file to read (positional); `-` reads stdin.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("source_text")
        .help("JSONiq file to read ('-' for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline JSONiq text")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(value_parser!(ColorChoice))
        .help("Colorize output")
}

/// Disable coalescing of same-category tokens (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("One token per rule match (don't merge same-category neighbours)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print tokens as a JSON array")
}

/// Emit bare spans without `<pre><code>` (--no-wrap).
pub fn no_wrap_arg() -> Arg {
    Arg::new("no_wrap")
        .long("no-wrap")
        .action(ArgAction::SetTrue)
        .help("Don't wrap output in <pre><code>")
}

/// Number output lines (--line-numbers).
pub fn line_numbers_arg() -> Arg {
    Arg::new("line_numbers")
        .long("line-numbers")
        .action(ArgAction::SetTrue)
        .help("Prefix each line with its number")
}

/// Class of the wrapping `<pre>` (--class).
pub fn css_class_arg() -> Arg {
    Arg::new("css_class")
        .long("class")
        .value_name("NAME")
        .default_value("highlight")
        .help("CSS class of the wrapping <pre>")
}
