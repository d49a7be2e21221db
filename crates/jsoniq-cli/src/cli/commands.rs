//! Command builders for the CLI.
//!
//! Each command is assembled from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Add source input args (positional file or -s/--source).
fn with_source_args(cmd: Command) -> Command {
    cmd.arg(source_path_arg()).arg(source_text_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("jsoniq")
        .about("Tokenize and highlight JSONiq queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(html_command())
        .subcommand(highlight_command())
        .subcommand(words_command())
}

/// Dump the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream of a query")
        .override_usage(
            "\
  jsoniq tokens <FILE>
  jsoniq tokens -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  jsoniq tokens query.jq                 # one token per line
  jsoniq tokens query.jq --spans         # with line:column ranges
  jsoniq tokens -s 'let $x := 1' --raw   # one token per rule match
  cat query.jq | jsoniq tokens - --json  # JSON array from stdin"#,
        )
        .arg(raw_arg())
        .arg(spans_arg())
        .arg(json_arg());

    with_source_args(cmd)
}

/// Render HTML markup.
pub fn html_command() -> Command {
    let cmd = Command::new("html")
        .about("Render a query as highlighted HTML")
        .after_help(
            r#"EXAMPLES:
  jsoniq html query.jq                   # <pre class="highlight"><code>...
  jsoniq html query.jq --line-numbers
  jsoniq html -s '$$.name' --no-wrap     # spans only"#,
        )
        .arg(no_wrap_arg())
        .arg(line_numbers_arg())
        .arg(css_class_arg());

    with_source_args(cmd)
}

/// Print with terminal colors.
pub fn highlight_command() -> Command {
    let cmd = Command::new("highlight")
        .about("Print a query with terminal colors")
        .after_help(
            r#"EXAMPLES:
  jsoniq highlight query.jq
  jsoniq highlight query.jq --color always | less -R"#,
        )
        .arg(color_arg());

    with_source_args(cmd)
}

/// List the keyword and builtin sets.
pub fn words_command() -> Command {
    Command::new("words").about("List keywords and builtins")
}
