//! HTML rendering with short CSS classes.
//!
//! Output is compatible with Pygments/Rouge stylesheets: each non-whitespace
//! token becomes `<span class="k">…</span>` (see [`Category::css_class`]).
//! Multi-line tokens are split at line breaks so every line is self-contained.

use std::fmt::Write;

use crate::lexer::{Category, Token};

/// Configuration for HTML output.
#[derive(Clone, Debug)]
pub struct HtmlConfig {
    /// Enclose output in `<pre class=".."><code>…</code></pre>`
    pub(crate) wrap: bool,
    /// Class of the wrapping `<pre>`
    pub(crate) css_class: String,
    /// Prefix each line with a `lineno` span
    pub(crate) line_numbers: bool,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            css_class: "highlight".to_string(),
            line_numbers: false,
        }
    }
}

impl HtmlConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to wrap output in `<pre><code>`.
    pub fn wrap(mut self, value: bool) -> Self {
        self.wrap = value;
        self
    }

    /// Set the class of the wrapping `<pre>`.
    pub fn css_class(mut self, value: impl Into<String>) -> Self {
        self.css_class = value.into();
        self
    }

    /// Set whether to number lines.
    pub fn line_numbers(mut self, value: bool) -> Self {
        self.line_numbers = value;
        self
    }
}

/// Renders tokens as HTML.
pub fn html<'s, I>(tokens: I, config: &HtmlConfig) -> String
where
    I: IntoIterator<Item = Token<'s>>,
{
    let mut writer = HtmlWriter {
        out: String::new(),
        line_numbers: config.line_numbers,
        line: 0,
        at_line_start: true,
    };

    if config.wrap {
        writer.out.push_str("<pre class=\"");
        escape_into(&mut writer.out, &config.css_class);
        writer.out.push_str("\"><code>");
    }

    for token in tokens {
        writer.token(token);
    }

    if config.wrap {
        writer.out.push_str("</code></pre>");
    }
    writer.out
}

struct HtmlWriter {
    out: String,
    line_numbers: bool,
    line: usize,
    at_line_start: bool,
}

impl HtmlWriter {
    fn token(&mut self, token: Token) {
        let mut pieces = token.lexeme.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                self.gutter();
                self.piece(token.category, piece);
            }
            if pieces.peek().is_some() {
                self.gutter();
                self.out.push('\n');
                self.at_line_start = true;
            }
        }
    }

    fn piece(&mut self, category: Category, text: &str) {
        if category == Category::Whitespace {
            escape_into(&mut self.out, text);
            return;
        }
        let _ = write!(self.out, "<span class=\"{}\">", category.css_class());
        escape_into(&mut self.out, text);
        self.out.push_str("</span>");
    }

    /// Opens a new line (with its number, if enabled) before the first piece on it.
    fn gutter(&mut self) {
        if !self.at_line_start {
            return;
        }
        self.at_line_start = false;
        self.line += 1;
        if self.line_numbers {
            let _ = write!(self.out, "<span class=\"lineno\">{}</span>", self.line);
        }
    }
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
