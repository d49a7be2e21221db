//! Renderers that turn a token stream back into styled text.
//!
//! Renderers only consume tokens. Every lexeme is written exactly once and in
//! order, so stripping the markup (or the escape codes) gives back the input.

mod ansi;
mod colors;
mod html;

#[cfg(test)]
mod ansi_tests;
#[cfg(test)]
mod html_tests;

pub use ansi::ansi;
pub use colors::Colors;
pub use html::{HtmlConfig, html};
