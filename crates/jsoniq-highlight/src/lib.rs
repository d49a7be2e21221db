//! Stateful lexer for JSONiq queries, built for syntax highlighting.
//!
//! # Example
//!
//! ```
//! use jsoniq_highlight::{Category, tokenize};
//!
//! let source = "let $doc := jn:doc('mycol.jn', 'mydoc.jn') return $doc";
//! let tokens = tokenize(source);
//!
//! assert_eq!(tokens[0].category, Category::Keyword);
//! assert_eq!(tokens.iter().map(|t| t.lexeme).collect::<String>(), source);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod lexer;
pub mod render;

pub use lexer::{
    Action, Category, Classifier, Coalesce, Cursor, Grammar, GrammarBuilder, GrammarError, Lexer,
    Pattern, Rule, State, Termination, Token, jsoniq, tokenize,
};
pub use render::{Colors, HtmlConfig};
