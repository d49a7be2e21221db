//! Lexer for JSONiq queries.
//!
//! # Architecture
//!
//! The lexer is a table-driven state machine in the style of Pygments/Rouge
//! regex lexers, with the tables compiled ahead of time:
//!
//! - [`Pattern`]: anchored sparse DFA, one per rule
//! - [`Rule`]: pattern + [`Action`] (plain, classified, push, pop) + optional lookahead
//! - [`Grammar`]: ordered rule list per [`State`] plus the word [`Classifier`]
//! - [`Lexer`]: cursor + state stack; yields one [`Token`] per rule application
//!
//! Within a state the *first* matching rule wins, not the longest one, so rule
//! order is load-bearing (e.g. `xs:dateTime(` must be tried before bare identifiers).
//!
//! # Totality
//!
//! Every state ends in a one-character catch-all rule, so the lexer never stalls
//! and never reports an error: any input produces tokens whose lexemes
//! concatenate back to the input. Unclosed comments and strings run to the end
//! of input under their own category; [`Lexer::termination`] tells callers
//! whether that happened.

mod category;
mod classifier;
mod cursor;
mod engine;
mod grammar;
mod invariants;
mod pattern;
mod rules;
mod token;

#[cfg(test)]
mod pattern_tests;

pub use category::Category;
pub use classifier::Classifier;
pub use cursor::Cursor;
pub use engine::{Lexer, Termination};
pub use grammar::{BUILTINS, KEYWORDS, jsoniq};
pub use pattern::Pattern;
pub use rules::{Action, Grammar, GrammarBuilder, GrammarError, Rule, State};
pub use token::{Coalesce, Token};

/// Tokenizes JSONiq source with the built-in grammar.
///
/// Adjacent tokens of the same category are merged, so `"a""b"` comes back as
/// a single string token. Use [`Lexer`] directly for one token per rule match.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    jsoniq().lex(source).coalesce().collect()
}
