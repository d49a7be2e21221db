//! Anchored regex patterns backed by sparse DFAs.
//!
//! Each rule pattern is compiled once, when the grammar is built. Matching
//! is always anchored at the start of the haystack and uses leftmost-first
//! semantics, so greedy repetitions take as much as they can while
//! alternations prefer their earlier branches.

use std::fmt;

use regex_automata::dfa::sparse::DFA;
use regex_automata::dfa::{Automaton, StartKind, dense};
use regex_automata::{Anchored, Input};

use super::rules::GrammarError;

/// Compiled pattern plus its source text (kept for display and errors).
#[derive(Clone)]
pub struct Pattern {
    source: String,
    dfa: DFA<Vec<u8>>,
}

impl Pattern {
    /// Compiles `pattern`, first to a dense DFA, then to a sparse one.
    pub fn new(pattern: &str) -> Result<Self, GrammarError> {
        let dense = dense::DFA::builder()
            .configure(
                dense::DFA::config()
                    .start_kind(StartKind::Anchored)
                    .minimize(true),
            )
            .build(pattern)
            .map_err(|e| GrammarError::InvalidPattern(pattern.to_string(), e.to_string()))?;

        let dfa = dense
            .to_sparse()
            .map_err(|e| GrammarError::InvalidPattern(pattern.to_string(), e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            dfa,
        })
    }

    /// Compiles a pattern matching `literal` exactly.
    pub fn literal(literal: &str) -> Result<Self, GrammarError> {
        Self::new(&regex_syntax::escape(literal))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Length in bytes of the match starting at the beginning of `haystack`.
    ///
    /// `Some(0)` means the pattern matched the empty string.
    pub fn match_len(&self, haystack: &str) -> Option<usize> {
        let input = Input::new(haystack).anchored(Anchored::Yes);
        let found = self.dfa.try_search_fwd(&input);
        self.ensure_searched(found).map(|m| m.offset())
    }

    #[inline]
    pub fn is_match(&self, haystack: &str) -> bool {
        self.match_len(haystack).is_some()
    }

    pub fn matches_empty(&self) -> bool {
        self.match_len("") == Some(0)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
