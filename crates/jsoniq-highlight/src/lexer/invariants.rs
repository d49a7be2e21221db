//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use regex_automata::{HalfMatch, MatchError};

use super::cursor::Cursor;
use super::engine::Lexer;
use super::pattern::Pattern;
use super::rules::{Grammar, GrammarError, State};

impl Cursor<'_> {
    pub(super) fn ensure_advance(&self, n: usize) {
        assert!(n > 0, "Cursor: zero-width advance at offset {}", self.position());

        let target = self.position() + n;
        assert!(
            target <= self.source().len(),
            "Cursor: advance by {n} from offset {} goes past end of input ({} bytes)",
            self.position(),
            self.source().len()
        );
        assert!(
            self.source().is_char_boundary(target),
            "Cursor: offset {target} is not on a character boundary"
        );
    }
}

impl Pattern {
    pub(super) fn ensure_searched(
        &self,
        found: Result<Option<HalfMatch>, MatchError>,
    ) -> Option<HalfMatch> {
        found.unwrap_or_else(|e| {
            panic!(
                "Pattern: search with `{}` failed: {e} (DFA is built without quit bytes)",
                self.as_str()
            )
        })
    }
}

impl Lexer<'_, '_> {
    pub(super) fn no_rule_matched(&self, state: State) -> ! {
        panic!(
            "Lexer: no rule matched in {state} state at offset {} \
             (every state must end with a one-character catch-all rule)",
            self.position()
        )
    }
}

pub(super) fn ensure_builtin_grammar(built: Result<Grammar, GrammarError>) -> Grammar {
    built.unwrap_or_else(|e| panic!("built-in JSONiq grammar failed to compile: {e}"))
}
