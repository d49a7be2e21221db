//! The state machine driving rule selection and token emission.

use std::iter::FusedIterator;

use serde::Serialize;

use super::cursor::Cursor;
use super::rules::{Action, Grammar, State};
use super::token::{Coalesce, Token};

/// How the scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// Back in the root state.
    Complete,
    /// Input ended inside a comment or string; `opened_at` is the byte offset
    /// of the outermost construct still open.
    Unterminated { state: State, opened_at: usize },
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    state: State,
    opened_at: usize,
}

/// Single-pass lexer over one input buffer.
///
/// Yields one token per rule application; wrap with [`Lexer::coalesce`] to
/// merge same-category neighbours. Cloning a lexer snapshots its position and
/// state stack, so a clone can replay the rest of the sequence.
#[derive(Debug, Clone)]
pub struct Lexer<'g, 's> {
    grammar: &'g Grammar,
    cursor: Cursor<'s>,
    stack: Vec<Frame>,
}

impl<'g, 's> Lexer<'g, 's> {
    pub fn new(grammar: &'g Grammar, source: &'s str) -> Self {
        Self {
            grammar,
            cursor: Cursor::new(source),
            stack: vec![Frame {
                state: State::Root,
                opened_at: 0,
            }],
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.top().state
    }

    /// Number of frames on the state stack; 1 means root only.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn is_finished(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Whether every comment and string opened so far has been closed.
    pub fn termination(&self) -> Termination {
        match self.stack.get(1) {
            None => Termination::Complete,
            Some(frame) => Termination::Unterminated {
                state: frame.state,
                opened_at: frame.opened_at,
            },
        }
    }

    /// Merges adjacent tokens of the same category.
    pub fn coalesce(self) -> Coalesce<'s, Self> {
        Coalesce::new(self.cursor.source(), self)
    }

    /// Applies the first matching rule of the current state and emits its token.
    pub fn step(&mut self) -> Option<Token<'s>> {
        if self.cursor.is_eof() {
            return None;
        }

        let grammar = self.grammar;
        let state = self.state();
        let start = self.cursor.position();
        let rest = self.cursor.remaining();

        let Some((rule, len)) = grammar.select(state, rest) else {
            self.no_rule_matched(state)
        };

        let category = match rule.action() {
            Action::Plain(category) | Action::Pop(category) | Action::Push(category, _) => {
                category
            }
            Action::Classified => grammar.classifier().classify(&rest[..len]),
        };

        match rule.action() {
            Action::Push(_, next) => self.stack.push(Frame {
                state: next,
                opened_at: start,
            }),
            Action::Pop(_) if self.stack.len() > 1 => {
                self.stack.pop();
            }
            _ => {}
        }

        let lexeme = self.cursor.advance(len);
        Some(Token::new(category, lexeme, start))
    }

    fn top(&self) -> Frame {
        // The root frame is never popped.
        self.stack[self.stack.len() - 1]
    }
}

impl<'s> Iterator for Lexer<'_, 's> {
    type Item = Token<'s>;

    #[inline]
    fn next(&mut self) -> Option<Token<'s>> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.cursor.remaining().len();
        (usize::from(rest > 0), Some(rest))
    }
}

impl FusedIterator for Lexer<'_, '_> {}
