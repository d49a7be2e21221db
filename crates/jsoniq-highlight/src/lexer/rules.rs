//! Rule tables: per-state ordered rule lists plus the word classifier.
//!
//! A [`Grammar`] is pure data once built. Rule order within a state is the
//! priority order; the engine commits to the first rule that matches.

use std::fmt;

use serde::Serialize;

use super::category::Category;
use super::classifier::Classifier;
use super::engine::Lexer;
use super::pattern::Pattern;

/// Sub-grammar the lexer is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum State {
    Root,
    /// Inside `(: ... :)`; nesting depth is the number of stacked `Comment` frames.
    Comment,
    DoubleQuotedString,
    SingleQuotedString,
}

impl State {
    pub const COUNT: usize = 4;

    pub const ALL: [State; Self::COUNT] = [
        State::Root,
        State::Comment,
        State::DoubleQuotedString,
        State::SingleQuotedString,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            State::Root => "root",
            State::Comment => "comment",
            State::DoubleQuotedString => "double-quoted string",
            State::SingleQuotedString => "single-quoted string",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a rule does once its pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Emit a fixed category.
    Plain(Category),
    /// Ask the [`Classifier`] (keyword, builtin or identifier).
    Classified,
    /// Emit, then enter a new state.
    Push(Category, State),
    /// Emit, then return to the enclosing state.
    Pop(Category),
}

/// A single entry of a state's rule list.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    /// Must match right after the lexeme; never consumed.
    lookahead: Option<Pattern>,
    action: Action,
}

impl Rule {
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn lookahead(&self) -> Option<&Pattern> {
        self.lookahead.as_ref()
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Length of this rule's lexeme at the start of `rest`.
    ///
    /// Zero-width matches never count as a match.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        let len = self.pattern.match_len(rest).filter(|&n| n > 0)?;
        match &self.lookahead {
            Some(lookahead) if !lookahead.is_match(&rest[len..]) => None,
            _ => Some(len),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid pattern `{0}`: {1}")]
    InvalidPattern(String, String),

    #[error("pattern `{0}` matches the empty string")]
    EmptyMatch(String),

    #[error("{0} state has no rules")]
    NoRules(State),

    #[error("pop rule `{0}` in the root state")]
    PopInRoot(String),

    #[error("empty word in the {0} set")]
    EmptyWord(&'static str),

    #[error("`{0}` is both a keyword and a builtin")]
    OverlappingWord(String),
}

/// Compiled rule tables for every state, plus the word classifier.
///
/// Immutable and shareable across threads; each [`Lexer`] borrows it.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: [Vec<Rule>; State::COUNT],
    classifier: Classifier,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::default()
    }

    pub fn rules(&self, state: State) -> &[Rule] {
        &self.rules[state.index()]
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Starts lexing `source` in the root state.
    pub fn lex<'g, 's>(&'g self, source: &'s str) -> Lexer<'g, 's> {
        Lexer::new(self, source)
    }

    /// First rule of `state` matching at the start of `rest`, with its length.
    pub fn select(&self, state: State, rest: &str) -> Option<(&Rule, usize)> {
        self.rules(state)
            .iter()
            .find_map(|rule| rule.match_len(rest).map(|len| (rule, len)))
    }
}

#[derive(Debug)]
struct RuleSpec {
    state: State,
    pattern: String,
    literal: bool,
    lookahead: Option<String>,
    action: Action,
}

/// Collects words and rules, compiling them all in [`GrammarBuilder::build`].
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    keywords: Vec<String>,
    builtins: Vec<String>,
    specs: Vec<RuleSpec>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn builtins<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builtins.extend(words.into_iter().map(Into::into));
        self
    }

    /// Appends a regex rule to `state`'s list.
    pub fn rule(self, state: State, pattern: &str, action: Action) -> Self {
        self.push_spec(state, pattern, false, None, action)
    }

    /// Appends a rule matching `text` literally.
    pub fn literal(self, state: State, text: &str, action: Action) -> Self {
        self.push_spec(state, text, true, None, action)
    }

    /// Appends a regex rule that only applies when `lookahead` matches after it.
    pub fn rule_followed_by(
        self,
        state: State,
        pattern: &str,
        lookahead: &str,
        action: Action,
    ) -> Self {
        self.push_spec(state, pattern, false, Some(lookahead.to_string()), action)
    }

    fn push_spec(
        mut self,
        state: State,
        pattern: &str,
        literal: bool,
        lookahead: Option<String>,
        action: Action,
    ) -> Self {
        self.specs.push(RuleSpec {
            state,
            pattern: pattern.to_string(),
            literal,
            lookahead,
            action,
        });
        self
    }

    /// Compiles every pattern and validates the tables.
    ///
    /// Fails if a pattern is invalid or can match the empty string, if the root
    /// state or any push target has no rules, if the root state pops, or if the
    /// word sets are malformed.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        let classifier = Classifier::new(self.keywords, self.builtins)?;
        let mut rules: [Vec<Rule>; State::COUNT] = Default::default();

        for spec in self.specs {
            if spec.state == State::Root && matches!(spec.action, Action::Pop(_)) {
                return Err(GrammarError::PopInRoot(spec.pattern));
            }

            let pattern = if spec.literal {
                Pattern::literal(&spec.pattern)?
            } else {
                Pattern::new(&spec.pattern)?
            };
            if pattern.matches_empty() {
                return Err(GrammarError::EmptyMatch(spec.pattern));
            }

            let lookahead = spec.lookahead.as_deref().map(Pattern::new).transpose()?;

            rules[spec.state.index()].push(Rule {
                pattern,
                lookahead,
                action: spec.action,
            });
        }

        let mut required = vec![State::Root];
        for rule in rules.iter().flatten() {
            if let Action::Push(_, target) = rule.action {
                required.push(target);
            }
        }
        if let Some(&empty) = required.iter().find(|s| rules[s.index()].is_empty()) {
            return Err(GrammarError::NoRules(empty));
        }

        Ok(Grammar { rules, classifier })
    }
}
