//! Token categories.

use serde::Serialize;

/// Classification attached to every lexeme.
///
/// Exactly one category applies per token; the grammar resolves overlaps by
/// rule order before a token is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Category {
    Whitespace,
    Comment,
    StringDouble,
    StringSingle,
    /// `[?` opening a predicate filter.
    PredicateOpenBracket,
    /// Context item `$$`.
    GlobalVariable,
    Variable,
    /// `prefix:name` directly followed by `(`, e.g. `jn:open(`.
    NamespacedFunctionName,
    FloatNumber,
    IntegerNumber,
    Keyword,
    Builtin,
    Identifier,
    Operator,
    Punctuation,
    /// A character no root rule accepts.
    Error,
}

use Category::*;

impl Category {
    pub const ALL: [Category; 16] = [
        Whitespace,
        Comment,
        StringDouble,
        StringSingle,
        PredicateOpenBracket,
        GlobalVariable,
        Variable,
        NamespacedFunctionName,
        FloatNumber,
        IntegerNumber,
        Keyword,
        Builtin,
        Identifier,
        Operator,
        Punctuation,
        Error,
    ];

    /// Short CSS class, following the Pygments/Rouge naming used by highlight stylesheets.
    pub fn css_class(self) -> &'static str {
        match self {
            Whitespace => "w",
            Comment => "c",
            StringDouble => "s2",
            StringSingle => "s1",
            PredicateOpenBracket | Punctuation => "p",
            GlobalVariable => "vg",
            Variable => "nv",
            NamespacedFunctionName => "nf",
            FloatNumber => "mf",
            IntegerNumber => "mi",
            Keyword => "k",
            Builtin => "nb",
            Identifier => "n",
            Operator => "o",
            Error => "err",
        }
    }

    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | Comment)
    }

    #[inline]
    pub fn is_string(self) -> bool {
        matches!(self, StringDouble | StringSingle)
    }

    #[inline]
    pub fn is_number(self) -> bool {
        matches!(self, FloatNumber | IntegerNumber)
    }
}
