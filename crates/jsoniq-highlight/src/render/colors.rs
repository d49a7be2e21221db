//! ANSI color codes for terminal output.
//!
//! Three colors plus reset, mapped onto token categories:
//! - Blue: keywords, builtins, namespaced function names
//! - Green: string and number literals
//! - Dim: comments and punctuation

use crate::lexer::Category;

/// ANSI color palette.
///
/// Uses only standard 16-color codes so it reads on light and dark themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }

    /// Escape code for `category`; empty when the category stays uncolored.
    pub fn for_category(&self, category: Category) -> &'static str {
        match category {
            Category::Keyword | Category::Builtin | Category::NamespacedFunctionName => self.blue,
            Category::StringDouble
            | Category::StringSingle
            | Category::FloatNumber
            | Category::IntegerNumber => self.green,
            Category::Comment | Category::Punctuation | Category::PredicateOpenBracket => self.dim,
            Category::Whitespace
            | Category::GlobalVariable
            | Category::Variable
            | Category::Identifier
            | Category::Operator
            | Category::Error => "",
        }
    }
}
