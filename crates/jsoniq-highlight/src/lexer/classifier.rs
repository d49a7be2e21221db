//! Keyword / builtin / identifier classification for identifier-shaped lexemes.

use indexmap::IndexSet;

use super::category::Category;
use super::rules::GrammarError;

/// Two disjoint, case-sensitive word sets.
///
/// Sets keep declaration order so they can be listed back as written.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    keywords: IndexSet<String>,
    builtins: IndexSet<String>,
}

impl Classifier {
    /// Builds the classifier, rejecting empty words and words present in both sets.
    ///
    /// Duplicates within one set are collapsed.
    pub fn new<K, B>(keywords: K, builtins: B) -> Result<Self, GrammarError>
    where
        K: IntoIterator,
        K::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let keywords: IndexSet<String> = keywords.into_iter().map(Into::into).collect();
        let builtins: IndexSet<String> = builtins.into_iter().map(Into::into).collect();

        if keywords.contains("") {
            return Err(GrammarError::EmptyWord("keyword"));
        }
        if builtins.contains("") {
            return Err(GrammarError::EmptyWord("builtin"));
        }
        if let Some(word) = keywords.intersection(&builtins).next() {
            return Err(GrammarError::OverlappingWord(word.clone()));
        }

        Ok(Self { keywords, builtins })
    }

    /// Exact-match lookup; no case folding, no prefixes.
    pub fn classify(&self, lexeme: &str) -> Category {
        if self.keywords.contains(lexeme) {
            Category::Keyword
        } else if self.builtins.contains(lexeme) {
            Category::Builtin
        } else {
            Category::Identifier
        }
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_builtin(&self, word: &str) -> bool {
        self.builtins.contains(word)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn builtins(&self) -> impl Iterator<Item = &str> {
        self.builtins.iter().map(String::as_str)
    }
}
