//! The JSONiq (SirixDB dialect) grammar.

use std::sync::LazyLock;

use super::category::Category;
use super::invariants::ensure_builtin_grammar;
use super::rules::{Action, Grammar, GrammarError, State};

#[rustfmt::skip]
pub const KEYWORDS: &[&str] = &[
    "let", "return", "for", "in", "where", "order", "by", "ascending", "descending",
    "if", "then", "else", "switch", "case", "default",
    "some", "every", "satisfies",
    "try", "catch",
    "import", "module", "namespace", "as", "at",
    "declare", "variable", "function",
    "instance", "of", "cast", "castable", "treat",
    "typeswitch",
    "not", "and", "or",
    "eq", "ne", "lt", "le", "gt", "ge",
    "insert", "delete", "replace", "rename",
    "into", "append", "json", "value", "with",
    "position", "to",
    "group", "collation",
];

#[rustfmt::skip]
pub const BUILTINS: &[&str] = &[
    "true", "false", "null", "empty",
    "document", "node", "element", "attribute", "text", "comment",
    "object", "array", "string", "integer", "decimal", "double", "boolean",
    "item",
];

const WHITESPACE: &str = r"[ \t\n\r\f\v]+";
const ANY_CHAR: &str = r"(?s:.)";

static JSONIQ: LazyLock<Grammar> = LazyLock::new(|| ensure_builtin_grammar(build_jsoniq()));

/// The shared JSONiq grammar, compiled on first use.
pub fn jsoniq() -> &'static Grammar {
    &JSONIQ
}

fn build_jsoniq() -> Result<Grammar, GrammarError> {
    use Action::*;
    use State::*;

    Grammar::builder()
        .keywords(KEYWORDS.iter().copied())
        .builtins(BUILTINS.iter().copied())
        // Root
        .rule(Root, WHITESPACE, Plain(Category::Whitespace))
        .literal(Root, "(:", Push(Category::Comment, Comment))
        .literal(Root, "\"", Push(Category::StringDouble, DoubleQuotedString))
        .literal(Root, "'", Push(Category::StringSingle, SingleQuotedString))
        .literal(Root, "[?", Plain(Category::PredicateOpenBracket))
        .literal(Root, "$$", Plain(Category::GlobalVariable))
        .rule(Root, r"\$[a-zA-Z_][a-zA-Z0-9_]*", Plain(Category::Variable))
        // jn:open(, sdb:revision(, bit:array-values( ; must precede identifiers
        .rule_followed_by(
            Root,
            r"[a-zA-Z][a-zA-Z0-9_\-]*:[a-zA-Z][a-zA-Z0-9_\-]*",
            r"[ \t\n\r\f\v]*\(",
            Plain(Category::NamespacedFunctionName),
        )
        .rule(
            Root,
            r"[0-9]+\.[0-9]*(?:[eE][+\-]?[0-9]+)?",
            Plain(Category::FloatNumber),
        )
        .rule(Root, r"\.[0-9]+(?:[eE][+\-]?[0-9]+)?", Plain(Category::FloatNumber))
        .rule(Root, r"[0-9]+[eE][+\-]?[0-9]+", Plain(Category::FloatNumber))
        .rule(Root, r"[0-9]+", Plain(Category::IntegerNumber))
        .rule(Root, r"[a-zA-Z_][a-zA-Z0-9_\-]*", Classified)
        .literal(Root, ":=", Plain(Category::Operator))
        .literal(Root, "..", Plain(Category::Operator))
        .rule(Root, r"[.,;!?@#\[\](){}]", Plain(Category::Punctuation))
        .rule(Root, r"[:+\-*/=<>|]", Plain(Category::Operator))
        .rule(Root, ANY_CHAR, Plain(Category::Error))
        // Comment
        .rule(Comment, r"[^(:)]+", Plain(Category::Comment))
        .literal(Comment, "(:", Push(Category::Comment, Comment))
        .literal(Comment, ":)", Pop(Category::Comment))
        .rule(Comment, r"[(:)]", Plain(Category::Comment))
        .rule(Comment, ANY_CHAR, Plain(Category::Comment))
        // Strings
        .rule(DoubleQuotedString, r#"[^"]+"#, Plain(Category::StringDouble))
        .literal(DoubleQuotedString, "\"\"", Plain(Category::StringDouble))
        .literal(DoubleQuotedString, "\"", Pop(Category::StringDouble))
        .rule(DoubleQuotedString, ANY_CHAR, Plain(Category::StringDouble))
        .rule(SingleQuotedString, r"[^']+", Plain(Category::StringSingle))
        .literal(SingleQuotedString, "''", Plain(Category::StringSingle))
        .literal(SingleQuotedString, "'", Pop(Category::StringSingle))
        .rule(SingleQuotedString, ANY_CHAR, Plain(Category::StringSingle))
        .build()
}
