pub mod highlight;
pub mod html;
pub mod lex_common;
pub mod source_loader;
pub mod tokens;
pub mod words;

#[cfg(test)]
mod lex_common_tests;
#[cfg(test)]
mod source_loader_tests;
#[cfg(test)]
mod tokens_tests;
