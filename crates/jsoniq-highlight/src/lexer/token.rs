use std::iter::FusedIterator;
use std::ops::Range;

use serde::Serialize;

use super::category::Category;

/// Zero-copy token: category plus the lexeme slice and its byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'s> {
    pub category: Category,
    pub lexeme: &'s str,
    pub start: usize,
    pub end: usize,
}

impl<'s> Token<'s> {
    #[inline]
    pub fn new(category: Category, lexeme: &'s str, start: usize) -> Self {
        Self {
            category,
            lexeme,
            start,
            end: start + lexeme.len(),
        }
    }

    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Merges runs of adjacent tokens that share a category.
///
/// Both tokens must be contiguous in `source`; a gap stops the merge.
#[derive(Debug, Clone)]
pub struct Coalesce<'s, I> {
    source: &'s str,
    inner: I,
    pending: Option<Token<'s>>,
}

impl<'s, I> Coalesce<'s, I>
where
    I: Iterator<Item = Token<'s>>,
{
    pub fn new(source: &'s str, inner: I) -> Self {
        Self {
            source,
            inner,
            pending: None,
        }
    }
}

impl<'s, I> Iterator for Coalesce<'s, I>
where
    I: Iterator<Item = Token<'s>>,
{
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        let mut current = self.pending.take().or_else(|| self.inner.next())?;

        for next in self.inner.by_ref() {
            if next.category == current.category && next.start == current.end {
                let lexeme = &self.source[current.start..next.end];
                current = Token::new(current.category, lexeme, current.start);
            } else {
                self.pending = Some(next);
                break;
            }
        }

        Some(current)
    }
}

impl<'s, I> FusedIterator for Coalesce<'s, I> where I: FusedIterator<Item = Token<'s>> {}
