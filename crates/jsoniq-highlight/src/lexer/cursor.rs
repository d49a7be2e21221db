/// Byte offset into the input being lexed.
///
/// Moves forward only, and only on character boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'s> {
    source: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub fn new(source: &'s str) -> Self {
        Self { source, pos: 0 }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Suffix of the input from the current position; empty at end of input.
    #[inline]
    pub fn remaining(&self) -> &'s str {
        &self.source[self.pos..]
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos == self.source.len()
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Moves forward by `n` bytes and returns the text stepped over.
    pub fn advance(&mut self, n: usize) -> &'s str {
        self.ensure_advance(n);
        let start = self.pos;
        self.pos += n;
        &self.source[start..self.pos]
    }
}
