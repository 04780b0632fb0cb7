//! Scanner cursor: a read position over borrowed input.
//!
//! The cursor never copies or mutates the input. It moves forward only; a
//! matcher that needs to look further ahead does so with [`Cursor::peek_at`]
//! and commits with `advance` once the token is known to be valid, so a
//! failed match leaves the cursor where the token started.
//!
//! End of input plays the role of the terminator: [`Cursor::peek`] returns
//! `None` there, and the cursor can never be moved past it.

use crate::error::{ErrorCode, ParseError};

/// The four bytes JSON treats as whitespace: space, tab, line feed, carriage
/// return.
#[inline]
#[must_use]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// A forward-only read position over a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    input: &'src [u8],
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `input`.
    #[must_use]
    pub fn new(input: &'src [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread remainder of the input.
    #[must_use]
    pub fn rest(&self) -> &'src [u8] {
        &self.input[self.pos..]
    }

    /// Returns `true` once every byte has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos == self.input.len()
    }

    /// The next unread byte, or `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    /// The byte `ahead` positions past the next unread one, or `None` if that
    /// lies at or beyond the end of input.
    #[must_use]
    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.input.get(self.pos + ahead).copied()
    }

    /// Returns `true` if a token ending `ahead` bytes from here is properly
    /// delimited: the byte there is whitespace or the end of input.
    #[must_use]
    pub fn is_boundary_at(&self, ahead: usize) -> bool {
        self.peek_at(ahead).is_none_or(is_whitespace)
    }

    /// Counts the ASCII digits starting `ahead` bytes from here.
    #[must_use]
    pub fn digits_at(&self, ahead: usize) -> usize {
        self.rest()
            .get(ahead..)
            .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
    }

    /// Skips any run of JSON whitespace. Calling it twice in a row is the same
    /// as calling it once.
    pub fn skip_whitespace(&mut self) {
        let skipped = self.rest().iter().take_while(|&&b| is_whitespace(b)).count();
        self.pos += skipped;
    }

    /// Moves past `n` bytes, stopping at the end of input.
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// An error detected at the current position.
    pub(crate) fn error(&self, code: ErrorCode) -> ParseError {
        self.error_at(code, 0)
    }

    /// An error detected `ahead` bytes past the current position.
    pub(crate) fn error_at(&self, code: ErrorCode, ahead: usize) -> ParseError {
        ParseError::at(code, self.input, self.pos + ahead)
    }
}
