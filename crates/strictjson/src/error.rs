use core::fmt;

use bstr::ByteSlice;
use thiserror::Error;

/// The reason a parse attempt failed.
///
/// Exactly one code is reported per failed attempt; success is expressed by
/// `Ok` on the returned `Result`.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No value was present: the input was empty or only whitespace.
    #[error("expected a value")]
    ExpectValue,
    /// Characters were present but formed neither a literal nor a number.
    #[error("invalid value")]
    InvalidValue,
    /// A value parsed, but non-whitespace characters follow it.
    #[error("root is not singular")]
    RootNotSingular,
    /// A well-formed number whose magnitude does not fit in an `f64`.
    #[error("number too big")]
    NumberTooBig,
}

/// A failed parse, with the position where it was detected.
///
/// `line` and `column` are 1-based; columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    code: ErrorCode,
    offset: usize,
    line: usize,
    column: usize,
    found: Option<char>,
}

impl ParseError {
    /// Builds an error for `code` detected at byte `offset` of `input`.
    pub(crate) fn at(code: ErrorCode, input: &[u8], offset: usize) -> Self {
        let offset = offset.min(input.len());
        let (before, after) = input.split_at(offset);

        let line_start = before.rfind_byte(b'\n').map_or(0, |i| i + 1);
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let column = 1 + before[line_start..].chars().count();
        let (found, _) = bstr::decode_utf8(after);

        Self {
            code,
            offset,
            line,
            column,
            found,
        }
    }

    /// The error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Byte offset into the input where the error was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of the error.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the error, in characters.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }

    /// The character at the error position, if there is one and it decodes.
    #[must_use]
    pub fn found(&self) -> Option<char> {
        self.found
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.code, self.line, self.column)?;
        if let Some(c) = self.found {
            write!(f, " (found {c:?})")?;
        }
        Ok(())
    }
}

impl core::error::Error for ParseError {}

impl From<ParseError> for ErrorCode {
    fn from(err: ParseError) -> Self {
        err.code
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn position_on_first_line() {
        let err = ParseError::at(ErrorCode::InvalidValue, b"tru", 3);
        assert_eq!((err.line(), err.column(), err.found()), (1, 4, None));
        assert_eq!(err.to_string(), "invalid value at 1:4");
    }

    #[test]
    fn position_after_newlines_counts_chars() {
        let err = ParseError::at(ErrorCode::RootNotSingular, "1\n\u{e9}\u{e9} x".as_bytes(), 7);
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 4);
        assert_eq!(err.found(), Some('x'));
        assert_eq!(err.to_string(), "root is not singular at 2:4 (found 'x')");
    }

    #[test]
    fn undecodable_byte_has_no_found_char() {
        let err = ParseError::at(ErrorCode::InvalidValue, b"\xff", 0);
        assert_eq!(err.found(), None);
        assert_eq!(err.column(), 1);
    }

    #[test]
    fn offset_is_clamped_to_input() {
        let err = ParseError::at(ErrorCode::ExpectValue, b"  ", 10);
        assert_eq!(err.offset(), 2);
        assert_eq!(err.column(), 3);
    }
}
