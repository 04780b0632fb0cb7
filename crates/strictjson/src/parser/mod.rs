//! Single-pass recursive-descent parser for JSON scalars.
//!
//! Overview
//! - A [`Cursor`] tracks the read position over the borrowed input. Matchers
//!   look ahead from it and advance only after accepting a whole token.
//! - [`parse_value`] inspects one byte and dispatches: end of input is
//!   [`ErrorCode::ExpectValue`], `t`/`f`/`n` go to the literal matcher, and
//!   everything else goes to the number matcher.
//! - The root entry points skip whitespace around exactly one value and reject
//!   anything left over with [`ErrorCode::RootNotSingular`].
//!
//! Tokens
//! - Every token must end on a boundary: the end of input or one of the four
//!   JSON whitespace bytes. `truex` and `1x` are invalid values, while
//!   `true x` and `1 2` are well-formed values followed by extra content.
//! - End of input is the end of the slice. A NUL byte is an ordinary
//!   character.

mod literal;
mod numbers;
pub(crate) mod scanner;


use core::iter::FusedIterator;

use self::{literal::Literal, scanner::Cursor};
use crate::{
    error::{ErrorCode, ParseError},
    value::Value,
};

/// Parses `input` as exactly one scalar value, optionally surrounded by
/// whitespace.
///
/// # Errors
///
/// - [`ErrorCode::ExpectValue`] if the input is empty or only whitespace.
/// - [`ErrorCode::InvalidValue`] if the value is a malformed literal or number.
/// - [`ErrorCode::RootNotSingular`] if anything but whitespace follows the value.
/// - [`ErrorCode::NumberTooBig`] if a number overflows `f64`.
///
/// # Examples
///
/// ```
/// use strictjson::{ErrorCode, Value};
///
/// assert_eq!(strictjson::parse("\tfalse\n"), Ok(Value::False));
/// assert_eq!(
///     strictjson::parse("true x").unwrap_err().code(),
///     ErrorCode::RootNotSingular
/// );
/// ```
pub fn parse(input: &str) -> Result<Value, ParseError> {
    parse_slice(input.as_bytes())
}

/// Parses raw bytes as exactly one scalar value.
///
/// Behaves like [`parse`]; bytes that are not valid UTF-8 can never be part of
/// a value and are reported as [`ErrorCode::InvalidValue`] or
/// [`ErrorCode::RootNotSingular`] depending on where they appear.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_slice(input: &[u8]) -> Result<Value, ParseError> {
    let result = parse_root(input);

    #[cfg(feature = "tracing")]
    match &result {
        Ok(value) => tracing::trace!(len = input.len(), kind = ?value.kind(), "parsed scalar"),
        Err(err) => tracing::trace!(
            len = input.len(),
            code = ?err.code(),
            offset = err.offset(),
            "rejected scalar"
        ),
    }

    result
}

/// Parses `input` into a caller-owned slot.
///
/// The slot is reset to [`Value::Null`] first and keeps that value if parsing
/// fails, so it never holds a partially parsed result.
///
/// # Errors
///
/// See [`parse`].
///
/// # Examples
///
/// ```
/// use strictjson::Value;
///
/// let mut slot = Value::True;
/// assert!(strictjson::parse_into(&mut slot, "1e999").is_err());
/// assert_eq!(slot, Value::Null);
/// ```
pub fn parse_into(slot: &mut Value, input: &str) -> Result<(), ParseError> {
    *slot = Value::Null;
    *slot = parse(input)?;
    Ok(())
}

/// Iterates over whitespace-separated scalar values, as in newline-delimited
/// streams.
///
/// Each item is parsed with the same token rules as [`parse`]. The iterator
/// ends at end of input and yields nothing more after the first error.
///
/// # Examples
///
/// ```
/// use strictjson::Value;
///
/// let values: Result<Vec<_>, _> = strictjson::values(b"1\ntrue null").collect();
/// assert_eq!(values.unwrap(), [Value::Number(1.0), Value::True, Value::Null]);
/// ```
#[must_use]
pub fn values(input: &[u8]) -> Values<'_> {
    Values {
        cursor: Cursor::new(input),
        failed: false,
    }
}

/// Iterator returned by [`values`].
#[derive(Debug, Clone)]
pub struct Values<'src> {
    cursor: Cursor<'src>,
    failed: bool,
}

impl Values<'_> {
    /// Byte offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for Values<'_> {
    type Item = Result<Value, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.cursor.skip_whitespace();
        if self.cursor.is_at_end() {
            return None;
        }

        let result = parse_value(&mut self.cursor);
        self.failed = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Values<'_> {}

fn parse_root(input: &[u8]) -> Result<Value, ParseError> {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();
    let value = parse_value(&mut cursor)?;

    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return Err(cursor.error(ErrorCode::RootNotSingular));
    }
    Ok(value)
}

/// Dispatches on the next byte without consuming it.
pub(crate) fn parse_value(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let Some(first) = cursor.peek() else {
        return Err(cursor.error(ErrorCode::ExpectValue));
    };

    match Literal::from_first(first) {
        Some(literal) => literal::parse_literal(cursor, literal),
        None => numbers::parse_number(cursor),
    }
}
