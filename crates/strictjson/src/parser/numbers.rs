//! Number token validation and conversion.
//!
//! The grammar is checked by an explicit forward scan before any conversion:
//!
//! ```text
//! number = ["-"] int [frac] [exp]
//! int    = "0" | digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ("e" | "E") ["+" | "-"] 1*digit
//! ```
//!
//! `str::parse::<f64>` accepts inputs this grammar forbids (`+1`, `1.`, `.5`,
//! `inf`, `NaN`), so it only ever sees a span the scan has already accepted.

use super::scanner::Cursor;
use crate::{
    error::{ErrorCode, ParseError},
    value::Value,
};

/// Parses the number token at the cursor.
///
/// On success the cursor moves past the token. On failure it stays at the
/// start of the token and no value is produced; a token whose magnitude
/// overflows `f64` is [`ErrorCode::NumberTooBig`].
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let len = scan_number(cursor)?;
    let token = &cursor.rest()[..len];

    // The scan admits ASCII only, and only spans the float parser accepts.
    let text = core::str::from_utf8(token).map_err(|_| cursor.error(ErrorCode::InvalidValue))?;
    let n: f64 = text
        .parse()
        .map_err(|_| cursor.error(ErrorCode::InvalidValue))?;

    if n.is_infinite() {
        return Err(cursor.error(ErrorCode::NumberTooBig));
    }

    cursor.advance(len);
    Ok(Value::Number(n))
}

/// Returns the byte length of the number token at the cursor, or the
/// position of the first byte that breaks the grammar.
fn scan_number(cursor: &Cursor<'_>) -> Result<usize, ParseError> {
    let invalid = |at: usize| cursor.error_at(ErrorCode::InvalidValue, at);
    let mut len = 0;

    if cursor.peek() == Some(b'-') {
        len += 1;
    }

    match cursor.peek_at(len) {
        Some(b'0') => {
            len += 1;
            if cursor.peek_at(len).is_some_and(|b| b.is_ascii_digit()) {
                return Err(invalid(len));
            }
        }
        Some(b'1'..=b'9') => len += cursor.digits_at(len),
        _ => return Err(invalid(len)),
    }

    if cursor.peek_at(len) == Some(b'.') {
        len += 1;
        let digits = cursor.digits_at(len);
        if digits == 0 {
            return Err(invalid(len));
        }
        len += digits;
    }

    if matches!(cursor.peek_at(len), Some(b'e' | b'E')) {
        len += 1;
        if matches!(cursor.peek_at(len), Some(b'+' | b'-')) {
            len += 1;
        }
        let digits = cursor.digits_at(len);
        if digits == 0 {
            return Err(invalid(len));
        }
        len += digits;
    }

    if !cursor.is_boundary_at(len) {
        return Err(invalid(len));
    }
    Ok(len)
}
