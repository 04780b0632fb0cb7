use super::scanner::Cursor;
use crate::{
    error::{ErrorCode, ParseError},
    value::Value,
};

/// The three keyword literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// The literal whose spelling starts with `first`, if any.
    pub(crate) fn from_first(first: u8) -> Option<Self> {
        match first {
            b'n' => Some(Self::Null),
            b't' => Some(Self::True),
            b'f' => Some(Self::False),
            _ => None,
        }
    }

    fn spelling(self) -> &'static [u8] {
        match self {
            Self::Null => b"null",
            Self::True => b"true",
            Self::False => b"false",
        }
    }

    fn value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::True,
            Self::False => Value::False,
        }
    }
}

/// Matches `literal` at the cursor.
///
/// The caller has already seen the first byte. Every following byte must
/// match the spelling exactly and the keyword must end on a token boundary,
/// so neither `nul` nor `nullx` is accepted. The cursor only moves on
/// success.
pub(crate) fn parse_literal(cursor: &mut Cursor<'_>, literal: Literal) -> Result<Value, ParseError> {
    let spelling = literal.spelling();
    debug_assert_eq!(cursor.peek(), spelling.first().copied());

    for (i, &expected) in spelling.iter().enumerate().skip(1) {
        if cursor.peek_at(i) != Some(expected) {
            return Err(cursor.error_at(ErrorCode::InvalidValue, i));
        }
    }
    if !cursor.is_boundary_at(spelling.len()) {
        return Err(cursor.error_at(ErrorCode::InvalidValue, spelling.len()));
    }

    cursor.advance(spelling.len());
    Ok(literal.value())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(b"null", Literal::Null, Value::Null)]
    #[case(b"true", Literal::True, Value::True)]
    #[case(b"false ", Literal::False, Value::False)]
    fn matches_exact_spelling(#[case] input: &[u8], #[case] literal: Literal, #[case] expected: Value) {
        let mut c = Cursor::new(input);
        assert_eq!(parse_literal(&mut c, literal), Ok(expected));
        assert_eq!(c.position(), literal.spelling().len());
    }

    #[rstest]
    #[case(b"nul", Literal::Null, 3)]
    #[case(b"nulL", Literal::Null, 3)]
    #[case(b"nullx", Literal::Null, 4)]
    #[case(b"tru", Literal::True, 3)]
    #[case(b"trUe", Literal::True, 2)]
    #[case(b"fals", Literal::False, 4)]
    #[case(b"falsey", Literal::False, 5)]
    fn rejects_and_leaves_cursor(#[case] input: &[u8], #[case] literal: Literal, #[case] at: usize) {
        let mut c = Cursor::new(input);
        let err = parse_literal(&mut c, literal).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidValue);
        assert_eq!(err.offset(), at);
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn first_byte_table() {
        assert_eq!(Literal::from_first(b'n'), Some(Literal::Null));
        assert_eq!(Literal::from_first(b't'), Some(Literal::True));
        assert_eq!(Literal::from_first(b'f'), Some(Literal::False));
        assert_eq!(Literal::from_first(b'N'), None);
        assert_eq!(Literal::from_first(b'-'), None);
    }
}
