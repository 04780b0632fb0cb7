//! Parsed scalar values.
//!
//! This module defines the [`Value`] enum produced by the parser and the
//! [`ValueKind`] tag used to inspect it without matching on the payload.

/// A JSON scalar value.
///
/// The tag and payload can never disagree: only [`Number`] carries data, and
/// a parsed number is always finite.
///
/// # Examples
///
/// ```
/// use strictjson::{Value, ValueKind};
///
/// let v = strictjson::parse("2.5").unwrap();
/// assert_eq!(v.kind(), ValueKind::Number);
/// assert_eq!(v.as_f64(), Some(2.5));
/// assert_eq!(Value::default(), Value::Null);
/// ```
///
/// [`Number`]: Value::Number
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    /// The `null` literal; also the state of a slot before or after a failed parse.
    #[default]
    Null,
    /// The `true` literal.
    True,
    /// The `false` literal.
    False,
    /// A number, converted to the nearest `f64`.
    Number(f64),
}

/// The tag of a [`Value`].
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// See [`Value::Null`].
    Null,
    /// See [`Value::True`].
    True,
    /// See [`Value::False`].
    False,
    /// See [`Value::Number`].
    Number,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl Value {
    /// Returns the tag of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::True => ValueKind::True,
            Self::False => ValueKind::False,
            Self::Number(_) => ValueKind::Number,
        }
    }

    /// Returns the numeric payload, or `None` unless the value is a
    /// [`Number`].
    ///
    /// [`Number`]: Value::Number
    ///
    /// # Examples
    ///
    /// ```
    /// use strictjson::Value;
    ///
    /// assert_eq!(Value::Number(-0.5).as_f64(), Some(-0.5));
    /// assert_eq!(Value::True.as_f64(), None);
    /// ```
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean for [`True`] and [`False`], `None` otherwise.
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}
