//! A strict parser for JSON scalar values.
//!
//! The parser accepts exactly one of the literals `true`, `false`, `null`, or a
//! number following the JSON number grammar, optionally surrounded by JSON
//! whitespace. Everything else is rejected with a specific [`ErrorCode`].
//!
//! ```rust
//! use strictjson::{ErrorCode, Value, ValueKind};
//!
//! assert_eq!(strictjson::parse(" true "), Ok(Value::True));
//! assert_eq!(strictjson::parse("-1.5e2").unwrap().as_f64(), Some(-150.0));
//!
//! let err = strictjson::parse("01").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidValue);
//!
//! let mut slot = Value::default();
//! assert!(strictjson::parse_into(&mut slot, "null x").is_err());
//! assert_eq!(slot.kind(), ValueKind::Null);
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod error;
mod parser;
mod value;

pub use error::{ErrorCode, ParseError};
pub use parser::{Values, parse, parse_into, parse_slice, scanner::Cursor, values};
pub use value::{Value, ValueKind};
