#![expect(missing_docs)]

use core::fmt::Write;

use strictjson::{ErrorCode, Value};

fn render(inputs: &[&str]) -> String {
    let mut out = String::new();
    for input in inputs {
        match strictjson::parse(input) {
            Ok(value) => writeln!(out, "{input:?} => {value:?}").unwrap(),
            Err(err) => writeln!(out, "{input:?} => {err}").unwrap(),
        }
    }
    out
}

#[test]
fn snapshot_outcomes() {
    let inputs = [
        "",
        "   ",
        "tru",
        "nullx",
        "01",
        "1.",
        "-",
        "+1",
        "1e400",
        "true x",
        "1\n 2",
        " 1.5e2 ",
        "-0",
        "null",
    ];

    insta::assert_snapshot!(render(&inputs), @r#"
    "" => expected a value at 1:1
    "   " => expected a value at 1:4
    "tru" => invalid value at 1:4
    "nullx" => invalid value at 1:5 (found 'x')
    "01" => invalid value at 1:2 (found '1')
    "1." => invalid value at 1:3
    "-" => invalid value at 1:2
    "+1" => invalid value at 1:1 (found '+')
    "1e400" => number too big at 1:1 (found '1')
    "true x" => root is not singular at 1:6 (found 'x')
    "1\n 2" => root is not singular at 2:2 (found '2')
    " 1.5e2 " => Number(150.0)
    "-0" => Number(-0.0)
    "null" => Null
    "#);
}

#[test]
fn snapshot_values_stream() {
    let mut out = String::new();
    for item in strictjson::values(b"0 -1.25 true\nfalse null 1e999 2") {
        writeln!(out, "{item:?}").unwrap();
    }

    insta::assert_snapshot!(out, @r#"
    Ok(Number(0.0))
    Ok(Number(-1.25))
    Ok(True)
    Ok(False)
    Ok(Null)
    Err(ParseError { code: NumberTooBig, offset: 24, line: 2, column: 12, found: Some('1') })
    "#);
}

#[test]
fn error_is_a_std_error() {
    let err = strictjson::parse("[]").unwrap_err();
    assert_eq!(ErrorCode::from(err), ErrorCode::InvalidValue);

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "invalid value at 1:1 (found '[')");
}

#[test]
fn slot_contract_through_public_api() {
    let mut slot = Value::default();
    strictjson::parse_into(&mut slot, "  true ").unwrap();
    assert_eq!(slot.as_bool(), Some(true));

    let err = strictjson::parse_into(&mut slot, "true false").unwrap_err();
    assert_eq!(err.code(), ErrorCode::RootNotSingular);
    assert!(slot.is_null());
}

#[test]
fn cursor_is_usable_on_its_own() {
    let mut cursor = strictjson::Cursor::new(b" \r\n\tnull");
    cursor.skip_whitespace();
    assert_eq!(cursor.position(), 4);
    cursor.skip_whitespace();
    assert_eq!(cursor.rest(), b"null");
    assert_eq!(cursor.peek(), Some(b'n'));
}
