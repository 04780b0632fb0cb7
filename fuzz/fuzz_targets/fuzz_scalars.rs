#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use strictjson::{ErrorCode, Value};

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    // Not JSON whitespace; must be rejected.
    "\u{a0}".as_bytes(),
    "\u{2028}".as_bytes(),
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// A scalar rendered the way a JSON writer would, or a near miss of one.
#[derive(Debug, Arbitrary)]
enum Scalar {
    Null,
    Bool(bool),
    Float(f64),
    Int(i64),
    Exp { mantissa: u32, exp: i16, upper: bool },
    Text(String),
}

impl Scalar {
    fn render(&self) -> String {
        match self {
            Scalar::Null => "null".to_owned(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Float(n) => format!("{n}"),
            Scalar::Int(n) => n.to_string(),
            Scalar::Exp {
                mantissa,
                exp,
                upper,
            } => format!("{mantissa}{}{exp}", if *upper { 'E' } else { 'e' }),
            Scalar::Text(s) => s.clone(),
        }
    }
}

fn append_whitespace(out: &mut Vec<u8>) {
    with_rng(|rng| {
        for _ in 0..rng.random_range(0..4) {
            out.extend_from_slice(WS_TABLE[rng.random_range(0..WS_TABLE.len())]);
        }
    });
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if !seed.is_multiple_of(4) {
        return fuzzer_mutate(data, size, max_size);
    }

    let bytes: Vec<u8> = with_rng(|rng| (0..32).map(|_| rng.random::<u8>()).collect());
    let Ok(scalar) = Scalar::arbitrary(&mut Unstructured::new(&bytes)) else {
        return fuzzer_mutate(data, size, max_size);
    };

    let mut out = Vec::new();
    append_whitespace(&mut out);
    out.extend_from_slice(scalar.render().as_bytes());
    append_whitespace(&mut out);

    let len = out.len().min(max_size);
    data[..len].copy_from_slice(&out[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// Differential check: every scalar serde_json accepts must parse to the same
/// value, and every value we accept must be accepted by serde_json.
fn check(data: &[u8]) {
    let ours = strictjson::parse_slice(data);

    match serde_json::from_slice::<serde_json::Value>(data) {
        Ok(serde_json::Value::Null) => assert_eq!(ours, Ok(Value::Null)),
        Ok(serde_json::Value::Bool(b)) => assert_eq!(ours, Ok(Value::from(b))),
        Ok(serde_json::Value::Number(n)) => {
            assert_eq!(ours.map(|v| v.as_f64()), Ok(n.as_f64()), "{data:?}");
        }
        Ok(_) => assert!(ours.is_err()),
        Err(_) => assert!(ours.is_err(), "accepted {data:?} rejected by serde_json"),
    }

    // The stream iterator agrees with the root parser on a single value.
    let mut stream = strictjson::values(data);
    match (ours, stream.next()) {
        (Ok(v), Some(Ok(w))) => assert_eq!(v, w),
        (Err(err), None) => assert_eq!(err.code(), ErrorCode::ExpectValue),
        (Err(err), Some(Ok(_))) => assert_eq!(err.code(), ErrorCode::RootNotSingular),
        (Err(a), Some(Err(b))) => assert_eq!(a, b),
        (ours, first) => panic!("root {ours:?} vs stream {first:?}"),
    }
}

fuzz_target!(|data: &[u8]| check(data));
