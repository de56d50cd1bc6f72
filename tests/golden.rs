//! Golden file integration tests.
//!
//! Reads tests/testdata/*.json and checks every overflow policy and the
//! email matcher against known values.

use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use serde::Deserialize;

use fibtext_core::{
    checked_fibonacci, fibonacci, fibonacci_big, fibonacci_i64, generate, CalculatorFactory,
    DefaultFactory, FibError, OverflowPolicy, MAX_FIB_I64,
};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    n: i64,
    fib: String,
    wrap32: i32,
    wrap64: String,
}

#[derive(Deserialize)]
struct EmailCases {
    #[allow(dead_code)]
    description: String,
    extract: Vec<ExtractCase>,
    validate: Vec<ValidateCase>,
}

#[derive(Deserialize)]
struct ExtractCase {
    text: String,
    emails: Vec<String>,
}

#[derive(Deserialize)]
struct ValidateCase {
    input: String,
    valid: bool,
}

fn load<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let path = format!("{}/tests/testdata/{name}", env!("CARGO_MANIFEST_DIR"));
    let data = std::fs::read_to_string(&path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn golden() -> GoldenData {
    load("fibonacci_golden.json")
}

// ---------------------------------------------------------------------------
// Fibonacci
// ---------------------------------------------------------------------------

#[test]
fn golden_big_values() {
    for entry in golden().values {
        let expected = BigUint::from_str(&entry.fib).expect("invalid golden value");
        assert_eq!(fibonacci_big(entry.n), expected, "F({})", entry.n);
    }
}

#[test]
fn golden_wrap32_values() {
    for entry in golden().values {
        let n = i32::try_from(entry.n).expect("golden index fits i32");
        assert_eq!(fibonacci(n), entry.wrap32, "F({}) wrapped to 32 bits", entry.n);
    }
}

#[test]
fn golden_wrap64_values() {
    for entry in golden().values {
        let expected: i64 = entry.wrap64.parse().expect("invalid golden value");
        assert_eq!(fibonacci_i64(entry.n), expected, "F({}) wrapped to 64 bits", entry.n);
    }
}

#[test]
fn golden_checked_values() {
    for entry in golden().values {
        let result = checked_fibonacci(entry.n);
        if entry.n <= MAX_FIB_I64 {
            assert_eq!(result.map(|v| v.to_string()), Ok(entry.fib.clone()));
        } else {
            assert_eq!(result, Err(FibError::Overflow { n: entry.n, bits: 64 }));
        }
    }
}

#[test]
fn golden_factory_policies() {
    let factory = DefaultFactory::new();
    for entry in golden().values {
        let wrap32 = factory.get("wrap32").unwrap().calculate(entry.n).unwrap();
        assert_eq!(wrap32, BigInt::from(entry.wrap32));

        let big = factory.get("big").unwrap().calculate(entry.n).unwrap();
        assert_eq!(big.to_string(), entry.fib);
    }
}

#[test]
fn golden_sequence_matches_table() {
    let values = golden().values;
    let seq = generate(0, 1000).unwrap();
    for entry in values {
        let index = usize::try_from(entry.n).unwrap();
        assert_eq!(seq[index].1.to_string(), entry.fib, "F({})", entry.n);
    }
}

#[test]
fn every_policy_agrees_below_the_32_bit_limit() {
    for policy in OverflowPolicy::ALL {
        let calc = DefaultFactory::create(policy);
        for entry in golden().values.iter().filter(|e| e.n <= 46) {
            assert_eq!(
                calc.calculate(entry.n).unwrap().to_string(),
                entry.fib,
                "{} F({})",
                calc.name(),
                entry.n
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Email
// ---------------------------------------------------------------------------

#[test]
fn golden_email_extraction() {
    let cases: EmailCases = load("email_cases.json");
    for case in cases.extract {
        assert_eq!(fibtext_text::extract_emails(&case.text), case.emails, "{:?}", case.text);
    }
}

#[test]
fn golden_email_validation() {
    let cases: EmailCases = load("email_cases.json");
    for case in cases.validate {
        assert_eq!(
            fibtext_text::is_valid_email(&case.input),
            case.valid,
            "{:?}",
            case.input
        );
    }
}
