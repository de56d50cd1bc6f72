//! Fibonacci entry points and the `Calculator` trait.
//!
//! Every entry point shares one domain policy: F(n) = 0 for n <= 0, F(1) = 1,
//! and F(n) = F(n-1) + F(n-2) above that. They differ only in what happens once
//! the value outgrows the result type.

use num_bigint::{BigInt, BigUint};
use num_traits::{PrimInt, WrappingAdd, Zero};

use crate::constants::{FIB_TABLE_I64, MAX_FIB_I64};

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The value does not fit the calculator's result type.
    #[error("F({n}) overflows a {bits}-bit signed integer")]
    Overflow { n: i64, bits: u32 },

    /// The index is too large for the calculator to iterate to.
    #[error("index {n} is out of range (maximum {max})")]
    IndexOutOfRange { n: i64, max: i64 },

    /// A sequence range was given with its bounds reversed.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: u64, end: u64 },

    /// No calculator is registered under this name.
    #[error("unknown overflow policy: {0}")]
    UnknownPolicy(String),
}

/// Trait implemented by each overflow policy.
pub trait Calculator: Send + Sync {
    /// Calculate F(n), widened to a `BigInt` so every policy shares a return type.
    fn calculate(&self, n: i64) -> Result<BigInt, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Compute F(n) over `i32`, wrapping silently on overflow.
///
/// Non-positive indices yield 0.
///
/// # Example
/// ```
/// assert_eq!(fibtext_core::fibonacci(10), 55);
/// assert_eq!(fibtext_core::fibonacci(-3), 0);
/// ```
#[must_use]
pub fn fibonacci(n: i32) -> i32 {
    match n {
        i32::MIN..=0 => 0,
        1 => 1,
        #[allow(clippy::cast_sign_loss)]
        _ => iterate_wrapping(n as u64),
    }
}

/// Compute F(n) over `i64`, wrapping silently on overflow.
#[must_use]
pub fn fibonacci_i64(n: i64) -> i64 {
    match n {
        i64::MIN..=0 => 0,
        1 => 1,
        #[allow(clippy::cast_sign_loss)]
        _ => iterate_wrapping(n as u64),
    }
}

/// Compute F(n) over `i64`, reporting overflow instead of wrapping.
pub fn checked_fibonacci(n: i64) -> Result<i64, FibError> {
    if n <= 0 {
        return Ok(0);
    }
    if n > MAX_FIB_I64 {
        return Err(FibError::Overflow { n, bits: 64 });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = FIB_TABLE_I64[n as usize];
    Ok(value)
}

/// Compute F(n) as an arbitrary-precision integer.
///
/// Indices up to 92 come from the precomputed table; the loop resumes from there.
#[must_use]
pub fn fibonacci_big(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::zero();
    }
    if let Ok(small) = checked_fibonacci(n) {
        return BigUint::from(small.unsigned_abs());
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut prev = BigUint::from(FIB_TABLE_I64[MAX_FIB_I64 as usize - 1].unsigned_abs());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut curr = BigUint::from(FIB_TABLE_I64[MAX_FIB_I64 as usize].unsigned_abs());
    for _ in MAX_FIB_I64 + 1..=n {
        let next = &prev + &curr;
        prev = std::mem::replace(&mut curr, next);
    }
    curr
}

/// Two-accumulator loop for `steps >= 2`.
fn iterate_wrapping<T: PrimInt + WrappingAdd>(steps: u64) -> T {
    let mut prev = T::zero();
    let mut curr = T::one();
    for _ in 2..=steps {
        let next = prev.wrapping_add(&curr);
        prev = curr;
        curr = next;
    }
    curr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_input() {
        assert_eq!(fibonacci(0), 0);
    }

    #[test]
    fn one_input() {
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn small_inputs() {
        assert_eq!(fibonacci(2), 1);
        assert_eq!(fibonacci(3), 2);
        assert_eq!(fibonacci(4), 3);
        assert_eq!(fibonacci(5), 5);
        assert_eq!(fibonacci(6), 8);
        assert_eq!(fibonacci(7), 13);
    }

    #[test]
    fn larger_inputs() {
        assert_eq!(fibonacci(10), 55);
        assert_eq!(fibonacci(15), 610);
        assert_eq!(fibonacci(20), 6765);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        assert_eq!(fibonacci(-1), 0);
        assert_eq!(fibonacci(-5), 0);
        assert_eq!(fibonacci(i32::MIN), 0);
        assert_eq!(fibonacci_i64(i64::MIN), 0);
        assert_eq!(checked_fibonacci(-7), Ok(0));
        assert_eq!(fibonacci_big(-7), BigUint::zero());
    }

    #[test]
    fn i32_boundary() {
        assert_eq!(fibonacci(46), 1_836_311_903);
        // F(47) = 2971215073 wraps past i32::MAX.
        assert_eq!(fibonacci(47), -1_323_752_223);
        assert!(fibonacci(47) < 0);
    }

    #[test]
    fn i64_wraps_after_92() {
        assert_eq!(fibonacci_i64(92), 7_540_113_804_746_346_429);
        assert!(fibonacci_i64(93) < 0);
    }

    #[test]
    fn checked_reports_overflow() {
        assert_eq!(checked_fibonacci(92), Ok(7_540_113_804_746_346_429));
        assert_eq!(
            checked_fibonacci(93),
            Err(FibError::Overflow { n: 93, bits: 64 })
        );
    }

    #[test]
    fn big_continues_past_table() {
        assert_eq!(
            fibonacci_big(93).to_string(),
            "12200160415121876738"
        );
        assert_eq!(
            fibonacci_big(100).to_string(),
            "354224848179261915075"
        );
    }

    #[test]
    fn fib_error_display() {
        let err = FibError::Overflow { n: 93, bits: 64 };
        assert_eq!(err.to_string(), "F(93) overflows a 64-bit signed integer");

        let err = FibError::UnknownPolicy("saturate".into());
        assert_eq!(err.to_string(), "unknown overflow policy: saturate");
    }
}
