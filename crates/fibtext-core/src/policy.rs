//! One `Calculator` per overflow policy.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::calculator::{
    checked_fibonacci, fibonacci, fibonacci_big, fibonacci_i64, Calculator, FibError,
};

/// How a calculator behaves once F(n) outgrows its integer width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// 32-bit two's-complement wrapping, the historical contract.
    Wrap32,
    /// 64-bit two's-complement wrapping.
    Wrap64,
    /// 64-bit with an explicit overflow error.
    Checked,
    /// Arbitrary precision.
    Big,
}

impl OverflowPolicy {
    /// All policies, in registry order.
    pub const ALL: [Self; 4] = [Self::Wrap32, Self::Wrap64, Self::Checked, Self::Big];

    /// Registry name of this policy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Wrap32 => "wrap32",
            Self::Wrap64 => "wrap64",
            Self::Checked => "checked",
            Self::Big => "big",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OverflowPolicy {
    type Err = FibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap32" | "wrap" | "i32" => Ok(Self::Wrap32),
            "wrap64" | "i64" => Ok(Self::Wrap64),
            "checked" => Ok(Self::Checked),
            "big" | "bigint" => Ok(Self::Big),
            _ => Err(FibError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Bit-compatible 32-bit calculator.
pub struct Wrapping32;

impl Calculator for Wrapping32 {
    fn calculate(&self, n: i64) -> Result<BigInt, FibError> {
        if n <= 0 {
            return Ok(BigInt::from(0));
        }
        let n = i32::try_from(n).map_err(|_| FibError::IndexOutOfRange {
            n,
            max: i64::from(i32::MAX),
        })?;
        Ok(BigInt::from(fibonacci(n)))
    }

    fn name(&self) -> &'static str {
        "Wrapping32"
    }
}

/// 64-bit wrapping calculator.
pub struct Wrapping64;

impl Calculator for Wrapping64 {
    fn calculate(&self, n: i64) -> Result<BigInt, FibError> {
        Ok(BigInt::from(fibonacci_i64(n)))
    }

    fn name(&self) -> &'static str {
        "Wrapping64"
    }
}

/// 64-bit calculator that refuses to wrap.
pub struct Checked64;

impl Calculator for Checked64 {
    fn calculate(&self, n: i64) -> Result<BigInt, FibError> {
        checked_fibonacci(n).map(BigInt::from)
    }

    fn name(&self) -> &'static str {
        "Checked64"
    }
}

/// Arbitrary-precision calculator.
pub struct BigCalculator;

impl Calculator for BigCalculator {
    fn calculate(&self, n: i64) -> Result<BigInt, FibError> {
        Ok(BigInt::from(fibonacci_big(n)))
    }

    fn name(&self) -> &'static str {
        "BigInt"
    }
}
