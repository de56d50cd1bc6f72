//! # fibtext-core
//!
//! Iterative Fibonacci calculator. The historical contract is [`fibonacci`]:
//! 32-bit, non-positive indices clamp to zero, overflow wraps silently.
//! Checked and arbitrary-precision variants sit beside it behind the
//! [`Calculator`] trait.

pub mod calculator;
pub mod constants;
pub mod iterator;
pub mod policy;
pub mod registry;

// Re-exports
pub use calculator::{
    checked_fibonacci, fibonacci, fibonacci_big, fibonacci_i64, Calculator, FibError,
};
pub use constants::{FIB_TABLE_I64, MAX_FIB_I32, MAX_FIB_I64};
pub use iterator::{generate, FibIterator};
pub use policy::OverflowPolicy;
pub use registry::{CalculatorFactory, DefaultFactory};
