#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, BigUint};

use fibtext_core::{fibonacci, fibonacci_big, fibonacci_i64};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Cap n for speed
    let n = i64::from(u16::from_le_bytes([data[0], data[1]]) % 5_000);

    let big = BigInt::from(fibonacci_big(n));
    let modulus32 = BigInt::from(1u64 << 32);
    let modulus64 = BigInt::from(BigUint::from(1u8) << 64u32);

    let low32 = BigInt::from(fibonacci(n as i32)) + &modulus32;
    assert_eq!(low32 % &modulus32, &big % &modulus32, "F({n}) mod 2^32");

    let low64 = BigInt::from(fibonacci_i64(n)) + &modulus64;
    assert_eq!(low64 % &modulus64, big % modulus64, "F({n}) mod 2^64");
});
