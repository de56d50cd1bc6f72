//! Index limits and precomputed values for the fixed-width calculators.

/// Largest index whose Fibonacci number fits in an `i32`.
/// F(46) = 1836311903, F(47) = 2971215073 > `i32::MAX`.
pub const MAX_FIB_I32: i64 = 46;

/// Largest index whose Fibonacci number fits in an `i64`.
/// F(92) = 7540113804746346429, F(93) exceeds `i64::MAX`.
pub const MAX_FIB_I64: i64 = 92;

/// Precomputed Fibonacci values for n = 0..=92.
pub const FIB_TABLE_I64: [i64; 93] = {
    let mut table = [0i64; 93];
    table[1] = 1;
    let mut i = 2;
    while i < 93 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_first_values() {
        assert_eq!(FIB_TABLE_I64[0], 0);
        assert_eq!(FIB_TABLE_I64[1], 1);
        assert_eq!(FIB_TABLE_I64[2], 1);
        assert_eq!(FIB_TABLE_I64[10], 55);
        assert_eq!(FIB_TABLE_I64[20], 6765);
    }

    #[test]
    fn table_last_value() {
        assert_eq!(FIB_TABLE_I64[92], 7_540_113_804_746_346_429);
    }

    #[test]
    fn i32_limit_matches_table() {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let at_limit = FIB_TABLE_I64[MAX_FIB_I32 as usize];
        let past_limit = FIB_TABLE_I64[MAX_FIB_I32 as usize + 1];
        assert!(i32::try_from(at_limit).is_ok());
        assert!(i32::try_from(past_limit).is_err());
    }

    #[test]
    fn table_consistency() {
        for i in 2..93 {
            assert_eq!(FIB_TABLE_I64[i], FIB_TABLE_I64[i - 1] + FIB_TABLE_I64[i - 2]);
        }
    }
}
