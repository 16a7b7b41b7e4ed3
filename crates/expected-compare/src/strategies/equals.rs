//! Value equality for primitives

use crate::context::ComparisonContext;
use crate::error::CompareResult;
use crate::registry::ComparisonStrategy;
use expected_core::{TypeTag, Value};

/// Compares primitive values by value
///
/// Integers and floats compare numerically across representations, so an
/// `i32` member matches a `u64` member holding the same number.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualsStrategy;

impl ComparisonStrategy for EqualsStrategy {
    fn name(&self) -> &'static str {
        "equals"
    }

    fn can_compare(&self, type_tag: &TypeTag) -> bool {
        type_tag.is_primitive()
    }

    fn compare(
        &self,
        expected: &Value<'_>,
        actual: &Value<'_>,
        _context: &mut ComparisonContext<'_>,
    ) -> CompareResult<bool> {
        Ok(primitive_eq(expected, actual))
    }
}

fn primitive_eq(a: &Value<'_>, b: &Value<'_>) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Str(x), Value::Str(y)) => x == y,
        (Value::Int(x), Value::Int(y)) => x == y,
        (Value::UInt(x), Value::UInt(y)) => x == y,
        (Value::Float(x), Value::Float(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Value::Int(i), Value::UInt(u)) | (Value::UInt(u), Value::Int(i)) => {
            u64::try_from(*i).map_or(false, |i| i == *u)
        }
        (Value::Int(i), Value::Float(f)) | (Value::Float(f), Value::Int(i)) => float_eq_int(*f, *i),
        (Value::UInt(u), Value::Float(f)) | (Value::Float(f), Value::UInt(u)) => float_eq_uint(*f, *u),
        _ => false,
    }
}

/// Exact comparison: the float must hold a whole number inside `i64` range
fn float_eq_int(f: f64, i: i64) -> bool {
    // i64::MIN as f64 is exactly -2^63, i64::MAX as f64 rounds up to 2^63
    f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 && f as i64 == i
}

/// Exact comparison: the float must hold a whole number inside `u64` range
fn float_eq_uint(f: f64, u: u64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 && f as u64 == u
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_representation() {
        assert!(primitive_eq(&Value::from("a"), &Value::from(String::from("a"))));
        assert!(!primitive_eq(&Value::from(true), &Value::from(false)));
        assert!(primitive_eq(&Value::Null, &Value::Null));
    }

    #[test]
    fn test_numeric_across_representations() {
        assert!(primitive_eq(&Value::from(3i32), &Value::from(3u64)));
        assert!(primitive_eq(&Value::from(2u8), &Value::from(2.0f64)));
        assert!(!primitive_eq(&Value::from(-1i64), &Value::from(u64::MAX)));
        assert!(!primitive_eq(&Value::from(1.5f64), &Value::from(1i32)));
    }

    #[test]
    fn test_different_primitive_types() {
        assert!(!primitive_eq(&Value::from("1"), &Value::from(1i32)));
        assert!(!primitive_eq(&Value::Null, &Value::from(0i32)));
        assert!(!primitive_eq(&Value::Float(f64::NAN), &Value::from(0i32)));
    }

    #[test]
    fn test_nan_equals_nan() {
        assert!(primitive_eq(&Value::Float(f64::NAN), &Value::Float(f64::NAN)));
        assert!(!primitive_eq(&Value::Float(f64::NAN), &Value::Float(0.0)));
    }

    #[test]
    fn test_large_integers_against_floats_are_exact() {
        let two_pow_53 = 9_007_199_254_740_992.0f64;
        assert!(!primitive_eq(&Value::Int(9_007_199_254_740_993), &Value::Float(two_pow_53)));
        assert!(primitive_eq(&Value::Int(9_007_199_254_740_992), &Value::Float(two_pow_53)));
        assert!(!primitive_eq(&Value::UInt(9_007_199_254_740_993), &Value::Float(two_pow_53)));
        assert!(primitive_eq(&Value::UInt(9_007_199_254_740_992), &Value::Float(two_pow_53)));

        // 2^63 and 2^64 are outside the integer ranges even though the casts saturate
        assert!(!primitive_eq(&Value::Int(i64::MAX), &Value::Float(9_223_372_036_854_775_808.0)));
        assert!(!primitive_eq(&Value::UInt(u64::MAX), &Value::Float(18_446_744_073_709_551_616.0)));
        assert!(primitive_eq(&Value::Int(i64::MIN), &Value::Float(-9_223_372_036_854_775_808.0)));

        assert!(!primitive_eq(&Value::Int(1), &Value::Float(f64::INFINITY)));
        assert!(!primitive_eq(&Value::UInt(0), &Value::Float(-0.5)));
    }
}
