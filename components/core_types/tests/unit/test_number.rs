//! Unit tests for Number

use core_types::Number;
use proptest::prelude::*;

#[cfg(test)]
mod number_arithmetic_tests {
    use super::*;

    #[test]
    fn test_number_zero_is_default() {
        assert_eq!(Number::default(), Number::ZERO);
        assert_eq!(Number::ZERO.value(), 0.0);
    }

    #[test]
    fn test_number_from_conversions() {
        assert_eq!(Number::from(3).value(), 3.0);
        assert_eq!(Number::from(-3.5).value(), -3.5);
        assert_eq!(f64::from(Number::from(8)), 8.0);
    }

    #[test]
    fn test_number_ordering() {
        assert!(Number::from(3) > Number::from(2));
        assert!(Number::from(-3) < Number::from(2));
        assert!(!(Number::new(f64::NAN) > Number::ZERO));
        assert!(!(Number::new(f64::NAN) < Number::ZERO));
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        assert_eq!(Number::new(-0.0), Number::ZERO);
        assert!(Number::new(-0.0).is_zero());
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let nan = Number::new(f64::NAN);
        assert_ne!(nan, nan);
    }
}

#[cfg(test)]
mod number_serialization_tests {
    use super::*;

    #[test]
    fn test_number_serializes_as_plain_float() {
        let json = serde_json::to_string(&Number::new(2.5)).unwrap();
        assert_eq!(json, "2.5");
    }
}

proptest! {
    /// In-range integers survive the 32-bit coercion unchanged.
    #[test]
    fn prop_int32_identity_in_range(n in any::<i32>()) {
        prop_assert_eq!(Number::from(n).to_int32(), n);
    }

    /// The coercion is periodic with period 2^32.
    #[test]
    fn prop_int32_wraps_modulo_two_pow_32(n in any::<i32>(), k in -1000i64..1000) {
        let shifted = f64::from(n) + (k as f64) * 4_294_967_296.0;
        prop_assert_eq!(Number::new(shifted).to_int32(), n);
    }

    /// Bitwise operators agree with native i32 operators.
    #[test]
    fn prop_bitwise_matches_i32(a in any::<i32>(), b in any::<i32>()) {
        let (na, nb) = (Number::from(a), Number::from(b));
        prop_assert_eq!(na & nb, Number::from(a & b));
        prop_assert_eq!(na | nb, Number::from(a | b));
        prop_assert_eq!(!na, Number::from(!a));
    }
}
