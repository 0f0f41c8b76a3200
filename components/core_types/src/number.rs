//! Numeric value representation.
//!
//! The machine has a single data type: an IEEE 754 double-precision number.
//! Arithmetic follows the host floating point model (division by zero yields
//! infinities or NaN), while the bitwise operators go through a 32-bit two's
//! complement coercion.

use serde::Serialize;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, Div, Mul, Not, Rem, Sub};

/// 2^32, the modulus of the 32-bit integer coercion.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// 2^64, the first value past the `u64` index range.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// A machine number.
///
/// # Examples
///
/// ```
/// use core_types::Number;
///
/// let a = Number::from(7);
/// let b = Number::from(2);
///
/// assert_eq!(a + b, Number::from(9));
/// assert_eq!(a % b, Number::from(1));
/// assert_eq!((a / Number::ZERO).to_string(), "Infinity");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Number(f64);

impl Number {
    /// The additive identity, and the value of unwritten memory.
    pub const ZERO: Number = Number(0.0);

    /// Wrap a raw double.
    pub const fn new(value: f64) -> Self {
        Number(value)
    }

    /// The raw double.
    pub const fn value(self) -> f64 {
        self.0
    }

    /// True for both `0` and `-0`.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// True if the number is NaN.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// True if the number is finite and has no fractional part.
    pub fn is_integral(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// Interpret the number as a non-negative integer index.
    ///
    /// Returns `None` for negative, fractional, non-finite, or values that do
    /// not fit into a `u64`. Negative zero is index zero.
    pub fn to_index(self) -> Option<u64> {
        if !self.is_integral() || self.0 < 0.0 || self.0 >= TWO_POW_64 {
            return None;
        }
        Some(self.0 as u64)
    }

    /// Coerce to a 32-bit two's complement integer.
    ///
    /// Truncates toward zero, reduces modulo 2^32 and reinterprets the low
    /// 32 bits as signed. NaN and the infinities become `0`.
    ///
    /// ```
    /// use core_types::Number;
    ///
    /// assert_eq!(Number::new(3.9).to_int32(), 3);
    /// assert_eq!(Number::new(-3.9).to_int32(), -3);
    /// assert_eq!(Number::new(4_294_967_295.0).to_int32(), -1);
    /// assert_eq!(Number::new(f64::NAN).to_int32(), 0);
    /// ```
    pub fn to_int32(self) -> i32 {
        if !self.0.is_finite() {
            return 0;
        }
        let modulo = self.0.trunc().rem_euclid(TWO_POW_32);
        (modulo as u64 as u32) as i32
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number(f64::from(value))
    }
}

impl From<Number> for f64 {
    fn from(number: Number) -> Self {
        number.0
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        Number(self.0 + rhs.0)
    }
}

impl Sub for Number {
    type Output = Number;

    fn sub(self, rhs: Number) -> Number {
        Number(self.0 - rhs.0)
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Number) -> Number {
        Number(self.0 * rhs.0)
    }
}

impl Div for Number {
    type Output = Number;

    fn div(self, rhs: Number) -> Number {
        Number(self.0 / rhs.0)
    }
}

/// Truncating remainder: the sign of the result follows the dividend.
impl Rem for Number {
    type Output = Number;

    fn rem(self, rhs: Number) -> Number {
        Number(self.0 % rhs.0)
    }
}

impl Not for Number {
    type Output = Number;

    fn not(self) -> Number {
        Number::from(!self.to_int32())
    }
}

impl BitAnd for Number {
    type Output = Number;

    fn bitand(self, rhs: Number) -> Number {
        Number::from(self.to_int32() & rhs.to_int32())
    }
}

impl BitOr for Number {
    type Output = Number;

    fn bitor(self, rhs: Number) -> Number {
        Number::from(self.to_int32() | rhs.to_int32())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            write!(f, "NaN")
        } else if self.0 == f64::INFINITY {
            write!(f, "Infinity")
        } else if self.0 == f64::NEG_INFINITY {
            write!(f, "-Infinity")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
