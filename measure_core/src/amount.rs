//! Numeric representation of measure amounts.
//!
//! Measures are generic over their amount type so callers can pick the
//! precision they need. `f64` is the default everywhere; `f32` is supported
//! for memory-bound workloads. Arithmetic follows IEEE 754 semantics, so a
//! division by zero yields an infinity or NaN rather than an error.

use std::fmt::{Debug, Display};

use num_traits::Float;

/// Floating-point amount carried by a [`Measure`](crate::Measure).
pub trait Amount: Float + Debug + Display + Send + Sync + 'static {
    /// Convert an `f64` conversion factor into this amount type.
    fn from_f64(value: f64) -> Self;

    /// Convert an integer exponent into this amount type.
    fn from_i32(value: i32) -> Self;

    /// Bit pattern used for hashing.
    ///
    /// Values that compare equal must produce the same bits, so both zeros
    /// collapse onto `+0.0`.
    fn hash_bits(self) -> u64;
}

impl Amount for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn from_i32(value: i32) -> Self {
        f64::from(value)
    }

    #[inline]
    fn hash_bits(self) -> u64 {
        if self == 0.0 {
            0.0f64.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl Amount for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn from_i32(value: i32) -> Self {
        value as f32
    }

    #[inline]
    fn hash_bits(self) -> u64 {
        if self == 0.0 {
            u64::from(0.0f32.to_bits())
        } else {
            u64::from(self.to_bits())
        }
    }
}
