//! # Units
//!
//! A [`Unit`] ties a display symbol to a pair of conversions between amounts
//! in this unit and amounts in its quantity's standard unit. All supported
//! conversions are pure scale factors, stored as an exact
//! `multiplier / divisor` pair so that decimal prefixes such as centi
//! (`1 / 100`) do not pick up binary rounding error.
//!
//! Units are process-wide singletons: standard units are plain `static`
//! items, derived units are one-time initialized through `once_cell`.
//! Nothing mutates a unit after construction.
//!
//! ## Example
//!
//! ```rust
//! use measure_core::prefix::Prefix;
//! use measure_core::quantities::{Length, METER};
//! use measure_core::unit::Unit;
//!
//! let centimeter = Unit::<Length>::prefixed(Prefix::Centi, &METER);
//! assert_eq!(centimeter.symbol(), "cm");
//! assert_eq!(centimeter.to_standard(250.0), 2.5);
//! assert_eq!(centimeter.from_standard(2.5), 250.0);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::amount::Amount;
use crate::dimension::DimensionVector;
use crate::errors::{MeasureError, MeasureResult};
use crate::prefix::Prefix;
use crate::quantity::Quantity;

/// A unit of quantity `Q`.
pub struct Unit<Q> {
    symbol: Cow<'static, str>,
    multiplier: f64,
    divisor: f64,
    quantity: PhantomData<fn() -> Q>,
}

impl<Q: Quantity> Unit<Q> {
    /// The identity-conversion unit of `Q`
    pub const fn standard(symbol: &'static str) -> Self {
        Unit {
            symbol: Cow::Borrowed(symbol),
            multiplier: 1.0,
            divisor: 1.0,
            quantity: PhantomData,
        }
    }

    /// A unit worth `multiplier / divisor` standard units.
    ///
    /// Both factors must be finite and non-zero; use [`Unit::try_scaled`]
    /// when they come from outside the crate.
    pub const fn scaled(symbol: &'static str, multiplier: f64, divisor: f64) -> Self {
        Unit {
            symbol: Cow::Borrowed(symbol),
            multiplier,
            divisor,
            quantity: PhantomData,
        }
    }

    /// Checked variant of [`Unit::scaled`].
    ///
    /// The returned unit converts amounts directly. To back a
    /// [`Measure`](crate::Measure), which borrows its unit for `'static`,
    /// keep it in a one-time initialized static the way
    /// [`quantity!`](crate::quantity!) keeps derived units:
    ///
    /// ```rust
    /// use measure_core::quantities::{Length, METER};
    /// use measure_core::{Measure, Unit};
    /// use once_cell::sync::Lazy;
    ///
    /// static LEAGUE: Lazy<Unit<Length>> = Lazy::new(|| Unit::try_scaled("lea", 4828.032, 1.0).unwrap());
    ///
    /// let voyage = Measure::new(2.0, &LEAGUE);
    /// assert_eq!(voyage.in_unit(&METER).amount(), 9656.064);
    /// ```
    pub fn try_scaled(symbol: impl Into<Cow<'static, str>>, multiplier: f64, divisor: f64) -> MeasureResult<Self> {
        let symbol = symbol.into();
        if symbol.trim().is_empty() {
            return Err(MeasureError::invalid_unit(symbol, Q::NAME, "symbol must not be empty"));
        }
        for (name, factor) in [("multiplier", multiplier), ("divisor", divisor)] {
            if !factor.is_finite() || factor == 0.0 {
                return Err(MeasureError::invalid_unit(
                    symbol,
                    Q::NAME,
                    format!("{} must be finite and non-zero, got {}", name, factor),
                ));
            }
        }
        let (multiplier, divisor) = reduce(multiplier, divisor);
        Ok(Unit {
            symbol,
            multiplier,
            divisor,
            quantity: PhantomData,
        })
    }

    /// Derive a unit from `base` by applying a metric prefix.
    ///
    /// The symbol is the prefix symbol followed by the base symbol and the
    /// scale is the base scale times `10^prefix.exponent()`.
    pub fn prefixed(prefix: Prefix, base: &Unit<Q>) -> Self {
        let (prefix_multiplier, prefix_divisor) = prefix.scale();
        let (multiplier, divisor) = reduce(base.multiplier * prefix_multiplier, base.divisor * prefix_divisor);
        Unit {
            symbol: Cow::Owned(format!("{}{}", prefix.symbol(), base.symbol)),
            multiplier,
            divisor,
            quantity: PhantomData,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Standard units per one of this unit
    pub fn factor(&self) -> f64 {
        self.multiplier / self.divisor
    }

    pub fn is_standard(&self) -> bool {
        self.multiplier == self.divisor
    }

    pub fn quantity_name(&self) -> &'static str {
        Q::NAME
    }

    pub fn dimension(&self) -> DimensionVector {
        Q::DIMENSION
    }

    /// Amount in this unit -> amount in the standard unit
    #[inline]
    pub fn to_standard<T: Amount>(&self, amount: T) -> T {
        amount * T::from_f64(self.multiplier) / T::from_f64(self.divisor)
    }

    /// Amount in the standard unit -> amount in this unit
    #[inline]
    pub fn from_standard<T: Amount>(&self, standard_amount: T) -> T {
        standard_amount * T::from_f64(self.divisor) / T::from_f64(self.multiplier)
    }
}

// Drop common powers of ten so that prefixed units keep small exact factors,
// e.g. hecto applied to gram gives 1/10 rather than 100/1000.
fn reduce(multiplier: f64, divisor: f64) -> (f64, f64) {
    if multiplier >= divisor && multiplier % divisor == 0.0 {
        (multiplier / divisor, 1.0)
    } else if divisor > multiplier && divisor % multiplier == 0.0 {
        (1.0, divisor / multiplier)
    } else {
        (multiplier, divisor)
    }
}

impl<Q: Quantity> fmt::Debug for Unit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("quantity", &Q::NAME)
            .field("symbol", &self.symbol)
            .field("multiplier", &self.multiplier)
            .field("divisor", &self.divisor)
            .finish()
    }
}

impl<Q: Quantity> fmt::Display for Unit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl<Q: Quantity> Clone for Unit<Q> {
    fn clone(&self) -> Self {
        Unit {
            symbol: self.symbol.clone(),
            multiplier: self.multiplier,
            divisor: self.divisor,
            quantity: PhantomData,
        }
    }
}

impl<Q: Quantity> PartialEq for Unit<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.factor() == other.factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{Length, Mass, Time, GRAM, HECTOGRAM, KILOGRAM, METER, MILLIGRAM};
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_is_identity() {
        assert!(METER.is_standard());
        assert_eq!(METER.to_standard(12.5), 12.5);
        assert_eq!(METER.from_standard(12.5), 12.5);
    }

    #[test]
    fn test_prefixed_symbol_and_scale() {
        let kilometer = Unit::<Length>::prefixed(Prefix::Kilo, &METER);
        assert_eq!(kilometer.symbol(), "km");
        assert_eq!(kilometer.factor(), 1000.0);
        assert_eq!(kilometer.to_standard(1.5), 1500.0);
    }

    #[test]
    fn test_prefixed_on_scaled_base() {
        assert_eq!(GRAM.factor(), 0.001);
        assert_eq!(HECTOGRAM.symbol(), "hg");
        assert_eq!((HECTOGRAM.multiplier(), HECTOGRAM.divisor()), (1.0, 10.0));
        assert_eq!(HECTOGRAM.to_standard(2.5), 0.25);
        assert_eq!(MILLIGRAM.divisor(), 1.0e6);
    }

    #[test]
    fn test_kilo_of_gram_is_standard() {
        let kilo_gram = Unit::<Mass>::prefixed(Prefix::Kilo, &GRAM);
        assert_eq!(kilo_gram.symbol(), KILOGRAM.symbol());
        assert!(kilo_gram.is_standard());
    }

    #[test]
    fn test_f32_amounts() {
        assert_eq!(GRAM.to_standard(500.0f32), 0.5f32);
        assert_relative_eq!(HECTOGRAM.from_standard(1.0f32), 10.0f32);
    }

    #[test]
    fn test_try_scaled_rejects_bad_factors() {
        let err = Unit::<Time>::try_scaled("fortnight", 0.0, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_UNIT");

        assert!(Unit::<Time>::try_scaled("  ", 60.0, 1.0).is_err());
        assert!(Unit::<Time>::try_scaled("x", f64::NAN, 1.0).is_err());
        assert!(Unit::<Time>::try_scaled("x", 1.0, f64::INFINITY).is_err());

        let fortnight = Unit::<Time>::try_scaled("fn", 1_209_600.0, 1.0).unwrap();
        assert_eq!(fortnight.to_standard(1.0), 1_209_600.0);
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(HECTOGRAM.to_string(), "hg");
        assert!(format!("{:?}", METER).contains("Length"));
    }
}
