//! # Measures
//!
//! A [`Measure`] is an amount expressed in a specific unit of a specific
//! quantity. The amount is stored exactly as given, in the given unit;
//! conversions always produce a new measure.
//!
//! ## Same-quantity behavior
//!
//! Measures of the same quantity type get arithmetic, equality, ordering and
//! hashing for free. Cross-unit comparisons go through the *standard amount*
//! (the amount re-expressed in the quantity's standard unit), and the unit of
//! the left operand wins for `+` and `-`.
//!
//! ```rust
//! use measure_core::Measure;
//! use measure_core::quantities::{Mass, GRAM, HECTOGRAM, KILOGRAM};
//!
//! let body = Measure::<Mass>::new(75.0, &KILOGRAM);
//! assert!(body == Measure::new(75000.0, &GRAM));
//!
//! let total = body + Measure::new(2.5, &HECTOGRAM);
//! assert_eq!(total.amount(), 75.25);
//! assert_eq!(total.in_unit(&GRAM).amount(), 75250.0);
//! ```
//!
//! ## Mixed-quantity behavior
//!
//! Operations whose operands may belong to different quantity types are
//! fallible and check dimension vectors at run time. They never report a
//! mismatch as a plain `false`: it is always `Err(QuantityMismatch)`.
//!
//! ```rust
//! use measure_core::Measure;
//! use measure_core::quantities::{Length, Mass};
//!
//! let length = Measure::<Length>::standard(1.0);
//! let mass = Measure::<Mass>::standard(1.0);
//! assert!(length.try_compare(&mass).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::amount::Amount;
use crate::dimension::DimensionVector;
use crate::errors::{MeasureError, MeasureResult};
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Type-erased view of a measure of any quantity.
///
/// Lets mixed-quantity operations accept operands whose quantity is only
/// known at run time.
pub trait AnyMeasure<T: Amount = f64> {
    /// Amount in the quantity's standard unit
    fn standard_amount(&self) -> T;

    fn dimension(&self) -> DimensionVector;

    fn quantity_name(&self) -> &'static str;
}

/// An amount of quantity `Q` in one of its units.
pub struct Measure<Q: Quantity, T: Amount = f64> {
    amount: T,
    unit: &'static Unit<Q>,
}

impl<Q: Quantity, T: Amount> Measure<Q, T> {
    pub fn new(amount: T, unit: &'static Unit<Q>) -> Self {
        Measure { amount, unit }
    }

    /// Measure expressed in the standard unit of `Q`
    pub fn standard(amount: T) -> Self {
        Measure {
            amount,
            unit: Q::standard_unit(),
        }
    }

    /// Construct from a unit symbol declared for `Q`.
    ///
    /// Fails with `InvalidUnit` when no such unit exists.
    pub fn with_symbol(amount: T, symbol: &str) -> MeasureResult<Self> {
        Ok(Measure::new(amount, Q::unit_by_symbol(symbol)?))
    }

    pub fn zero() -> Self {
        Measure::standard(T::zero())
    }

    pub fn amount(&self) -> T {
        self.amount
    }

    pub fn unit(&self) -> &'static Unit<Q> {
        self.unit
    }

    pub fn standard_amount(&self) -> T {
        self.unit.to_standard(self.amount)
    }

    /// Amount this measure would have in `unit`
    pub fn amount_in(&self, unit: &Unit<Q>) -> T {
        unit.from_standard(self.standard_amount())
    }

    /// Re-express this measure in another unit of the same quantity
    pub fn in_unit(&self, unit: &'static Unit<Q>) -> Self {
        Measure {
            amount: self.amount_in(unit),
            unit,
        }
    }

    pub fn to_standard_measure(&self) -> Self {
        self.in_unit(Q::standard_unit())
    }

    /// Re-express this measure in a unit of a possibly different quantity type.
    ///
    /// Succeeds only when both quantities share the same dimension vector.
    pub fn try_in<P: Quantity>(&self, unit: &'static Unit<P>) -> MeasureResult<Measure<P, T>> {
        ensure_same_quantity(Q::DIMENSION, Q::NAME, P::DIMENSION, P::NAME, "in")?;
        Ok(Measure {
            amount: unit.from_standard(self.standard_amount()),
            unit,
        })
    }

    /// Re-tag this measure as quantity `P` (same dimension), in `P`'s standard unit.
    pub fn try_convert<P: Quantity>(&self) -> MeasureResult<Measure<P, T>> {
        self.try_in(P::standard_unit())
    }

    /// Multiply the amount by a dimensionless scalar, keeping the unit
    pub fn scale(&self, factor: T) -> Self {
        Measure {
            amount: self.amount * factor,
            unit: self.unit,
        }
    }

    /// Compare standard amounts. `None` only when either amount is NaN.
    pub fn compare(&self, rhs: &Self) -> Option<Ordering> {
        self.standard_amount().partial_cmp(&rhs.standard_amount())
    }

    /// Add a measure of any quantity with the same dimension; the result keeps `self`'s unit.
    pub fn try_add(&self, rhs: &dyn AnyMeasure<T>) -> MeasureResult<Self> {
        let rhs_amount = self.foreign_amount(rhs, "add")?;
        Ok(Measure {
            amount: self.amount + rhs_amount,
            unit: self.unit,
        })
    }

    /// Subtract a measure of any quantity with the same dimension; the result keeps `self`'s unit.
    pub fn try_subtract(&self, rhs: &dyn AnyMeasure<T>) -> MeasureResult<Self> {
        let rhs_amount = self.foreign_amount(rhs, "subtract")?;
        Ok(Measure {
            amount: self.amount - rhs_amount,
            unit: self.unit,
        })
    }

    /// Ordering against a measure of any quantity.
    ///
    /// `Err(QuantityMismatch)` when the dimensions differ, `Ok(None)` when
    /// either standard amount is NaN.
    pub fn try_compare(&self, rhs: &dyn AnyMeasure<T>) -> MeasureResult<Option<Ordering>> {
        ensure_same_quantity(Q::DIMENSION, Q::NAME, rhs.dimension(), rhs.quantity_name(), "compare")?;
        Ok(self.standard_amount().partial_cmp(&rhs.standard_amount()))
    }

    /// Equality against a measure of any quantity; mismatched dimensions are an error, not `false`.
    pub fn try_eq(&self, rhs: &dyn AnyMeasure<T>) -> MeasureResult<bool> {
        ensure_same_quantity(Q::DIMENSION, Q::NAME, rhs.dimension(), rhs.quantity_name(), "eq")?;
        Ok(self.standard_amount() == rhs.standard_amount())
    }

    pub fn abs(&self) -> Self {
        Measure {
            amount: self.amount.abs(),
            unit: self.unit,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.amount.is_finite()
    }

    // rhs re-expressed in self's unit, after the dimension check
    fn foreign_amount(&self, rhs: &dyn AnyMeasure<T>, operation: &str) -> MeasureResult<T> {
        ensure_same_quantity(Q::DIMENSION, Q::NAME, rhs.dimension(), rhs.quantity_name(), operation)?;
        Ok(self.unit.from_standard(rhs.standard_amount()))
    }
}

fn ensure_same_quantity(
    expected: DimensionVector,
    expected_name: &str,
    actual: DimensionVector,
    actual_name: &str,
    operation: &str,
) -> MeasureResult<()> {
    if expected.equals(actual) {
        Ok(())
    } else {
        Err(MeasureError::quantity_mismatch(
            format!("{} [{}]", expected_name, expected),
            format!("{} [{}]", actual_name, actual),
            operation,
        ))
    }
}

impl<Q: Quantity, T: Amount> AnyMeasure<T> for Measure<Q, T> {
    fn standard_amount(&self) -> T {
        self.unit.to_standard(self.amount)
    }

    fn dimension(&self) -> DimensionVector {
        Q::DIMENSION
    }

    fn quantity_name(&self) -> &'static str {
        Q::NAME
    }
}

// ============================================================================
// Value semantics (manual impls: Q is a bare tag type)
// ============================================================================

impl<Q: Quantity, T: Amount> Clone for Measure<Q, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q: Quantity, T: Amount> Copy for Measure<Q, T> {}

impl<Q: Quantity, T: Amount> fmt::Debug for Measure<Q, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Measure")
            .field("quantity", &Q::NAME)
            .field("amount", &self.amount)
            .field("unit", &self.unit.symbol())
            .finish()
    }
}

impl<Q: Quantity, T: Amount> fmt::Display for Measure<Q, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.amount, f)?;
        let symbol = self.unit.symbol();
        if !symbol.is_empty() {
            write!(f, " {}", symbol)?;
        }
        Ok(())
    }
}

impl<Q: Quantity, T: Amount> PartialEq for Measure<Q, T> {
    fn eq(&self, other: &Self) -> bool {
        self.standard_amount() == other.standard_amount()
    }
}

impl<Q: Quantity, T: Amount> PartialOrd for Measure<Q, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl<Q: Quantity, T: Amount> Hash for Measure<Q, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Q::DIMENSION.hash(state);
        self.standard_amount().hash_bits().hash(state);
    }
}

// ============================================================================
// Same-quantity operators
// ============================================================================

impl<Q: Quantity, T: Amount> Add for Measure<Q, T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Measure {
            amount: self.amount + rhs.amount_in(self.unit),
            unit: self.unit,
        }
    }
}

impl<Q: Quantity, T: Amount> Sub for Measure<Q, T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Measure {
            amount: self.amount - rhs.amount_in(self.unit),
            unit: self.unit,
        }
    }
}

impl<Q: Quantity, T: Amount> Neg for Measure<Q, T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Measure {
            amount: -self.amount,
            unit: self.unit,
        }
    }
}

impl<Q: Quantity, T: Amount> Mul<T> for Measure<Q, T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<Q: Quantity, T: Amount> Div<T> for Measure<Q, T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self::Output {
        Measure {
            amount: self.amount / rhs,
            unit: self.unit,
        }
    }
}

macro_rules! impl_scalar_lhs {
    ($amount:ty) => {
        impl<Q: Quantity> Mul<Measure<Q, $amount>> for $amount {
            type Output = Measure<Q, $amount>;
            fn mul(self, rhs: Measure<Q, $amount>) -> Self::Output {
                rhs.scale(self)
            }
        }
    };
}

impl_scalar_lhs!(f64);
impl_scalar_lhs!(f32);

// ============================================================================
// Serialization: { "amount": 2.5, "unit": "hg" }
// ============================================================================

#[derive(Serialize)]
struct MeasureRef<'a, T> {
    amount: T,
    unit: &'a str,
}

#[derive(Deserialize)]
struct MeasureOwned<T> {
    amount: T,
    unit: String,
}

impl<Q: Quantity, T: Amount + Serialize> Serialize for Measure<Q, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MeasureRef {
            amount: self.amount,
            unit: self.unit.symbol(),
        }
        .serialize(serializer)
    }
}

impl<'de, Q: Quantity, T: Amount + Deserialize<'de>> Deserialize<'de> for Measure<Q, T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = MeasureOwned::<T>::deserialize(deserializer)?;
        let unit = Q::unit_by_symbol(&repr.unit).map_err(serde::de::Error::custom)?;
        Ok(Measure::new(repr.amount, unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{
        AbsorbedDose, Energy, Length, Mass, Number, Time, CENTIMETER, GRAM, GRAY, HECTOGRAM, KILOGRAM, KILOMETER,
        METER, MILLIMETER, MINUTE, PERCENT,
    };
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_accessors() {
        let m = Measure::<Length>::new(250.0, &CENTIMETER);
        assert_eq!(m.amount(), 250.0);
        assert_eq!(m.unit().symbol(), "cm");
        assert_eq!(m.standard_amount(), 2.5);
        assert_eq!(m.amount_in(&MILLIMETER), 2500.0);
    }

    #[test]
    fn test_in_unit_produces_new_measure() {
        let m = Measure::<Length>::new(1500.0, &METER);
        let km = m.in_unit(&KILOMETER);
        assert_eq!(km.amount(), 1.5);
        assert_eq!(km.unit().symbol(), "km");
        assert_eq!(m.unit().symbol(), "m");
        assert_eq!(km.to_standard_measure().amount(), 1500.0);
    }

    #[test]
    fn test_cross_unit_equality() {
        assert_eq!(Measure::<Mass>::new(75.0, &KILOGRAM), Measure::new(75000.0, &GRAM));
        assert_eq!(Measure::<Length>::new(1.0, &METER), Measure::new(100.0, &CENTIMETER));
        assert_ne!(Measure::<Length>::new(1.0, &METER), Measure::new(101.0, &CENTIMETER));
    }

    #[test]
    fn test_ordering() {
        let short = Measure::<Length>::new(90.0, &CENTIMETER);
        let long = Measure::<Length>::new(1.0, &METER);
        assert!(short < long);
        assert!(long >= short);
        assert_eq!(short.compare(&long), Some(Ordering::Less));
        assert_eq!(Measure::<Length>::standard(f64::NAN).compare(&long), None);
    }

    #[test]
    fn test_hash_follows_equality() {
        let a = Measure::<Length>::new(1.0, &METER);
        let b = Measure::<Length>::new(100.0, &CENTIMETER);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(hash_of(&Measure::<Length>::standard(0.0)), hash_of(&Measure::<Length>::standard(-0.0)));
    }

    #[test]
    fn test_left_unit_wins() {
        let sum = Measure::<Mass>::new(500.0, &GRAM) + Measure::new(1.0, &KILOGRAM);
        assert_eq!(sum.unit().symbol(), "g");
        assert_eq!(sum.amount(), 1500.0);

        let diff = Measure::<Mass>::new(1.0, &KILOGRAM) - Measure::new(2.5, &HECTOGRAM);
        assert_eq!(diff.unit().symbol(), "kg");
        assert_eq!(diff.amount(), 0.75);
    }

    #[test]
    fn test_scalar_operators() {
        let m = Measure::<Time>::new(3.0, &MINUTE);
        assert_eq!((m * 2.0).amount(), 6.0);
        assert_eq!((2.0 * m).amount(), 6.0);
        assert_eq!((m / 3.0).amount(), 1.0);
        assert_eq!((-m).amount(), -3.0);
        assert_eq!((-m).abs(), m);
        assert_eq!(m.scale(0.5).unit().symbol(), "min");
        assert_eq!(m.standard_amount(), 180.0);
    }

    #[test]
    fn test_try_ops_reject_foreign_quantity() {
        let length = Measure::<Length>::standard(1.0);
        let mass = Measure::<Mass>::standard(1.0);

        let err = length.try_compare(&mass).unwrap_err();
        assert_eq!(err.error_code(), "QUANTITY_MISMATCH");
        assert!(length.try_eq(&mass).is_err());
        assert!(length.try_add(&mass).is_err());
        assert!(length.try_subtract(&mass).is_err());
        assert!(length.try_in(&GRAM).is_err());
        assert!(length.try_convert::<Mass>().is_err());
    }

    #[test]
    fn test_try_ops_accept_same_dimension() {
        let length = Measure::<Length>::new(1.0, &METER);
        let other = Measure::<Length>::new(50.0, &CENTIMETER);

        assert_eq!(length.try_add(&other).unwrap().amount(), 1.5);
        assert_eq!(length.try_subtract(&other).unwrap().amount(), 0.5);
        assert_eq!(length.try_compare(&other).unwrap(), Some(Ordering::Greater));
        assert!(!length.try_eq(&other).unwrap());
        assert_eq!(length.try_in(&CENTIMETER).unwrap().amount(), 100.0);
    }

    #[test]
    fn test_structurally_compatible_quantities() {
        // Gy = J/kg = m²/s², and Energy is kg·m²/s², so these differ
        let dose = Measure::<AbsorbedDose>::new(2.0, &GRAY);
        assert!(dose.try_convert::<Energy>().is_err());

        let ratio = Measure::<Number>::new(50.0, &PERCENT);
        assert_eq!(ratio.standard_amount(), 0.5);
        assert_eq!(ratio.to_string(), "50 %");
        assert_eq!(Measure::<Number>::standard(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_display() {
        let m = Measure::<Mass>::new(2.5, &HECTOGRAM);
        assert_eq!(m.to_string(), "2.5 hg");
        assert_eq!(format!("{:.2}", m), "2.50 hg");
    }

    #[test]
    fn test_serialization() {
        let m = Measure::<Mass>::new(2.5, &HECTOGRAM);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"amount":2.5,"unit":"hg"}"#);

        let roundtrip: Measure<Mass> = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.unit().symbol(), "hg");
        assert_eq!(roundtrip.amount(), 2.5);

        let unknown = serde_json::from_str::<Measure<Mass>>(r#"{"amount":1.0,"unit":"lb"}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_f32_measures() {
        let m = Measure::<Mass, f32>::new(2.5, &HECTOGRAM);
        assert_eq!(m.standard_amount(), 0.25f32);
        assert_eq!((2.0f32 * m).amount(), 5.0f32);
    }

    #[test]
    fn test_with_symbol() {
        let m = Measure::<Length>::with_symbol(3.0, "km").unwrap();
        assert_eq!(m.standard_amount(), 3000.0);

        let err = Measure::<Length>::with_symbol(3.0, "kg").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_UNIT");
    }

    #[test]
    fn test_type_erased_view() {
        let flour = Measure::<Mass>::new(250.0, &GRAM);
        let trail = Measure::<Length>::new(3.0, &KILOMETER);
        let operands: [&dyn AnyMeasure; 2] = [&flour, &trail];

        assert_eq!(operands[0].quantity_name(), "Mass");
        assert_eq!(operands[0].dimension(), DimensionVector::MASS);
        assert_eq!(operands[0].standard_amount(), 0.25);
        assert_eq!(operands[1].quantity_name(), "Length");
        assert_eq!(operands[1].standard_amount(), 3000.0);
    }

    #[test]
    fn test_zero() {
        let zero = Measure::<Length>::zero();
        assert_eq!(zero.amount(), 0.0);
        assert!(zero.unit().is_standard());
        assert!(zero.is_finite());
    }
}
