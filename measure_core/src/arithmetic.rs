//! # Cross-Quantity Arithmetic
//!
//! The only operations that combine measures of *different* quantities.
//! Each one computes the dimension of the result from its operands, checks
//! it against the declared result quantity `R` and, on success, returns a
//! measure in `R`'s standard unit built from the operands' standard amounts.
//!
//! ## Numeric edge cases
//!
//! Dividing by a zero standard amount or raising to a power that overflows
//! is not an error here. The result carries whatever the amount type
//! produces natively (`inf`, `-inf` or `NaN` for floating amounts); check
//! [`Measure::is_finite`] if that matters to the caller.
//!
//! A result whose dimension exponents do not fit in `i8` is a different
//! matter: no quantity can carry it, so it fails with `ExponentOverflow`.
//!
//! ## Example
//!
//! ```rust
//! use measure_core::arithmetic::{divide, power};
//! use measure_core::quantities::{Area, Length, Time, Velocity, KILOMETER, MINUTE};
//! use measure_core::Measure;
//!
//! let distance = Measure::<Length>::new(3.0, &KILOMETER);
//! let duration = Measure::<Time>::new(2.0, &MINUTE);
//! let speed = divide::<Velocity, _, _, _>(&distance, &duration).unwrap();
//! assert_eq!(speed.amount(), 25.0);
//!
//! let side = Measure::<Length>::standard(4.0);
//! let square = power::<Area, _, _>(&side, 2).unwrap();
//! assert_eq!(square.amount(), 16.0);
//! ```

use crate::amount::Amount;
use crate::dimension::DimensionVector;
use crate::errors::{MeasureError, MeasureResult};
use crate::measure::{AnyMeasure, Measure};
use crate::quantity::Quantity;

/// `a * b` as quantity `R`; requires `dim(A) + dim(B) == dim(R)`.
pub fn times<R, A, B, T>(a: &Measure<A, T>, b: &Measure<B, T>) -> MeasureResult<Measure<R, T>>
where
    R: Quantity,
    A: Quantity,
    B: Quantity,
    T: Amount,
{
    ensure_dimension::<R>(A::DIMENSION.checked_multiply(B::DIMENSION), "times")?;
    Ok(times_unchecked(a, b))
}

/// `a / b` as quantity `R`; requires `dim(A) - dim(B) == dim(R)`.
pub fn divide<R, A, B, T>(a: &Measure<A, T>, b: &Measure<B, T>) -> MeasureResult<Measure<R, T>>
where
    R: Quantity,
    A: Quantity,
    B: Quantity,
    T: Amount,
{
    ensure_dimension::<R>(A::DIMENSION.checked_divide(B::DIMENSION), "divide")?;
    Ok(divide_unchecked(a, b))
}

/// `a ^ n` as quantity `R`; requires `dim(A) * n == dim(R)`.
///
/// The amount is computed with real-valued exponentiation.
pub fn power<R, A, T>(a: &Measure<A, T>, n: i8) -> MeasureResult<Measure<R, T>>
where
    R: Quantity,
    A: Quantity,
    T: Amount,
{
    ensure_dimension::<R>(A::DIMENSION.checked_power(n), "power")?;
    Ok(Measure::standard(raise(a.standard_amount(), n)))
}

/// Product of operands each raised to its own exponent, as quantity `R`.
///
/// Generalizes [`times`] and [`power`]: the computed dimension is the sum of
/// `dim(operand) * exponent` over all factors. An empty factor list is the
/// dimensionless value one. Only the final exponents must fit in `i8`;
/// intermediate sums may exceed it.
///
/// ```rust
/// use measure_core::arithmetic::product;
/// use measure_core::quantities::{Energy, Length, Mass, Time};
/// use measure_core::Measure;
///
/// // E = m·l²·t⁻²
/// let m = Measure::<Mass>::standard(2.0);
/// let l = Measure::<Length>::standard(3.0);
/// let t = Measure::<Time>::standard(2.0);
/// let energy = product::<Energy, f64>(&[(&m, 1), (&l, 2), (&t, -2)]).unwrap();
/// assert_eq!(energy.amount(), 4.5);
/// ```
pub fn product<R, T>(factors: &[(&dyn AnyMeasure<T>, i8)]) -> MeasureResult<Measure<R, T>>
where
    R: Quantity,
    T: Amount,
{
    ensure_dimension::<R>(weighted_dimension(factors), "product")?;

    let amount = factors
        .iter()
        .fold(T::one(), |acc, (operand, exponent)| acc * raise(operand.standard_amount(), *exponent));
    Ok(Measure::standard(amount))
}

/// Multiply without the dimension check.
///
/// Only for callers that have already proven the dimensions line up, such as
/// the derived operators whose dimensions are asserted at compile time.
pub(crate) fn times_unchecked<R, A, B, T>(a: &Measure<A, T>, b: &Measure<B, T>) -> Measure<R, T>
where
    R: Quantity,
    A: Quantity,
    B: Quantity,
    T: Amount,
{
    Measure::standard(a.standard_amount() * b.standard_amount())
}

pub(crate) fn divide_unchecked<R, A, B, T>(a: &Measure<A, T>, b: &Measure<B, T>) -> Measure<R, T>
where
    R: Quantity,
    A: Quantity,
    B: Quantity,
    T: Amount,
{
    Measure::standard(a.standard_amount() / b.standard_amount())
}

#[inline]
fn raise<T: Amount>(base: T, n: i8) -> T {
    base.powf(T::from_i32(i32::from(n)))
}

// Sum of dim * exponent, accumulated wide and narrowed once at the end
fn weighted_dimension<T: Amount>(factors: &[(&dyn AnyMeasure<T>, i8)]) -> Option<DimensionVector> {
    let mut sums = [0i64; 7];
    for (operand, exponent) in factors {
        for (sum, base) in sums.iter_mut().zip(operand.dimension().exponents()) {
            *sum += i64::from(base) * i64::from(*exponent);
        }
    }

    let mut exponents = [0i8; 7];
    for (slot, sum) in exponents.iter_mut().zip(sums) {
        *slot = i8::try_from(sum).ok()?;
    }
    Some(DimensionVector::from_exponents(exponents))
}

// `None` means the computed exponents overflowed i8
fn ensure_dimension<R: Quantity>(computed: Option<DimensionVector>, operation: &str) -> MeasureResult<()> {
    match computed {
        Some(computed) if computed.equals(R::DIMENSION) => Ok(()),
        Some(computed) => Err(MeasureError::dimension_mismatch(R::NAME, R::DIMENSION, computed)),
        None => Err(MeasureError::exponent_overflow(R::NAME, R::DIMENSION, operation)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{
        Acceleration, Area, Force, Frequency, Length, Mass, Number, Time, Velocity, Volume, CENTIMETER, GRAM, HOUR,
        KILOMETER, METER,
    };
    use approx::assert_relative_eq;

    #[test]
    fn test_divide_length_by_time() {
        let distance = Measure::<Length>::standard(10.0);
        let duration = Measure::<Time>::standard(2.0);

        let speed: Measure<Velocity> = divide(&distance, &duration).unwrap();
        assert_eq!(speed, Measure::<Velocity>::standard(5.0));
        assert!(speed.unit().is_standard());
    }

    #[test]
    fn test_dimension_mismatch_reports_both_vectors() {
        let distance = Measure::<Length>::standard(10.0);
        let duration = Measure::<Time>::standard(2.0);

        let err = times::<Mass, _, _, _>(&distance, &duration).unwrap_err();
        assert_eq!(
            err,
            MeasureError::dimension_mismatch("Mass", DimensionVector::MASS, DimensionVector::new(1, 0, 1, 0, 0, 0, 0))
        );

        let err = times::<Velocity, _, _, _>(&distance, &duration).unwrap_err();
        assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
    }

    #[test]
    fn test_operands_use_standard_amounts() {
        let width = Measure::<Length>::new(50.0, &CENTIMETER);
        let depth = Measure::<Length>::new(2.0, &METER);
        let area: Measure<Area> = times(&width, &depth).unwrap();
        assert_eq!(area.amount(), 1.0);

        let distance = Measure::<Length>::new(90.0, &KILOMETER);
        let duration = Measure::<Time>::new(1.0, &HOUR);
        let speed: Measure<Velocity> = divide(&distance, &duration).unwrap();
        assert_relative_eq!(speed.amount(), 25.0);
    }

    #[test]
    fn test_power() {
        let side = Measure::<Length>::new(20.0, &CENTIMETER);
        let cube: Measure<Volume> = power(&side, 3).unwrap();
        assert_relative_eq!(cube.amount(), 0.008, epsilon = 1e-15);

        let period = Measure::<Time>::standard(0.5);
        let frequency: Measure<Frequency> = power(&period, -1).unwrap();
        assert_eq!(frequency.amount(), 2.0);

        let one: Measure<Number> = power(&period, 0).unwrap();
        assert_eq!(one.amount(), 1.0);

        assert!(power::<Area, _, _>(&side, 3).is_err());
    }

    #[test]
    fn test_product_checks_weighted_dimension() {
        let mass = Measure::<Mass>::new(500.0, &GRAM);
        let distance = Measure::<Length>::standard(4.0);
        let duration = Measure::<Time>::standard(2.0);

        let force: Measure<Force> = product(&[(&mass, 1), (&distance, 1), (&duration, -2)]).unwrap();
        assert_eq!(force.amount(), 0.5);

        let wrong = product::<Acceleration, f64>(&[(&mass, 1), (&distance, 1), (&duration, -2)]);
        assert!(wrong.is_err());

        let empty: Measure<Number> = product(&[]).unwrap();
        assert_eq!(empty.amount(), 1.0);
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let distance = Measure::<Length>::standard(1.0);
        let instant = Measure::<Time>::standard(0.0);
        let speed: Measure<Velocity> = divide(&distance, &instant).unwrap();
        assert!(speed.amount().is_infinite());
        assert!(!speed.is_finite());

        let nothing = Measure::<Length>::standard(0.0);
        let undefined: Measure<Velocity> = divide(&nothing, &instant).unwrap();
        assert!(undefined.amount().is_nan());
    }

    #[test]
    fn test_power_exponent_overflow_is_an_error() {
        let area = Measure::<Area>::standard(1.0);

        let err = power::<Length, _, _>(&area, 64).unwrap_err();
        assert_eq!(err, MeasureError::exponent_overflow("Length", Length::DIMENSION, "power"));

        // m^-256 must not wrap around to a dimensionless result
        let err = power::<Number, _, _>(&Measure::<Area>::standard(2.0), -128).unwrap_err();
        assert_eq!(err.error_code(), "EXPONENT_OVERFLOW");

        let edge: Measure<Number> = power(&Measure::<Number>::standard(2.0), -128).unwrap();
        assert!(edge.amount() > 0.0);
    }

    #[test]
    fn test_product_exponent_overflow_is_an_error() {
        let volume = Measure::<Volume>::standard(1.0);
        let err = product::<Length, f64>(&[(&volume, 50)]).unwrap_err();
        assert_eq!(err, MeasureError::exponent_overflow("Length", Length::DIMENSION, "product"));
    }

    #[test]
    fn test_product_tolerates_wide_intermediate_exponents() {
        // L^120 · L^10 · L^-127 = L^3, though the running sum passes L^130
        let volume = Measure::<Volume>::standard(1.0);
        let area = Measure::<Area>::standard(1.0);
        let length = Measure::<Length>::standard(1.0);

        let result: Measure<Volume> = product(&[(&volume, 40), (&area, 5), (&length, -127)]).unwrap();
        assert_eq!(result.amount(), 1.0);
    }
}
