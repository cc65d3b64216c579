//! # Dimension Vectors
//!
//! A physical dimension is a vector of integer exponents over the seven SI
//! base dimensions. Multiplying quantities adds exponents, dividing subtracts
//! them and raising to an integer power scales them. Two quantities are
//! dimensionally compatible iff their vectors are exactly equal.
//!
//! All operations are `const fn`, so dimension algebra can be checked at
//! compile time where both operands are known:
//!
//! ```rust
//! use measure_core::dimension::DimensionVector;
//!
//! const VELOCITY: DimensionVector = DimensionVector::LENGTH.divide(DimensionVector::TIME);
//! assert_eq!(VELOCITY.exponent_of(measure_core::dimension::BaseDimension::Time), -1);
//! assert_eq!(VELOCITY.to_string(), "L·T^-1");
//! ```

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// The seven SI base dimensions, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    ElectricCurrent,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions in vector order
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::ElectricCurrent,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this dimension in a [`DimensionVector`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Conventional dimension symbol (L, M, T, I, Θ, N, J)
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }
}

/// Exponents over the seven SI base dimensions.
///
/// Immutable value type; equality is exact component-wise equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionVector([i8; 7]);

impl DimensionVector {
    /// Dimensionless (all exponents zero)
    pub const NONE: DimensionVector = DimensionVector([0; 7]);
    pub const LENGTH: DimensionVector = DimensionVector::base(BaseDimension::Length);
    pub const MASS: DimensionVector = DimensionVector::base(BaseDimension::Mass);
    pub const TIME: DimensionVector = DimensionVector::base(BaseDimension::Time);
    pub const ELECTRIC_CURRENT: DimensionVector = DimensionVector::base(BaseDimension::ElectricCurrent);
    pub const TEMPERATURE: DimensionVector = DimensionVector::base(BaseDimension::Temperature);
    pub const AMOUNT_OF_SUBSTANCE: DimensionVector = DimensionVector::base(BaseDimension::AmountOfSubstance);
    pub const LUMINOUS_INTENSITY: DimensionVector = DimensionVector::base(BaseDimension::LuminousIntensity);

    /// Build a vector from exponents in the order
    /// length, mass, time, current, temperature, amount, luminous intensity.
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        electric_current: i8,
        temperature: i8,
        amount_of_substance: i8,
        luminous_intensity: i8,
    ) -> Self {
        DimensionVector([
            length,
            mass,
            time,
            electric_current,
            temperature,
            amount_of_substance,
            luminous_intensity,
        ])
    }

    /// Unit exponent on a single base dimension
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0i8; 7];
        exponents[dimension.index()] = 1;
        DimensionVector(exponents)
    }

    /// Build a vector from exponents in [`BaseDimension::ALL`] order
    pub const fn from_exponents(exponents: [i8; 7]) -> Self {
        DimensionVector(exponents)
    }

    pub const fn exponents(&self) -> [i8; 7] {
        self.0
    }

    pub const fn exponent_of(&self, dimension: BaseDimension) -> i8 {
        self.0[dimension.index()]
    }

    pub const fn is_dimensionless(&self) -> bool {
        self.equals(DimensionVector::NONE)
    }

    /// Component-wise sum of exponents
    ///
    /// # Panics
    ///
    /// When an exponent leaves the `i8` range. In a const context this is a
    /// compile error; use [`DimensionVector::checked_multiply`] for exponents
    /// that come from callers.
    pub const fn multiply(self, other: DimensionVector) -> DimensionVector {
        match self.checked_multiply(other) {
            Some(out) => out,
            None => panic!("dimension exponent overflow in multiply"),
        }
    }

    /// Component-wise difference of exponents
    ///
    /// # Panics
    ///
    /// When an exponent leaves the `i8` range, see [`DimensionVector::checked_divide`].
    pub const fn divide(self, other: DimensionVector) -> DimensionVector {
        match self.checked_divide(other) {
            Some(out) => out,
            None => panic!("dimension exponent overflow in divide"),
        }
    }

    /// Every exponent scaled by `n`; `power(0)` is dimensionless.
    ///
    /// # Panics
    ///
    /// When an exponent leaves the `i8` range, see [`DimensionVector::checked_power`].
    pub const fn power(self, n: i8) -> DimensionVector {
        match self.checked_power(n) {
            Some(out) => out,
            None => panic!("dimension exponent overflow in power"),
        }
    }

    /// [`DimensionVector::multiply`], or `None` if any exponent overflows `i8`
    pub const fn checked_multiply(self, other: DimensionVector) -> Option<DimensionVector> {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = match self.0[i].checked_add(other.0[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(out))
    }

    /// [`DimensionVector::divide`], or `None` if any exponent overflows `i8`
    pub const fn checked_divide(self, other: DimensionVector) -> Option<DimensionVector> {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = match self.0[i].checked_sub(other.0[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(out))
    }

    /// [`DimensionVector::power`], or `None` if any exponent overflows `i8`
    pub const fn checked_power(self, n: i8) -> Option<DimensionVector> {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            out[i] = match self.0[i].checked_mul(n) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(DimensionVector(out))
    }

    /// Exact component-wise equality, usable in const context
    pub const fn equals(self, other: DimensionVector) -> bool {
        let mut i = 0;
        while i < 7 {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Mul for DimensionVector {
    type Output = DimensionVector;
    fn mul(self, rhs: DimensionVector) -> DimensionVector {
        self.multiply(rhs)
    }
}

impl Div for DimensionVector {
    type Output = DimensionVector;
    fn div(self, rhs: DimensionVector) -> DimensionVector {
        self.divide(rhs)
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let exponent = self.exponent_of(base);
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str("·")?;
            }
            first = false;
            if exponent == 1 {
                write!(f, "{}", base.symbol())?;
            } else {
                write!(f, "{}^{}", base.symbol(), exponent)?;
            }
        }
        Ok(())
    }
}


// ============================================================================
// Property-Based Tests with Proptest
// ============================================================================
