//! # Quantities
//!
//! A quantity (length, mass, acceleration, ...) is a zero-sized tag type that
//! implements [`Quantity`]. The trait is the only thing the generic engine
//! knows about a quantity: its name, its dimension vector and its standard
//! unit. Concrete quantities are declared with the [`quantity!`](crate::quantity!)
//! macro, see [`crate::quantities`].

use serde::Serialize;

use crate::dimension::DimensionVector;
use crate::errors::{MeasureError, MeasureResult};
use crate::unit::Unit;

/// Capability implemented by one tag type per physical quantity.
pub trait Quantity: Sized + Send + Sync + 'static {
    /// Human-readable quantity name, used in error reports
    const NAME: &'static str;

    /// Exponents over the SI base dimensions
    const DIMENSION: DimensionVector;

    /// Unit whose conversion is the identity
    fn standard_unit() -> &'static Unit<Self>;

    /// Every declared unit of this quantity, standard unit first
    fn units() -> &'static [&'static Unit<Self>];

    fn dimension() -> DimensionVector {
        Self::DIMENSION
    }

    /// Find a declared unit by its exact symbol.
    fn unit_by_symbol(symbol: &str) -> MeasureResult<&'static Unit<Self>> {
        Self::units()
            .iter()
            .copied()
            .find(|unit| unit.symbol() == symbol)
            .ok_or_else(|| MeasureError::invalid_unit(symbol, Self::NAME, "no unit with this symbol is declared"))
    }

    /// True when `P` has the same dimension vector as this quantity
    fn is_compatible_with<P: Quantity>() -> bool {
        Self::DIMENSION.equals(P::DIMENSION)
    }

    fn descriptor() -> QuantityDescriptor {
        QuantityDescriptor {
            name: Self::NAME,
            dimension: Self::DIMENSION,
            standard_symbol: Self::standard_unit().symbol(),
        }
    }
}

/// Read-only snapshot of a quantity's identity, for reporting and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuantityDescriptor {
    pub name: &'static str,
    pub dimension: DimensionVector,
    pub standard_symbol: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{AbsorbedDose, Length, Mass, Velocity};

    #[test]
    fn test_descriptor() {
        let descriptor = Velocity::descriptor();
        assert_eq!(descriptor.name, "Velocity");
        assert_eq!(descriptor.standard_symbol, "m/s");
        assert_eq!(descriptor.dimension, DimensionVector::new(1, 0, -1, 0, 0, 0, 0));
    }

    #[test]
    fn test_unit_by_symbol() {
        let unit = Mass::unit_by_symbol("hg").unwrap();
        assert_eq!(unit.symbol(), "hg");
        assert!(Length::unit_by_symbol("m").unwrap().is_standard());

        let err = Length::unit_by_symbol("furlong").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_UNIT");
    }

    #[test]
    fn test_standard_unit_listed_first() {
        let units = AbsorbedDose::units();
        assert_eq!(units[0].symbol(), "Gy");
        assert!(units.len() > 1);
    }

    #[test]
    fn test_units_list_is_shared() {
        assert!(std::ptr::eq(Mass::units(), Mass::units()));
        assert!(std::ptr::eq(Mass::units()[0], Mass::standard_unit()));
    }

    #[test]
    fn test_compatibility() {
        assert!(Length::is_compatible_with::<Length>());
        assert!(!Length::is_compatible_with::<Mass>());
    }
}
