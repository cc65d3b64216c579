//! # Quantity Table
//!
//! Concrete quantities, their units and the cross-quantity operators that
//! make sense between them. Every quantity here is an instantiation of the
//! generic engine: the only per-quantity data is a name, a dimension vector,
//! a standard unit and a list of derived units.
//!
//! ## Declaring a quantity
//!
//! [`quantity!`](crate::quantity!) is exported, so downstream crates can add
//! quantities of their own:
//!
//! ```rust
//! use measure_core::dimension::DimensionVector;
//! use measure_core::prefix::Prefix;
//! use measure_core::unit::Unit;
//! use measure_core::{quantity, Measure, Quantity};
//!
//! quantity! {
//!     /// Kinematic viscosity, m²/s
//!     KinematicViscosity: DimensionVector::new(2, 0, -1, 0, 0, 0, 0);
//!     standard SQUARE_METER_PER_SECOND = "m²/s";
//!     STOKES = Unit::scaled("St", 1.0, 10_000.0);
//!     CENTISTOKES = Unit::prefixed(Prefix::Centi, &STOKES);
//! }
//!
//! let water = Measure::<KinematicViscosity>::new(1.0, &CENTISTOKES);
//! assert_eq!(water.standard_amount(), 1.0e-6);
//! assert_eq!(KinematicViscosity::unit_by_symbol("cSt").unwrap().symbol(), "cSt");
//! ```
//!
//! ## Derived operators
//!
//! `Length / Time -> Velocity` and friends are plain `*` and `/` operators.
//! Each pair's dimensions are asserted at compile time, so the operators are
//! infallible:
//!
//! ```rust
//! use measure_core::quantities::{Length, Time, KILOMETER, HOUR};
//! use measure_core::Measure;
//!
//! let speed = Measure::<Length>::new(90.0, &KILOMETER) / Measure::<Time>::new(1.0, &HOUR);
//! assert_eq!(speed.amount(), 25.0);
//! ```

use std::ops::{Div, Mul};

use crate::amount::Amount;
use crate::arithmetic;
use crate::dimension::DimensionVector;
use crate::measure::Measure;
use crate::prefix::Prefix;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Declare a quantity tag type, its standard unit and its derived units.
///
/// The standard unit becomes a plain `static`; every derived unit becomes a
/// one-time initialized `static` so it may be built from other units at
/// first use. The unit list behind [`Quantity::units`](crate::Quantity::units)
/// is built once as well.
#[macro_export]
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $name:ident: $dimension:expr;
        standard $standard:ident = $symbol:literal;
        $( $(#[$unit_meta:meta])* $unit:ident = $init:expr; )*
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {}

        #[doc = concat!("Standard unit of ", stringify!($name), " (`", $symbol, "`)")]
        pub static $standard: $crate::unit::Unit<$name> = $crate::unit::Unit::standard($symbol);

        $(
            $(#[$unit_meta])*
            pub static $unit: $crate::__private::Lazy<$crate::unit::Unit<$name>> =
                $crate::__private::Lazy::new(|| $init);
        )*

        impl $crate::quantity::Quantity for $name {
            const NAME: &'static str = stringify!($name);
            const DIMENSION: $crate::dimension::DimensionVector = $dimension;

            fn standard_unit() -> &'static $crate::unit::Unit<Self> {
                &$standard
            }

            fn units() -> &'static [&'static $crate::unit::Unit<Self>] {
                static UNITS: $crate::__private::Lazy<::std::vec::Vec<&'static $crate::unit::Unit<$name>>> =
                    $crate::__private::Lazy::new(|| ::std::vec![&$standard $(, &*$unit)*]);
                UNITS.as_slice()
            }
        }
    };
}

// Cross-quantity operators. The const block fails the build if a pair's
// dimensions do not compose to the declared output.
macro_rules! derived_ops {
    () => {};
    ($lhs:ident * $rhs:ident = $out:ident; $($rest:tt)*) => {
        const _: () = assert!(<$lhs as Quantity>::DIMENSION
            .multiply(<$rhs as Quantity>::DIMENSION)
            .equals(<$out as Quantity>::DIMENSION));

        impl<T: Amount> Mul<Measure<$rhs, T>> for Measure<$lhs, T> {
            type Output = Measure<$out, T>;
            fn mul(self, rhs: Measure<$rhs, T>) -> Self::Output {
                arithmetic::times_unchecked(&self, &rhs)
            }
        }

        derived_ops!($($rest)*);
    };
    ($lhs:ident / $rhs:ident = $out:ident; $($rest:tt)*) => {
        const _: () = assert!(<$lhs as Quantity>::DIMENSION
            .divide(<$rhs as Quantity>::DIMENSION)
            .equals(<$out as Quantity>::DIMENSION));

        impl<T: Amount> Div<Measure<$rhs, T>> for Measure<$lhs, T> {
            type Output = Measure<$out, T>;
            fn div(self, rhs: Measure<$rhs, T>) -> Self::Output {
                arithmetic::divide_unchecked(&self, &rhs)
            }
        }

        derived_ops!($($rest)*);
    };
}

// ============================================================================
// Dimensionless
// ============================================================================

quantity! {
    /// Pure number (ratio, count, angle in radians)
    Number: DimensionVector::NONE;
    standard ONE = "";
    PERCENT = Unit::scaled("%", 1.0, 100.0);
    PER_MILLE = Unit::scaled("‰", 1.0, 1000.0);
}

// ============================================================================
// SI Base Quantities
// ============================================================================

quantity! {
    Length: DimensionVector::LENGTH;
    standard METER = "m";
    KILOMETER = Unit::prefixed(Prefix::Kilo, &METER);
    HECTOMETER = Unit::prefixed(Prefix::Hecto, &METER);
    DECIMETER = Unit::prefixed(Prefix::Deci, &METER);
    CENTIMETER = Unit::prefixed(Prefix::Centi, &METER);
    MILLIMETER = Unit::prefixed(Prefix::Milli, &METER);
    MICROMETER = Unit::prefixed(Prefix::Micro, &METER);
    NANOMETER = Unit::prefixed(Prefix::Nano, &METER);
}

quantity! {
    /// Mass; the SI standard unit is the kilogram, so gram-based prefixes
    /// are derived from a scaled gram.
    Mass: DimensionVector::MASS;
    standard KILOGRAM = "kg";
    GRAM = Unit::scaled("g", 1.0, 1000.0);
    HECTOGRAM = Unit::prefixed(Prefix::Hecto, &GRAM);
    MILLIGRAM = Unit::prefixed(Prefix::Milli, &GRAM);
    MICROGRAM = Unit::prefixed(Prefix::Micro, &GRAM);
    TONNE = Unit::scaled("t", 1000.0, 1.0);
}

quantity! {
    Time: DimensionVector::TIME;
    standard SECOND = "s";
    MILLISECOND = Unit::prefixed(Prefix::Milli, &SECOND);
    MICROSECOND = Unit::prefixed(Prefix::Micro, &SECOND);
    NANOSECOND = Unit::prefixed(Prefix::Nano, &SECOND);
    MINUTE = Unit::scaled("min", 60.0, 1.0);
    HOUR = Unit::scaled("h", 3600.0, 1.0);
    DAY = Unit::scaled("d", 86_400.0, 1.0);
}

quantity! {
    ElectricCurrent: DimensionVector::ELECTRIC_CURRENT;
    standard AMPERE = "A";
    KILOAMPERE = Unit::prefixed(Prefix::Kilo, &AMPERE);
    MILLIAMPERE = Unit::prefixed(Prefix::Milli, &AMPERE);
    MICROAMPERE = Unit::prefixed(Prefix::Micro, &AMPERE);
}

quantity! {
    /// Thermodynamic temperature. Only scale conversions are modeled, so
    /// offset scales such as Celsius are not declared.
    Temperature: DimensionVector::TEMPERATURE;
    standard KELVIN = "K";
    MILLIKELVIN = Unit::prefixed(Prefix::Milli, &KELVIN);
}

quantity! {
    AmountOfSubstance: DimensionVector::AMOUNT_OF_SUBSTANCE;
    standard MOLE = "mol";
    KILOMOLE = Unit::prefixed(Prefix::Kilo, &MOLE);
    MILLIMOLE = Unit::prefixed(Prefix::Milli, &MOLE);
    MICROMOLE = Unit::prefixed(Prefix::Micro, &MOLE);
}

quantity! {
    LuminousIntensity: DimensionVector::LUMINOUS_INTENSITY;
    standard CANDELA = "cd";
    MILLICANDELA = Unit::prefixed(Prefix::Milli, &CANDELA);
}

// ============================================================================
// Derived Quantities
// ============================================================================

quantity! {
    Area: DimensionVector::LENGTH.power(2);
    standard SQUARE_METER = "m²";
    SQUARE_KILOMETER = Unit::scaled("km²", 1.0e6, 1.0);
    HECTARE = Unit::scaled("ha", 1.0e4, 1.0);
    SQUARE_CENTIMETER = Unit::scaled("cm²", 1.0, 1.0e4);
    SQUARE_MILLIMETER = Unit::scaled("mm²", 1.0, 1.0e6);
}

quantity! {
    Volume: DimensionVector::LENGTH.power(3);
    standard CUBIC_METER = "m³";
    LITER = Unit::scaled("L", 1.0, 1000.0);
    MILLILITER = Unit::prefixed(Prefix::Milli, &LITER);
    CUBIC_CENTIMETER = Unit::scaled("cm³", 1.0, 1.0e6);
}

quantity! {
    Velocity: DimensionVector::LENGTH.divide(DimensionVector::TIME);
    standard METER_PER_SECOND = "m/s";
    KILOMETER_PER_HOUR = Unit::scaled("km/h", 1000.0, 3600.0);
}

quantity! {
    Acceleration: DimensionVector::LENGTH.divide(DimensionVector::TIME.power(2));
    standard METER_PER_SECOND_SQUARED = "m/s²";
    /// Standard gravity, exactly 9.80665 m/s²
    STANDARD_GRAVITY = Unit::scaled("g₀", 9.80665, 1.0);
}

quantity! {
    Force: DimensionVector::new(1, 1, -2, 0, 0, 0, 0);
    standard NEWTON = "N";
    MEGANEWTON = Unit::prefixed(Prefix::Mega, &NEWTON);
    KILONEWTON = Unit::prefixed(Prefix::Kilo, &NEWTON);
    MILLINEWTON = Unit::prefixed(Prefix::Milli, &NEWTON);
}

quantity! {
    Pressure: DimensionVector::new(-1, 1, -2, 0, 0, 0, 0);
    standard PASCAL = "Pa";
    HECTOPASCAL = Unit::prefixed(Prefix::Hecto, &PASCAL);
    KILOPASCAL = Unit::prefixed(Prefix::Kilo, &PASCAL);
    MEGAPASCAL = Unit::prefixed(Prefix::Mega, &PASCAL);
    BAR = Unit::scaled("bar", 1.0e5, 1.0);
}

quantity! {
    Energy: DimensionVector::new(2, 1, -2, 0, 0, 0, 0);
    standard JOULE = "J";
    KILOJOULE = Unit::prefixed(Prefix::Kilo, &JOULE);
    MEGAJOULE = Unit::prefixed(Prefix::Mega, &JOULE);
    KILOWATT_HOUR = Unit::scaled("kWh", 3.6e6, 1.0);
}

quantity! {
    Power: DimensionVector::new(2, 1, -3, 0, 0, 0, 0);
    standard WATT = "W";
    MILLIWATT = Unit::prefixed(Prefix::Milli, &WATT);
    KILOWATT = Unit::prefixed(Prefix::Kilo, &WATT);
    MEGAWATT = Unit::prefixed(Prefix::Mega, &WATT);
}

quantity! {
    Frequency: DimensionVector::TIME.power(-1);
    standard HERTZ = "Hz";
    KILOHERTZ = Unit::prefixed(Prefix::Kilo, &HERTZ);
    MEGAHERTZ = Unit::prefixed(Prefix::Mega, &HERTZ);
    GIGAHERTZ = Unit::prefixed(Prefix::Giga, &HERTZ);
}

quantity! {
    ElectricCharge: DimensionVector::new(0, 0, 1, 1, 0, 0, 0);
    standard COULOMB = "C";
    MILLICOULOMB = Unit::prefixed(Prefix::Milli, &COULOMB);
    AMPERE_HOUR = Unit::scaled("Ah", 3600.0, 1.0);
}

quantity! {
    ElectricPotential: DimensionVector::new(2, 1, -3, -1, 0, 0, 0);
    standard VOLT = "V";
    KILOVOLT = Unit::prefixed(Prefix::Kilo, &VOLT);
    MILLIVOLT = Unit::prefixed(Prefix::Milli, &VOLT);
}

quantity! {
    /// Absorbed dose of ionizing radiation, J/kg
    AbsorbedDose: DimensionVector::new(2, 0, -2, 0, 0, 0, 0);
    standard GRAY = "Gy";
    CENTIGRAY = Unit::prefixed(Prefix::Centi, &GRAY);
    MILLIGRAY = Unit::prefixed(Prefix::Milli, &GRAY);
    MICROGRAY = Unit::prefixed(Prefix::Micro, &GRAY);
}

quantity! {
    Luminance: DimensionVector::new(-2, 0, 0, 0, 0, 0, 1);
    standard CANDELA_PER_SQUARE_METER = "cd/m²";
}

quantity! {
    Density: DimensionVector::new(-3, 1, 0, 0, 0, 0, 0);
    standard KILOGRAM_PER_CUBIC_METER = "kg/m³";
    GRAM_PER_CUBIC_CENTIMETER = Unit::scaled("g/cm³", 1000.0, 1.0);
}

derived_ops! {
    Length * Length = Area;
    Area * Length = Volume;
    Length * Area = Volume;
    Area / Length = Length;
    Volume / Area = Length;
    Volume / Length = Area;

    Length / Time = Velocity;
    Length / Velocity = Time;
    Velocity * Time = Length;
    Time * Velocity = Length;
    Velocity / Time = Acceleration;
    Acceleration * Time = Velocity;

    Mass * Acceleration = Force;
    Acceleration * Mass = Force;
    Force / Mass = Acceleration;
    Force / Acceleration = Mass;
    Force / Area = Pressure;
    Pressure * Area = Force;

    Force * Length = Energy;
    Energy / Length = Force;
    Energy / Time = Power;
    Energy / Power = Time;
    Power * Time = Energy;
    Energy / Mass = AbsorbedDose;
    AbsorbedDose * Mass = Energy;

    Number / Time = Frequency;
    Frequency * Time = Number;

    ElectricCurrent * Time = ElectricCharge;
    ElectricCharge / Time = ElectricCurrent;
    Power / ElectricCurrent = ElectricPotential;
    ElectricPotential * ElectricCurrent = Power;

    LuminousIntensity / Area = Luminance;
    Luminance * Area = LuminousIntensity;

    Mass / Volume = Density;
    Density * Volume = Mass;
    Mass / Density = Volume;
}
