//! # measure_core - Dimensional Analysis and Unit Conversion Engine
//!
//! `measure_core` represents physical amounts as strongly-typed measures:
//! an amount, the unit it is expressed in, and (through the quantity type)
//! the physical dimension it carries. Mixing incompatible dimensions is
//! rejected at compile time where the types say so, and at run time with a
//! structured error everywhere else.
//!
//! ## Design Philosophy
//!
//! - **One engine**: dimension checks live in [`arithmetic`] and [`measure`];
//!   quantities are declarative table entries, not hand-written logic
//! - **Exact where possible**: unit conversions are stored as exact
//!   multiplier/divisor pairs, so `100 cm == 1 m` holds bit-for-bit
//! - **Immutable**: units are process-wide singletons initialized once,
//!   measures are `Copy` values; everything is safe to share across threads
//! - **Rich Errors**: structured, serializable error types, not strings
//!
//! ## Quick Start
//!
//! ```rust
//! use measure_core::quantities::{Length, Mass, Time, Velocity, GRAM, HECTOGRAM, METER, CENTIMETER};
//! use measure_core::{arithmetic, Measure};
//!
//! // Cross-unit equality compares standard amounts
//! assert!(Measure::<Length>::new(1.0, &METER) == Measure::new(100.0, &CENTIMETER));
//!
//! // The left operand's unit wins
//! let total = Measure::<Mass>::standard(75.0) + Measure::new(2.5, &HECTOGRAM);
//! assert_eq!(total.standard_amount(), 75.25);
//! assert_eq!(total.in_unit(&GRAM).amount(), 75250.0);
//!
//! // Cross-quantity arithmetic checks the result dimension
//! let distance = Measure::<Length>::standard(10.0);
//! let duration = Measure::<Time>::standard(2.0);
//! let speed: Measure<Velocity> = arithmetic::divide(&distance, &duration)?;
//! assert_eq!(speed.amount(), 5.0);
//! # Ok::<(), measure_core::MeasureError>(())
//! ```
//!
//! ## Modules
//!
//! - [`dimension`] - Exponent vectors over the SI base dimensions
//! - [`unit`] - Units and their conversions to the standard unit
//! - [`prefix`] - SI metric prefixes
//! - [`quantity`] - The per-quantity capability trait
//! - [`measure`] - Amounts tagged with a unit and quantity
//! - [`arithmetic`] - Dimension-checked cross-quantity operations
//! - [`quantities`] - The declared quantities, units and derived operators
//! - [`errors`] - Structured error types

pub mod amount;
pub mod arithmetic;
pub mod dimension;
pub mod errors;
pub mod measure;
pub mod prefix;
pub mod quantities;
pub mod quantity;
pub mod unit;

// Re-export commonly used types at crate root for convenience
pub use amount::Amount;
pub use dimension::{BaseDimension, DimensionVector};
pub use errors::{MeasureError, MeasureResult};
pub use measure::{AnyMeasure, Measure};
pub use prefix::Prefix;
pub use quantity::{Quantity, QuantityDescriptor};
pub use unit::Unit;

// Used by the exported `quantity!` macro
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
