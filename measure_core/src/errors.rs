//! # Error Types
//!
//! Structured error types for measure_core. Every failure the engine can
//! detect is a usage error (wrong unit, wrong quantity, wrong result
//! dimension), so errors carry enough context to locate the offending call
//! without a debugger: quantity names, unit symbols and both dimension vectors.
//!
//! Degenerate numeric results (division by a zero amount, overflow while
//! raising to a power) are NOT errors. They propagate as the infinities and
//! NaNs the floating-point amount type produces natively.
//!
//! ## Example
//!
//! ```rust
//! use measure_core::errors::{MeasureError, MeasureResult};
//! use measure_core::quantities::{Length, Time, Velocity, Mass, METER, SECOND};
//! use measure_core::{arithmetic, Measure};
//!
//! let distance = Measure::<Length>::new(10.0, &METER);
//! let duration = Measure::<Time>::new(2.0, &SECOND);
//!
//! let speed: MeasureResult<Measure<Velocity>> = arithmetic::divide(&distance, &duration);
//! assert!(speed.is_ok());
//!
//! let nonsense: MeasureResult<Measure<Mass>> = arithmetic::divide(&distance, &duration);
//! assert_eq!(nonsense.unwrap_err().error_code(), "DIMENSION_MISMATCH");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dimension::DimensionVector;

/// Result type alias for measure_core operations
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Structured error type for unit and measure operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum MeasureError {
    /// A unit is absent, undeclared, or cannot be constructed
    #[error("Invalid unit '{symbol}' for {quantity}: {reason}")]
    InvalidUnit {
        symbol: String,
        quantity: String,
        reason: String,
    },

    /// A unit or measure of another quantity was supplied where the same
    /// quantity was required
    #[error("Quantity mismatch in {operation}: expected {expected}, got {actual}")]
    QuantityMismatch {
        expected: String,
        actual: String,
        operation: String,
    },

    /// The dimension computed by an arithmetic operation differs from the
    /// declared result quantity's dimension
    #[error("Dimension mismatch for {quantity}: computed [{computed}], expected [{expected}]")]
    DimensionMismatch {
        quantity: String,
        expected: DimensionVector,
        computed: DimensionVector,
    },

    /// An arithmetic operation drove a dimension exponent outside the
    /// representable `i8` range, so no declared quantity can match it
    #[error("Dimension exponent overflow in {operation} for {quantity}, expected [{expected}]")]
    ExponentOverflow {
        quantity: String,
        expected: DimensionVector,
        operation: String,
    },
}

impl MeasureError {
    /// Create an InvalidUnit error
    pub fn invalid_unit(symbol: impl Into<String>, quantity: impl Into<String>, reason: impl Into<String>) -> Self {
        MeasureError::InvalidUnit {
            symbol: symbol.into(),
            quantity: quantity.into(),
            reason: reason.into(),
        }
    }

    /// Create a QuantityMismatch error
    pub fn quantity_mismatch(expected: impl Into<String>, actual: impl Into<String>, operation: impl Into<String>) -> Self {
        MeasureError::QuantityMismatch {
            expected: expected.into(),
            actual: actual.into(),
            operation: operation.into(),
        }
    }

    /// Create a DimensionMismatch error
    pub fn dimension_mismatch(quantity: impl Into<String>, expected: DimensionVector, computed: DimensionVector) -> Self {
        MeasureError::DimensionMismatch {
            quantity: quantity.into(),
            expected,
            computed,
        }
    }

    /// Create an ExponentOverflow error
    pub fn exponent_overflow(quantity: impl Into<String>, expected: DimensionVector, operation: impl Into<String>) -> Self {
        MeasureError::ExponentOverflow {
            quantity: quantity.into(),
            expected,
            operation: operation.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Always false: every variant is a programming error, retrying the same
    /// call can never succeed.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MeasureError::InvalidUnit { .. } => "INVALID_UNIT",
            MeasureError::QuantityMismatch { .. } => "QUANTITY_MISMATCH",
            MeasureError::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            MeasureError::ExponentOverflow { .. } => "EXPONENT_OVERFLOW",
        }
    }
}
