//! Error types for polynomial construction and arithmetic.

use thiserror::Error;

/// Errors raised by fallible polynomial operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolyError {
    /// A polynomial needs at least one coefficient.
    #[error("a polynomial requires at least one coefficient")]
    EmptyCoefficients,

    /// Adding two finite coefficients left the representable range.
    #[error("arithmetic overflow adding coefficients at index {index}: {lhs} + {rhs}")]
    Overflow {
        /// Exponent of the offending term.
        index: usize,
        /// Coefficient taken from the longer operand.
        lhs: f64,
        /// Coefficient taken from the shorter operand.
        rhs: f64,
    },
}

/// Result alias used throughout the crate.
pub type Result<T, E = PolyError> = std::result::Result<T, E>;
