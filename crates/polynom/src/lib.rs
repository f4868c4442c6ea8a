//! # polynom
//!
//! Single-variable polynomials with real (`f64`) coefficients.
//!
//! This crate provides:
//! - An immutable [`Polynomial`] value type indexed by exponent
//! - Evaluation at a point
//! - Addition (overflow-checked), subtraction and multiplication
//! - Length-sensitive equality and a consistent hash projection
//! - Human-readable rendering with a configurable decimal separator
//!
//! ## Example
//!
//! ```
//! use polynom::{polynomial, FormatOptions};
//!
//! let p = polynomial![0, 1, 2, 3];
//! let q = polynomial![0, 0, 0, 0, 4, 5];
//!
//! assert_eq!(p.solve(10.0), 3210.0);
//! assert_eq!((&p * &q).to_string(), "4(X^5) +13(X^6) +22(X^7) +15(X^8)");
//!
//! let r = polynomial![0.5, 1.25];
//! let comma = FormatOptions::new().with_decimal_separator(',');
//! assert_eq!(r.display_with(&comma).to_string(), "0,5 +1,25X ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod error;
pub mod format;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use error::{PolyError, Result};
pub use format::{FormatOptions, PolynomialDisplay};
pub use polynomial::Polynomial;

/// Builds a [`Polynomial`] from a non-empty list of coefficients.
///
/// Coefficients are listed in ascending exponent order and converted with
/// `as f64`, so integer literals are accepted. Because the list can never be
/// empty this form is infallible.
///
/// ```
/// let p = polynom::polynomial![1, 0, -2.5];
/// assert_eq!(p.coefficients(), &[1.0, 0.0, -2.5]);
/// ```
#[macro_export]
macro_rules! polynomial {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::Polynomial::from_head_tail($first as f64, &[$($rest as f64),*])
    };
}
