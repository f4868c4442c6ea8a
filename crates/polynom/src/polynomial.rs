//! The polynomial value type.
//!
//! Coefficients are stored in ascending exponent order and never normalized:
//! trailing zeros are kept, so the coefficient count is part of a
//! polynomial's identity.

use std::any::Any;
use std::hash::{Hash, Hasher};

use num_traits::{One, Zero};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{PolyError, Result};

/// Inline coefficient storage; low-degree polynomials avoid a heap allocation.
pub(crate) type Coeffs = SmallVec<[f64; 8]>;

/// A single-variable polynomial with real coefficients.
///
/// `coefficients()[i]` is the coefficient of `X^i`. Instances are immutable:
/// every arithmetic operation builds a new polynomial.
///
/// Equality is exact and length-sensitive, so `[0, 0]` and `[0, 0, 0]` are
/// different polynomials.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending exponent order. Never empty.
    coeffs: Coeffs,
}

impl Polynomial {
    /// Creates a polynomial by copying `coeffs`.
    ///
    /// Non-finite values are accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyCoefficients`] if `coeffs` is empty.
    pub fn new(coeffs: &[f64]) -> Result<Self> {
        if coeffs.is_empty() {
            debug!("rejected polynomial without coefficients");
            return Err(PolyError::EmptyCoefficients);
        }

        Ok(Self {
            coeffs: SmallVec::from_slice(coeffs),
        })
    }

    /// Builds a polynomial from its constant term and the remaining terms.
    ///
    /// Backs the [`polynomial!`](crate::polynomial!) macro.
    #[doc(hidden)]
    #[must_use]
    pub fn from_head_tail(head: f64, tail: &[f64]) -> Self {
        let mut coeffs = Coeffs::with_capacity(tail.len() + 1);
        coeffs.push(head);
        coeffs.extend_from_slice(tail);
        Self { coeffs }
    }

    /// Wraps storage produced by the arithmetic kernels.
    pub(crate) fn from_coeffs(coeffs: Coeffs) -> Self {
        debug_assert!(!coeffs.is_empty(), "polynomial storage must not be empty");
        Self { coeffs }
    }

    /// Creates the constant polynomial `c`.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::from_head_tail(c, &[])
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Always false; a polynomial has at least one coefficient.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the nominal degree, `len() - 1`.
    ///
    /// Trailing zero coefficients are counted.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns the coefficient of `X^i`, if stored.
    #[must_use]
    pub fn coefficient(&self, i: usize) -> Option<f64> {
        self.coeffs.get(i).copied()
    }

    /// Returns all coefficients in ascending exponent order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Computed as the running sum of `c_i * x^i`, so results follow plain
    /// IEEE-754 behavior: overflow yields a signed infinity and non-finite
    /// inputs propagate. The constant term is always applied in full since
    /// `x^0 == 1` for every `x`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn solve(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .enumerate()
            .fold(0.0, |acc, (i, &c)| acc + c * x.powf(i as f64))
    }

    /// Compares against an arbitrary value.
    ///
    /// Values of any other type are never equal.
    #[must_use]
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Lossy integer projection of the coefficients.
    ///
    /// `floor(min * 100 - sum * 10 + max - len * 1000)`, saturated to `i32`
    /// (NaN maps to zero). Equal polynomials always project to the same
    /// value; distinct ones may collide.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn hash_code(&self) -> i32 {
        let min = self.coeffs.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self
            .coeffs
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = self.coeffs.iter().sum();
        let len = self.coeffs.len() as f64;

        (min * 100.0 - sum * 10.0 + max - len * 1000.0).floor() as i32
    }
}

impl PartialEq<Option<&Polynomial>> for Polynomial {
    fn eq(&self, other: &Option<&Polynomial>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

impl PartialEq<Option<Polynomial>> for Polynomial {
    fn eq(&self, other: &Option<Polynomial>) -> bool {
        other.as_ref().is_some_and(|other| self == other)
    }
}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl TryFrom<&[f64]> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: &[f64]) -> Result<Self> {
        Self::new(coeffs)
    }
}

impl TryFrom<Vec<f64>> for Polynomial {
    type Error = PolyError;

    fn try_from(coeffs: Vec<f64>) -> Result<Self> {
        if coeffs.is_empty() {
            debug!("rejected polynomial without coefficients");
            return Err(PolyError::EmptyCoefficients);
        }

        Ok(Self {
            coeffs: SmallVec::from_vec(coeffs),
        })
    }
}

impl Zero for Polynomial {
    /// The constant polynomial `0` (one coefficient).
    fn zero() -> Self {
        Self::constant(0.0)
    }

    /// True when every stored coefficient is zero, whatever the length.
    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }
}

impl One for Polynomial {
    /// The constant polynomial `1` (one coefficient).
    fn one() -> Self {
        Self::constant(1.0)
    }
}
