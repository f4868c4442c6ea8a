//! Arithmetic operations for polynomials.
//!
//! Implements addition, subtraction, multiplication and negation, both as
//! named methods and through the `std::ops` traits. Results have
//! `max(len)` coefficients for addition and subtraction and
//! `len(a) + len(b) - 1` for multiplication; nothing is normalized.
//!
//! Only addition is overflow-checked. Subtraction and multiplication follow
//! plain IEEE-754 rules and may produce infinities.

use std::ops::{Add, Mul, Neg, Sub};

use tracing::{debug, trace};

use crate::error::{PolyError, Result};
use crate::polynomial::{Coeffs, Polynomial};

impl Polynomial {
    /// Adds two polynomials, rejecting coefficient overflow.
    ///
    /// The longer operand's coefficients are copied and the shorter
    /// operand's are added into the leading positions.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Overflow`] when two finite coefficients sum to
    /// an infinity. Sums involving an operand that is already non-finite are
    /// not treated as overflow.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let (longer, shorter) = if self.len() < other.len() {
            (other, self)
        } else {
            (self, other)
        };
        trace!(lhs = longer.len(), rhs = shorter.len(), "adding polynomials");

        let mut coeffs = Coeffs::from_slice(longer.coefficients());
        for (index, (slot, &rhs)) in coeffs
            .iter_mut()
            .zip(shorter.coefficients())
            .enumerate()
        {
            let lhs = *slot;
            let sum = lhs + rhs;
            if sum.is_infinite() && lhs.is_finite() && rhs.is_finite() {
                debug!(index, lhs, rhs, "coefficient addition overflowed");
                return Err(PolyError::Overflow { index, lhs, rhs });
            }
            *slot = sum;
        }

        Ok(Self::from_coeffs(coeffs))
    }

    /// Subtracts `other` from `self`.
    ///
    /// The shorter operand is subtracted from the longer one; when the
    /// subtrahend is the longer operand the whole result is negated
    /// afterwards to restore `self - other`. Neither step is
    /// overflow-checked.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let swapped = self.len() < other.len();
        let (longer, shorter) = if swapped { (other, self) } else { (self, other) };
        trace!(lhs = self.len(), rhs = other.len(), swapped, "subtracting polynomials");

        let mut coeffs = Coeffs::from_slice(longer.coefficients());
        for (slot, &c) in coeffs.iter_mut().zip(shorter.coefficients()) {
            *slot -= c;
        }

        if swapped {
            for slot in &mut coeffs {
                *slot = -*slot;
            }
        }

        Self::from_coeffs(coeffs)
    }

    /// Multiplies two polynomials by direct convolution.
    ///
    /// The result always has `self.len() + other.len() - 1` coefficients.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let a = self.coefficients();
        let b = other.coefficients();
        trace!(lhs = a.len(), rhs = b.len(), "multiplying polynomials");

        let mut coeffs: Coeffs = smallvec::smallvec![0.0; a.len() + b.len() - 1];
        for (i, &ai) in a.iter().enumerate() {
            for (j, &bj) in b.iter().enumerate() {
                coeffs[i + j] += ai * bj;
            }
        }

        Self::from_coeffs(coeffs)
    }

    /// Negates every coefficient.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_coeffs(self.coefficients().iter().map(|&c| -c).collect())
    }
}

/// Panics on coefficient overflow, like integer `+` in debug builds.
fn add_or_panic(lhs: &Polynomial, rhs: &Polynomial) -> Polynomial {
    match lhs.checked_add(rhs) {
        Ok(sum) => sum,
        Err(err) => panic!("{err}"),
    }
}

impl Add for Polynomial {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if two finite coefficients overflow; use
    /// [`Polynomial::checked_add`] to handle that case.
    fn add(self, other: Self) -> Self::Output {
        add_or_panic(&self, &other)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// # Panics
    ///
    /// Panics if two finite coefficients overflow; use
    /// [`Polynomial::checked_add`] to handle that case.
    fn add(self, other: &Polynomial) -> Self::Output {
        add_or_panic(self, other)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.subtract(&other)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, other: &Polynomial) -> Self::Output {
        self.subtract(other)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, other: Self) -> Self::Output {
        self.multiply(&other)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, other: &Polynomial) -> Self::Output {
        self.multiply(other)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
