//! Human-readable rendering of polynomials.
//!
//! Terms are written in ascending exponent order and zero coefficients are
//! skipped:
//!
//! - the constant term as `<c> `
//! - the linear term as `<c>X `
//! - higher terms as `<c>(X^<i>)`, followed by a space unless `i` is the
//!   last stored exponent
//!
//! Positive coefficients after the first emitted term get a leading `+`;
//! negative ones carry their own minus sign. A polynomial whose coefficients
//! are all zero renders as the empty string.

use std::fmt::{self, Display, Write};

use crate::polynomial::Polynomial;

/// Rendering configuration for [`Polynomial::display_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Character written in place of the `.` decimal point.
    pub decimal_separator: char,
}

impl FormatOptions {
    /// Options with a `.` decimal separator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decimal_separator: '.',
        }
    }

    /// Replaces the decimal separator.
    #[must_use]
    pub const fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A [`Display`] adapter that renders a polynomial with [`FormatOptions`].
#[derive(Clone, Copy, Debug)]
pub struct PolynomialDisplay<'a> {
    poly: &'a Polynomial,
    options: FormatOptions,
}

impl PolynomialDisplay<'_> {
    fn write_coeff(&self, f: &mut fmt::Formatter<'_>, c: f64) -> fmt::Result {
        if self.options.decimal_separator == '.' {
            return write!(f, "{c}");
        }

        for ch in c.to_string().chars() {
            if ch == '.' {
                f.write_char(self.options.decimal_separator)?;
            } else {
                f.write_char(ch)?;
            }
        }
        Ok(())
    }
}

impl Display for PolynomialDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coeffs = self.poly.coefficients();
        let last = coeffs.len() - 1;
        let mut wrote_term = false;

        for (i, &c) in coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }

            if wrote_term && c > 0.0 {
                f.write_char('+')?;
            }
            self.write_coeff(f, c)?;

            match i {
                0 => f.write_char(' ')?,
                1 => f.write_str("X ")?,
                _ => {
                    write!(f, "(X^{i})")?;
                    if i != last {
                        f.write_char(' ')?;
                    }
                }
            }
            wrote_term = true;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Returns a [`Display`] adapter using the given options.
    #[must_use]
    pub fn display_with(&self, options: &FormatOptions) -> PolynomialDisplay<'_> {
        PolynomialDisplay {
            poly: self,
            options: *options,
        }
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(&FormatOptions::default()).fmt(f)
    }
}
