//! Textual rendering of polynomials.
//!
//! Three layouts are available:
//! - [`DisplayMode::All`]: ascending powers, zero terms included,
//!   each term written as `(c * (x - a)^i)`
//! - [`DisplayMode::Reduced`]: as `All`, without zero terms
//! - [`DisplayMode::Simple`]: descending powers in conventional notation,
//!   e.g. `2x^2 + 11x + 15`
//!
//! The [`fmt::Display`] impl of [`Polynomial`] uses the simple layout.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::PolyError;
use crate::polynomial::Polynomial;

/// Layout used when rendering a polynomial.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    /// Every term in ascending order, including zero coefficients.
    #[default]
    All,
    /// Nonzero terms in ascending order.
    Reduced,
    /// Nonzero terms in descending order, conventional notation.
    Simple,
}

impl FromStr for DisplayMode {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DisplayMode::All),
            "reduced" => Ok(DisplayMode::Reduced),
            "simple" => Ok(DisplayMode::Simple),
            _ => Err(PolyError::InvalidDisplayMode(s.to_string())),
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayMode::All => "all",
            DisplayMode::Reduced => "reduced",
            DisplayMode::Simple => "simple",
        })
    }
}

/// Helper returned by [`Polynomial::display`] that renders in a fixed mode.
#[derive(Clone, Copy, Debug)]
pub struct PolyDisplay<'a> {
    poly: &'a Polynomial,
    mode: DisplayMode,
}

impl Polynomial {
    /// Returns an object that formats this polynomial in `mode`.
    #[must_use]
    pub fn display(&self, mode: DisplayMode) -> PolyDisplay<'_> {
        PolyDisplay { poly: self, mode }
    }
}

impl fmt::Display for PolyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            DisplayMode::All => write_ascending(f, self.poly, false),
            DisplayMode::Reduced => write_ascending(f, self.poly, true),
            DisplayMode::Simple => write_simple(f, self.poly),
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_simple(f, self)
    }
}

/// A coefficient or center formatted deterministically.
///
/// Shortest round-trip decimal inside [1e-4, 1e16), scientific notation
/// outside it. Negative zero prints as `0`. Coefficients are printed to
/// full precision rather than rounded to six significant digits, so
/// `1/3` renders as `0.3333333333333333`, not `0.333333`.
struct Number(f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_zero() {
            f.write_char('0')
        } else if !x.is_finite() || (1e-4..1e16).contains(&x.abs()) {
            write!(f, "{x}")
        } else {
            write!(f, "{x:e}")
        }
    }
}

/// Writes `x`, `(x - a)` or `(x + |a|)` depending on the center.
fn write_variable(f: &mut fmt::Formatter<'_>, center: f64) -> fmt::Result {
    if center.is_zero() {
        f.write_char('x')
    } else if center > 0.0 {
        write!(f, "(x - {})", Number(center))
    } else {
        write!(f, "(x + {})", Number(-center))
    }
}

fn write_ascending(f: &mut fmt::Formatter<'_>, poly: &Polynomial, skip_zeros: bool) -> fmt::Result {
    let mut first = true;

    for (i, &c) in poly.coefficients().iter().enumerate() {
        if skip_zeros && c.is_zero() {
            continue;
        }
        if !first {
            f.write_str(" + ")?;
        }
        first = false;

        write!(f, "({} * ", Number(c))?;
        write_variable(f, poly.center())?;
        write!(f, "^{i})")?;
    }

    if first {
        f.write_char('0')?;
    }
    Ok(())
}

#[allow(clippy::float_cmp)]
fn write_simple(f: &mut fmt::Formatter<'_>, poly: &Polynomial) -> fmt::Result {
    let mut first = true;

    for (i, &c) in poly.coefficients().iter().enumerate().rev() {
        if c.is_zero() {
            continue;
        }
        if !first {
            f.write_str(" + ")?;
        }
        first = false;

        let integral = c.floor() == c.ceil();
        let show_coeff = !c.is_one() || i == 0;

        if integral {
            if show_coeff {
                write!(f, "{}", Number(c))?;
            }
            if i > 0 {
                write_variable(f, poly.center())?;
            }
        } else {
            if show_coeff {
                write!(f, "({})", Number(c))?;
            }
            if i > 0 {
                f.write_str(" * ")?;
                write_variable(f, poly.center())?;
            }
        }

        if i > 1 {
            write!(f, "^{i}")?;
        }
    }

    if first {
        f.write_char('0')?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(coeffs: &[f64], center: f64) -> Polynomial {
        Polynomial::new(coeffs.to_vec(), center)
    }

    #[test]
    fn test_all_mode() {
        let p = poly(&[1.0, 0.0, 3.0], 0.0);
        assert_eq!(
            p.display(DisplayMode::All).to_string(),
            "(1 * x^0) + (0 * x^1) + (3 * x^2)"
        );
    }

    #[test]
    fn test_reduced_mode_has_no_dangling_connector() {
        let p = poly(&[1.0, 0.0, 3.0], 0.0);
        assert_eq!(
            p.display(DisplayMode::Reduced).to_string(),
            "(1 * x^0) + (3 * x^2)"
        );

        let q = poly(&[0.0, 0.0, 3.0], 0.0);
        assert_eq!(q.display(DisplayMode::Reduced).to_string(), "(3 * x^2)");
    }

    #[test]
    fn test_simple_mode() {
        assert_eq!(poly(&[1.0, 2.0], 0.0).to_string(), "2x + 1");
        assert_eq!(poly(&[15.0, 11.0, 2.0], 0.0).to_string(), "2x^2 + 11x + 15");
        assert_eq!(poly(&[1.0, 0.0, 1.0], 0.0).to_string(), "x^2 + 1");
        assert_eq!(poly(&[0.0, -1.0], 0.0).to_string(), "-1x");
    }

    #[test]
    fn test_simple_mode_fractional_coefficients() {
        let p = poly(&[0.5, 0.25, 1.0], 0.0);
        assert_eq!(p.to_string(), "x^2 + (0.25) * x + (0.5)");
    }

    #[test]
    fn test_centered_variables() {
        let p = poly(&[1.0, 1.0], 2.0);
        assert_eq!(
            p.display(DisplayMode::All).to_string(),
            "(1 * (x - 2)^0) + (1 * (x - 2)^1)"
        );
        assert_eq!(p.to_string(), "(x - 2) + 1");

        let q = poly(&[0.5, 2.0, 3.0], -1.5);
        assert_eq!(q.to_string(), "3(x + 1.5)^2 + 2(x + 1.5) + (0.5)");
    }

    #[test]
    fn test_zero_polynomial() {
        let z = Polynomial::zero();
        assert_eq!(z.display(DisplayMode::All).to_string(), "(0 * x^0)");
        assert_eq!(z.display(DisplayMode::Reduced).to_string(), "0");
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(Number(-0.0).to_string(), "0");
        assert_eq!(Number(1e-20).to_string(), "1e-20");
        assert_eq!(Number(0.125).to_string(), "0.125");
        assert_eq!(Number(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_numbers_keep_full_precision() {
        assert_eq!(Number(1.0 / 3.0).to_string(), "0.3333333333333333");
        assert_eq!(Number(123_456.789).to_string(), "123456.789");
        assert_eq!(poly(&[1.0 / 3.0], 0.0).to_string(), "(0.3333333333333333)");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let p = poly(&[1.0 / 3.0, -2.5, 0.0, 7.0], 0.75);
        for mode in [DisplayMode::All, DisplayMode::Reduced, DisplayMode::Simple] {
            assert_eq!(p.display(mode).to_string(), p.display(mode).to_string());
        }
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("all".parse::<DisplayMode>(), Ok(DisplayMode::All));
        assert_eq!("reduced".parse::<DisplayMode>(), Ok(DisplayMode::Reduced));
        assert_eq!("simple".parse::<DisplayMode>(), Ok(DisplayMode::Simple));
        assert_eq!(
            "fancy".parse::<DisplayMode>(),
            Err(PolyError::InvalidDisplayMode("fancy".to_string()))
        );
        assert_eq!(DisplayMode::default(), DisplayMode::All);
    }
}
