//! Arithmetic operations for polynomials.
//!
//! Polynomial–polynomial operations require both operands to share a
//! center and report [`PolyError::CenterMismatch`] otherwise. Scalar
//! operations always succeed; division by zero follows IEEE semantics
//! and is left to the caller to check.
//!
//! Operations returning a new polynomial drop the generator tag. Compound
//! forms (`+=`, `add_in_place`, ...) only rewrite the receiver's
//! coefficients, so its center and tag survive.
//!
//! Binary operators are implemented on references (`&p + &q`, `&p * 2.0`)
//! so that the inherent `add` keeps method-call priority on owned values.
//! Polynomial–polynomial operators yield a [`Result`].

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::warn;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;

/// Cauchy product of two coefficient sequences.
///
/// Neither input may be empty.
pub(crate) fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    let mut result = vec![0.0; a.len() + b.len() - 1];

    for (i, ai) in a.iter().enumerate() {
        for (j, bj) in b.iter().enumerate() {
            result[i + j] += ai * bj;
        }
    }

    result
}

/// Combines two coefficient sequences element-wise, padding the shorter.
fn zip_padded(a: &[f64], b: &[f64], op: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0.0);
            let y = b.get(i).copied().unwrap_or(0.0);
            op(x, y)
        })
        .collect()
}

impl Polynomial {
    // Exact comparison: centers are only combinable when identical.
    #[allow(clippy::float_cmp)]
    fn check_center(&self, other: &Self) -> Result<()> {
        if self.center() == other.center() {
            return Ok(());
        }

        warn!(
            left = self.center(),
            right = other.center(),
            "refusing to combine polynomials expanded around different centers"
        );
        Err(PolyError::CenterMismatch {
            left: self.center(),
            right: other.center(),
        })
    }

    /// Adds two polynomials.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CenterMismatch`] if the centers differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_center(other)?;
        let coeffs = zip_padded(self.coefficients(), other.coefficients(), |x, y| x + y);
        Ok(Self::new(coeffs, self.center()))
    }

    /// Subtracts `other` from this polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CenterMismatch`] if the centers differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.check_center(other)?;
        let coeffs = zip_padded(self.coefficients(), other.coefficients(), |x, y| x - y);
        Ok(Self::new(coeffs, self.center()))
    }

    /// Multiplies two polynomials by discrete convolution of their
    /// coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CenterMismatch`] if the centers differ.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        self.check_center(other)?;
        let coeffs = convolve(self.coefficients(), other.coefficients());
        Ok(Self::new(coeffs, self.center()))
    }

    /// Adds `other` into this polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CenterMismatch`] if the centers differ; the
    /// receiver is left untouched.
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_center(other)?;
        let coeffs = zip_padded(self.coefficients(), other.coefficients(), |x, y| x + y);
        self.update_coefficients(|c| *c = coeffs);
        Ok(())
    }

    /// Subtracts `other` from this polynomial in place.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CenterMismatch`] if the centers differ; the
    /// receiver is left untouched.
    pub fn subtract_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_center(other)?;
        let coeffs = zip_padded(self.coefficients(), other.coefficients(), |x, y| x - y);
        self.update_coefficients(|c| *c = coeffs);
        Ok(())
    }

    /// Multiplies this polynomial by `other` in place.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::CenterMismatch`] if the centers differ; the
    /// receiver is left untouched.
    pub fn multiply_in_place(&mut self, other: &Self) -> Result<()> {
        self.check_center(other)?;
        let coeffs = convolve(self.coefficients(), other.coefficients());
        self.update_coefficients(|c| *c = coeffs);
        Ok(())
    }

    /// Adds a scalar to the constant term.
    #[must_use]
    pub fn add_scalar(&self, c: f64) -> Self {
        self.map_constant(|c0| c0 + c)
    }

    /// Subtracts a scalar from the constant term.
    #[must_use]
    pub fn subtract_scalar(&self, c: f64) -> Self {
        self.map_constant(|c0| c0 - c)
    }

    /// Multiplies every coefficient by a scalar.
    ///
    /// Multiplying by zero yields the zero polynomial.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        self.map_coefficients(|x| x * c)
    }

    /// Divides every coefficient by a scalar.
    ///
    /// Dividing by zero is not guarded and produces infinities or NaN.
    #[must_use]
    pub fn divide(&self, c: f64) -> Self {
        self.map_coefficients(|x| x / c)
    }

    fn map_constant(&self, f: impl FnOnce(f64) -> f64) -> Self {
        let mut coeffs = self.coefficients().to_vec();
        match coeffs.first_mut() {
            Some(c0) => *c0 = f(*c0),
            None => coeffs.push(f(0.0)),
        }
        // Only a degree-0 polynomial can collapse here, and it stays [c].
        Self::new(coeffs, self.center())
    }

    fn map_coefficients(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(
            self.coefficients().iter().map(|&x| f(x)).collect(),
            self.center(),
        )
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Result<Polynomial>;

    fn add(self, other: &Polynomial) -> Self::Output {
        Polynomial::add(self, other)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Result<Polynomial>;

    fn sub(self, other: &Polynomial) -> Self::Output {
        self.subtract(other)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Result<Polynomial>;

    fn mul(self, other: &Polynomial) -> Self::Output {
        self.multiply(other)
    }
}

impl Add<f64> for &Polynomial {
    type Output = Polynomial;

    fn add(self, c: f64) -> Polynomial {
        self.add_scalar(c)
    }
}

impl Sub<f64> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, c: f64) -> Polynomial {
        self.subtract_scalar(c)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, c: f64) -> Polynomial {
        self.scale(c)
    }
}

impl Div<f64> for &Polynomial {
    type Output = Polynomial;

    fn div(self, c: f64) -> Polynomial {
        self.divide(c)
    }
}

impl AddAssign<f64> for Polynomial {
    fn add_assign(&mut self, c: f64) {
        self.update_coefficients(|coeffs| {
            if let Some(c0) = coeffs.first_mut() {
                *c0 += c;
            }
        });
    }
}

impl SubAssign<f64> for Polynomial {
    fn sub_assign(&mut self, c: f64) {
        self.update_coefficients(|coeffs| {
            if let Some(c0) = coeffs.first_mut() {
                *c0 -= c;
            }
        });
    }
}

impl MulAssign<f64> for Polynomial {
    fn mul_assign(&mut self, c: f64) {
        self.update_coefficients(|coeffs| coeffs.iter_mut().for_each(|x| *x *= c));
    }
}

impl DivAssign<f64> for Polynomial {
    fn div_assign(&mut self, c: f64) {
        self.update_coefficients(|coeffs| coeffs.iter_mut().for_each(|x| *x /= c));
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.map_coefficients(|x| -x)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        -&self
    }
}
