//! Recentered dense univariate polynomials.
//!
//! A [`Polynomial`] stores coefficients `c₀, c₁, …, cₙ` together with a
//! center `a` and represents Σ cᵢ·(x−a)ⁱ.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use num_traits::{One, Zero};
use tracing::trace;

use crate::arithmetic::convolve;
use crate::error::{PolyError, Result};
use crate::summation::CompensatedSum;

/// The closed-form function a polynomial was generated to approximate.
///
/// Only [`Generator::Ln`] changes behavior: its evaluation switches to the
/// reciprocal substitution for `x > 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Generator {
    /// sin(x) around 0.
    Sine,
    /// cos(x) around 0.
    Cosine,
    /// e^x around 0.
    Euler,
    /// ln(x) around 1.
    Ln,
}

impl Generator {
    /// Returns the canonical keyword for this generator.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Generator::Sine => "sine",
            Generator::Cosine => "cosine",
            Generator::Euler => "euler",
            Generator::Ln => "ln",
        }
    }
}

impl FromStr for Generator {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sine" | "sin" => Ok(Generator::Sine),
            "cosine" | "cos" => Ok(Generator::Cosine),
            "euler" | "e^x" | "e" => Ok(Generator::Euler),
            "ln" | "lnx" | "log" | "logx" => Ok(Generator::Ln),
            _ => Err(PolyError::InvalidKeyword(s.to_string())),
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A univariate polynomial Σ cᵢ·(x−a)ⁱ with `f64` coefficients.
///
/// Coefficients are stored in ascending power order and are always
/// normalized: the highest stored coefficient is nonzero unless the
/// polynomial is exactly `[0]`.
#[derive(Clone, PartialEq, Debug)]
pub struct Polynomial {
    /// Coefficients in ascending power order.
    coeffs: Vec<f64>,
    /// Expansion point `a`.
    center: f64,
    /// Named function this polynomial approximates, if any.
    generator: Option<Generator>,
}

/// Strips trailing zero coefficients, keeping at least one entry.
pub(crate) fn normalize(coeffs: &mut Vec<f64>) {
    while coeffs.len() > 1 && coeffs.last().is_some_and(|c| c.is_zero()) {
        coeffs.pop();
    }

    if coeffs.is_empty() {
        coeffs.push(0.0);
    }
}

impl Polynomial {
    /// Creates a polynomial from ascending coefficients around `center`.
    ///
    /// An empty coefficient list yields the zero polynomial.
    #[must_use]
    pub fn new(mut coeffs: Vec<f64>, center: f64) -> Self {
        normalize(&mut coeffs);
        Self {
            coeffs,
            center,
            generator: None,
        }
    }

    /// Creates a polynomial tagged as an approximation of `generator`.
    #[must_use]
    pub fn with_generator(coeffs: Vec<f64>, center: f64, generator: Generator) -> Self {
        Self {
            generator: Some(generator),
            ..Self::new(coeffs, center)
        }
    }

    /// Creates the zero polynomial centered at 0.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coeffs: vec![0.0],
            center: 0.0,
            generator: None,
        }
    }

    /// Creates the constant polynomial 1 centered at 0.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![1.0],
            center: 0.0,
            generator: None,
        }
    }

    /// Creates a constant polynomial around `center`.
    #[must_use]
    pub fn constant(c: f64, center: f64) -> Self {
        Self::new(vec![c], center)
    }

    /// Returns all coefficients in ascending power order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Replaces the coefficients, normalizing them.
    ///
    /// The polynomial no longer approximates a named function afterwards.
    pub fn set_coefficients(&mut self, mut coeffs: Vec<f64>) {
        normalize(&mut coeffs);
        self.coeffs = coeffs;
        self.generator = None;
    }

    /// Rewrites the coefficients through `f` and renormalizes, keeping the
    /// center and the generator tag.
    pub(crate) fn update_coefficients(&mut self, f: impl FnOnce(&mut Vec<f64>)) {
        f(&mut self.coeffs);
        normalize(&mut self.coeffs);
    }

    /// Returns the expansion point `a`.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Moves the expansion point without touching the coefficients.
    pub fn set_center(&mut self, center: f64) {
        self.center = center;
        self.generator = None;
    }

    /// Returns the named function this polynomial approximates, if any.
    #[must_use]
    pub fn generator(&self) -> Option<Generator> {
        self.generator
    }

    /// Returns the number of stored coefficients.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns the degree of the polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Returns the coefficient of the highest power.
    #[must_use]
    pub fn leading_coefficient(&self) -> f64 {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Returns the coefficient of (x−a)^`index`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn coefficient_at(&self, index: usize) -> Result<f64> {
        self.coeffs
            .get(index)
            .copied()
            .ok_or(PolyError::IndexOutOfRange {
                index,
                len: self.coeffs.len(),
            })
    }

    /// Evaluates Σ cᵢ·(x−a)ⁱ.
    ///
    /// A polynomial generated as the `ln` series is evaluated as
    /// −Σ cᵢ·(1/x − a)ⁱ once `x > 2`, where the series around 1 no longer
    /// converges. This mirrors ln(x) = −ln(1/x) for the truncated series
    /// and is only meaningful for that generator.
    #[must_use]
    pub fn solve(&self, x: f64) -> f64 {
        if self.generator == Some(Generator::Ln) && x > 2.0 {
            return -self.sum_terms(x.recip());
        }
        self.sum_terms(x)
    }

    /// Evaluates the polynomial at `x`; identical to [`Polynomial::solve`].
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.solve(x)
    }

    fn sum_terms(&self, x: f64) -> f64 {
        let h = x - self.center;
        let mut acc = CompensatedSum::default();
        let mut h_power = f64::one();

        for c in &self.coeffs {
            // Skipped so an overflowed power cannot produce 0 * inf = NaN.
            if !c.is_zero() {
                acc.add(c * h_power);
            }
            h_power *= h;
        }

        acc.total()
    }

    /// Computes the formal derivative with respect to x.
    ///
    /// The result keeps the center and drops the generator tag.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c * i as f64)
            .collect();

        Self::new(coeffs, self.center)
    }

    /// Computes the antiderivative whose constant term is `c`.
    ///
    /// The result keeps the center and drops the generator tag.
    #[must_use]
    pub fn integrate(&self, c: f64) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(c);
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, coeff)| coeff / (i + 1) as f64),
        );

        Self::new(coeffs, self.center)
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// `power(0)` is the constant 1 centered at 0, whatever the receiver's
    /// center. Higher powers multiply sequentially, left to right, so the
    /// floating point rounding matches repeated `*`.
    #[must_use]
    pub fn power(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut coeffs = self.coeffs.clone();
        for step in 1..n {
            trace!(step, degree = coeffs.len() - 1, "power: multiplying");
            coeffs = convolve(&coeffs, &self.coeffs);
            normalize(&mut coeffs);
        }

        Self::new(coeffs, self.center)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Index<usize> for Polynomial {
    type Output = f64;

    /// Returns the coefficient of (x−a)^`index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range; [`Polynomial::coefficient_at`]
    /// reports the same condition as [`PolyError::IndexOutOfRange`].
    fn index(&self, index: usize) -> &Self::Output {
        &self.coeffs[index]
    }
}
