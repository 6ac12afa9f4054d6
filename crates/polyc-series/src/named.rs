//! Truncated Taylor series of well-known functions.
//!
//! Each generator produces the polynomial Σᵢ aᵢ(x−a)ⁱ with aᵢ = f⁽ⁱ⁾(a)/i!:
//! - sine, cosine and e^x around a = 0
//! - ln(x) around a = 1 (the alternating harmonic series)
//!
//! Factorials are accumulated in `f64`, so every term past 170! becomes
//! zero and is stripped by normalization.

use polyc_poly::{Generator, Polynomial, Result};
use tracing::debug;

/// Configuration for named series generation.
#[derive(Clone, Debug)]
pub struct SeriesConfig {
    /// Number of coefficients generated before normalization.
    pub terms: usize,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self { terms: 1000 }
    }
}

impl SeriesConfig {
    /// Creates a configuration generating `terms` coefficients.
    #[must_use]
    pub fn with_terms(terms: usize) -> Self {
        Self { terms }
    }
}

/// Computes 0!, 1!, …, (n−1)! as `f64`.
fn factorials(n: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(n);
    let mut acc = 1.0;
    for i in 0..n {
        if i > 0 {
            acc *= i as f64;
        }
        result.push(acc);
    }
    result
}

/// Returns `1.0` for even `k` and `-1.0` for odd `k`.
fn alternating(k: usize) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// Returns the expansion point used for `generator`.
#[must_use]
pub fn series_center(generator: Generator) -> f64 {
    match generator {
        Generator::Ln => 1.0,
        Generator::Sine | Generator::Cosine | Generator::Euler => 0.0,
    }
}

/// Generates the first `terms` Taylor coefficients of `generator`,
/// before normalization.
#[must_use]
pub fn series_coefficients(generator: Generator, terms: usize) -> Vec<f64> {
    match generator {
        Generator::Sine => factorials(terms)
            .into_iter()
            .enumerate()
            .map(|(i, f)| {
                if i % 2 == 1 {
                    alternating((i - 1) / 2) / f
                } else {
                    0.0
                }
            })
            .collect(),
        Generator::Cosine => factorials(terms)
            .into_iter()
            .enumerate()
            .map(|(i, f)| {
                if i % 2 == 0 {
                    alternating(i / 2) / f
                } else {
                    0.0
                }
            })
            .collect(),
        Generator::Euler => factorials(terms).into_iter().map(f64::recip).collect(),
        Generator::Ln => (0..terms)
            .map(|i| {
                if i == 0 {
                    0.0
                } else {
                    alternating(i + 1) / i as f64
                }
            })
            .collect(),
    }
}

/// Builds the tagged series polynomial for `generator`.
#[must_use]
pub fn generate(generator: Generator, config: &SeriesConfig) -> Polynomial {
    let coeffs = series_coefficients(generator, config.terms);
    let poly = Polynomial::with_generator(coeffs, series_center(generator), generator);

    debug!(
        function = generator.name(),
        terms = config.terms,
        degree = poly.degree(),
        "generated series polynomial"
    );
    poly
}

/// Named-function constructors for [`Polynomial`].
pub trait NamedSeries: Sized {
    /// Builds the series for `keyword` with the default term count.
    ///
    /// Recognized keywords: `sine`/`sin`, `cosine`/`cos`,
    /// `euler`/`e^x`/`e` and `ln`/`lnx`/`log`/`logx`.
    ///
    /// # Errors
    ///
    /// Returns [`polyc_poly::PolyError::InvalidKeyword`] for any other
    /// identifier.
    fn named(keyword: &str) -> Result<Self> {
        Self::named_with(keyword, &SeriesConfig::default())
    }

    /// Builds the series for `keyword` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`polyc_poly::PolyError::InvalidKeyword`] for an
    /// unrecognized identifier.
    fn named_with(keyword: &str, config: &SeriesConfig) -> Result<Self>;
}

impl NamedSeries for Polynomial {
    fn named_with(keyword: &str, config: &SeriesConfig) -> Result<Self> {
        let generator: Generator = keyword.parse()?;
        Ok(generate(generator, config))
    }
}
