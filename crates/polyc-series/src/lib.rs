//! Polynomial approximations of transcendental functions.
//!
//! This crate provides:
//! - [`NamedSeries`]: `Polynomial::named("sin")` and friends
//! - [`SeriesConfig`]: the number of generated terms (1000 by default)
//! - The raw Taylor coefficients behind each [`Generator`]
//!
//! Series are truncated, not exact. In particular the `ln` series around
//! 1 is evaluated through the reciprocal x ↦ 1/x beyond x = 2, see
//! [`Polynomial::solve`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod named;

pub use named::{generate, series_center, series_coefficients, NamedSeries, SeriesConfig};
pub use polyc_poly::{Generator, Polynomial};
