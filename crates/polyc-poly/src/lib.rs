//! # polyc-poly
//!
//! Univariate polynomials over `f64`, optionally recentered around a
//! point `a` so that terms read `c·(x−a)^i`.
//!
//! This crate provides:
//! - [`Polynomial`]: a normalized dense coefficient vector plus its center
//! - Evaluation with compensated summation
//! - Formal derivative, antiderivative and integer powers
//! - Arithmetic with other polynomials (same center only) and with scalars
//! - Three textual renderings, selected by [`DisplayMode`]
//!
//! ## Normalization
//!
//! Coefficients are stored in ascending power order. Trailing zero
//! coefficients are always stripped, but never below a single entry:
//! the zero polynomial is `[0]`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod display;
pub mod error;
pub mod polynomial;
mod summation;

#[cfg(test)]
mod proptests;

pub use display::{DisplayMode, PolyDisplay};
pub use error::{PolyError, Result};
pub use polynomial::{Generator, Polynomial};
