//! # polyc
//!
//! Univariate polynomials over `f64` with an optional expansion point,
//! calculus, and truncated series for sine, cosine, e^x and ln.
//!
//! ## Features
//!
//! - **Recentered polynomials**: terms of the form c·(x−a)ⁱ
//! - **Calculus**: derivative, antiderivative, integer powers
//! - **Checked arithmetic**: combining different centers is an error
//! - **Series**: 1000-term Taylor approximations by keyword
//! - **Rendering**: `all`, `reduced` and `simple` layouts
//!
//! ## Quick Start
//!
//! ```rust
//! use polyc::prelude::*;
//!
//! let p = Polynomial::new(vec![3.0, 1.0], 0.0);
//! let q = Polynomial::new(vec![5.0, 2.0], 0.0);
//! let product = (&p * &q)?;
//! assert_eq!(product.to_string(), "2x^2 + 11x + 15");
//!
//! let sine = Polynomial::named("sin")?;
//! assert!((sine.solve(0.5) - 0.5f64.sin()).abs() < 1e-12);
//! # Ok::<(), polyc::poly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyc_poly as poly;
pub use polyc_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyc_poly::{DisplayMode, Generator, PolyError, Polynomial};
    pub use polyc_series::{NamedSeries, SeriesConfig};
}
