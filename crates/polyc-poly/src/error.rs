//! Error type shared by every polynomial operation.

use thiserror::Error;

/// Errors that can occur while building or combining polynomials.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PolyError {
    /// The identifier passed to the named-function constructor is unknown.
    #[error("`{0}` is not a valid function keyword")]
    InvalidKeyword(String),

    /// Two polynomials expanded around different points were combined.
    #[error("polynomial center mismatch: left is centered at {left}, right at {right}")]
    CenterMismatch {
        /// Center of the receiver.
        left: f64,
        /// Center of the other operand.
        right: f64,
    },

    /// A coefficient was requested past the highest stored power.
    #[error("coefficient index {index} out of range for a polynomial with {len} coefficients")]
    IndexOutOfRange {
        /// Requested power.
        index: usize,
        /// Number of stored coefficients.
        len: usize,
    },

    /// A display mode name was not one of `all`, `reduced` or `simple`.
    #[error("`{0}` is not a valid display mode")]
    InvalidDisplayMode(String),
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
