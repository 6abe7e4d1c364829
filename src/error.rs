use thiserror::Error;

/// Errors returned by the clustering entry points in this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Dataset has no points.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points in a dataset have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("non-finite coordinate in point {index}")]
    NonFinite {
        /// Index of the offending point.
        index: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
