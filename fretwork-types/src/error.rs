//! Error types for parameter validation.

use thiserror::Error;

/// Result type for parameter validation.
pub type ParamResult<T> = Result<T, ParamError>;

/// Errors raised when a generation parameter is outside its declared bound.
///
/// Parameters are rejected before any generation begins; no stage ever sees
/// an out-of-range value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParamError {
    /// An integer parameter is outside its allowed range.
    #[error("{name} must be in {min}..={max}, got {value}")]
    CountOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Minimum allowed value.
        min: usize,
        /// Maximum allowed value.
        max: usize,
        /// The rejected value.
        value: usize,
    },

    /// A floating point parameter is outside its allowed range.
    #[error("{name} must be in [{min}, {max}], got {value}")]
    ValueOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
        /// The rejected value.
        value: f64,
    },

    /// A floating point parameter is below its minimum (no upper bound).
    #[error("{name} must be at least {min}, got {value}")]
    BelowMinimum {
        /// Parameter name.
        name: &'static str,
        /// Minimum allowed value.
        min: f64,
        /// The rejected value.
        value: f64,
    },

    /// A floating point parameter is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NotFinite {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
