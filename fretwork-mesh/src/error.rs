//! Error types for tube mesh construction.

use fretwork_types::ParamError;
use thiserror::Error;

/// Result type for tube mesh construction.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while building the tube mesh.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeshError {
    /// A generation parameter failed validation.
    #[error(transparent)]
    Param(#[from] ParamError),

    /// Two segments of unequal vertex count were passed to the bridging
    /// routine. This indicates an internal logic bug, not bad input.
    #[error("cannot bridge segments of different sizes: {left} vs {right}")]
    DimensionMismatch {
        /// Vertex count of the first segment.
        left: usize,
        /// Vertex count of the second segment.
        right: usize,
    },
}
