//! Error types for deformation synthesis.

use thiserror::Error;

/// Result type for deformation synthesis.
pub type DeformResult<T> = Result<T, DeformError>;

/// Errors that can occur while synthesizing shape keys or vertex groups.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeformError {
    /// The mesh has too few segments for the requested deformation.
    ///
    /// The bend math interpolates across the bend region and at least one
    /// segment beyond it, so a degenerate segment list is rejected outright
    /// rather than producing empty keys.
    #[error("need at least {min} segments, got {actual}")]
    InsufficientGeometry {
        /// Minimum required segments.
        min: usize,
        /// Actual segment count.
        actual: usize,
    },

    /// A segment references a vertex index outside the mesh.
    #[error("segment references vertex index {index}, mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}
