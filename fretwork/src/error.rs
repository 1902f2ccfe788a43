//! Umbrella error type for full-string generation.

use fretwork_deform::DeformError;
use fretwork_mesh::MeshError;
use fretwork_rig::RigError;
use fretwork_types::ParamError;
use thiserror::Error;

/// Result type for full-string generation.
pub type StringResult<T> = Result<T, StringError>;

/// Any failure from the generation pipeline.
///
/// Generation never produces partial output: on error, no buffers are
/// returned at all.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StringError {
    /// A generation parameter is outside its declared bound.
    #[error("invalid parameters: {0}")]
    Param(#[from] ParamError),

    /// Tube mesh construction failed.
    #[error("mesh generation failed: {0}")]
    Mesh(#[from] MeshError),

    /// Shape key or vertex group synthesis failed.
    #[error("deformation synthesis failed: {0}")]
    Deform(#[from] DeformError),

    /// Armature or animation synthesis failed.
    #[error("rig synthesis failed: {0}")]
    Rig(#[from] RigError),
}
