//! Error types for rig synthesis.

use thiserror::Error;

/// Result type for rig synthesis.
pub type RigResult<T> = Result<T, RigError>;

/// Errors that can occur while building the armature or its animation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RigError {
    /// Fewer bones than the vibration math can animate. The two endpoint
    /// bones are pinned, so at least two bones are required for the layout
    /// to mean anything.
    #[error("armature needs at least {min} bones, got {actual}")]
    TooFewBones {
        /// Minimum required bones.
        min: usize,
        /// Actual bone count.
        actual: usize,
    },

    /// String length is zero, negative, or not finite.
    #[error("invalid string length: {0}")]
    InvalidLength(f64),

    /// The animation frame range is empty or inverted.
    #[error("frame range must end after it starts: {start}..{end}")]
    InvalidFrameRange {
        /// First frame.
        start: u32,
        /// Last frame.
        end: u32,
    },

    /// Dampening must be a positive finite value.
    #[error("dampening must be positive, got {0}")]
    InvalidDampening(f64),
}
