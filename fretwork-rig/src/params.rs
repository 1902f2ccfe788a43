//! Animation timing and vibration configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RigError, RigResult};

/// Scene timing for the vibration animation.
///
/// The original tool mutated global scene state for these; here they are an
/// explicit input to curve synthesis and are echoed back to the binding so
/// it can configure the scene to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timing {
    /// First frame of the animation; pinned to the rest pose.
    pub frame_start: u32,

    /// Last frame of the animation; pinned to the rest pose.
    pub frame_end: u32,

    /// Playback rate the curves are designed for.
    pub fps: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            frame_start: 1,
            frame_end: 100,
            fps: 60,
        }
    }
}

impl Timing {
    /// Check the frame range is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::InvalidFrameRange`] if `frame_end <= frame_start`.
    pub const fn validate(&self) -> RigResult<()> {
        if self.frame_end <= self.frame_start {
            return Err(RigError::InvalidFrameRange {
                start: self.frame_start,
                end: self.frame_end,
            });
        }
        Ok(())
    }
}

/// Shape of the decorative vibration.
///
/// Not a physical model: the curve is a designed superposition of two
/// standing-wave modes with an exponential decay envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VibrationConfig {
    /// Peak lateral displacement in scene units.
    pub amplitude: f64,

    /// Decay time constant in frames; higher values let the string ring
    /// longer.
    pub dampening: f64,

    /// Frames held at rest after `frame_start` before the wave begins,
    /// avoiding an instantaneous jump out of the rest pose.
    pub hold_frames: u32,
}

impl Default for VibrationConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.002,
            dampening: 40.0,
            hold_frames: 5,
        }
    }
}

impl VibrationConfig {
    /// Set the amplitude.
    #[must_use]
    pub const fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Set the dampening time constant.
    #[must_use]
    pub const fn with_dampening(mut self, dampening: f64) -> Self {
        self.dampening = dampening;
        self
    }

    /// Check the configuration values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`RigError::InvalidDampening`] for a non-positive or
    /// non-finite dampening.
    pub fn validate(&self) -> RigResult<()> {
        if !self.dampening.is_finite() || self.dampening <= 0.0 {
            return Err(RigError::InvalidDampening(self.dampening));
        }
        Ok(())
    }
}
