//! Armature layout and vibration animation for instrument strings.
//!
//! Two stages live here:
//!
//! - [`build_armature`]: bone rest positions, collinear with the tube's main
//!   segments so the skin weights line up index-for-index.
//! - [`vibration_actions`]: per-bone keyframe curves approximating a damped
//!   standing wave, one action per pluck direction.
//!
//! Timing and wave shape are explicit inputs ([`Timing`],
//! [`VibrationConfig`]) rather than ambient scene state.
//!
//! # Example
//!
//! ```
//! use fretwork_rig::{build_armature, vibration_actions, Timing, VibrationConfig};
//!
//! let bones = build_armature(0.6336, 8).unwrap();
//! let actions =
//!     vibration_actions(bones.len(), &Timing::default(), &VibrationConfig::default()).unwrap();
//!
//! assert_eq!(bones.len(), 9);
//! assert_eq!(actions.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod armature;
mod error;
mod params;
mod vibration;

pub use armature::{bone_locations, build_armature, Bone};
pub use error::{RigError, RigResult};
pub use params::{Timing, VibrationConfig};
pub use vibration::{vibration_actions, BoneCurve, Keyframe, PluckDirection, VibrationAction};
