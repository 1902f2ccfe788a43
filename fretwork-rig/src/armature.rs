//! Bone rest layout along the string axis.

use fretwork_types::constants::BONE_TAIL_LENGTH;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RigError, RigResult};

/// One armature bone at rest.
///
/// Head and tail both sit on the string axis; the tail's small +z offset
/// exists only so host tools can display and select the bone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bone {
    /// Bone name; matches the vertex group of the segment it drives.
    pub name: String,

    /// Rest position of the bone head.
    pub head: Point3<f64>,

    /// Rest position of the bone tail.
    pub tail: Point3<f64>,
}

/// Rest positions of the bones along the string axis.
///
/// Produces `segment_count + 1` equally spaced values from `+length/2` down
/// to `-length/2`, matching the main tube segments exactly (bend segments
/// excluded) so that skin weights line up.
///
/// # Example
///
/// ```
/// use fretwork_rig::bone_locations;
///
/// let locations = bone_locations(0.6336, 8);
/// assert_eq!(locations.len(), 9);
/// assert!((locations[0] - 0.3168).abs() < 1e-12);
/// assert!((locations[8] + 0.3168).abs() < 1e-12);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // segment counts are bounded at 40
pub fn bone_locations(length: f64, segment_count: usize) -> Vec<f64> {
    let spacing = length / segment_count as f64;
    (0..=segment_count)
        .map(|i| length / 2.0 - i as f64 * spacing)
        .collect()
}

/// Build the armature bone list for a string.
///
/// Bones are named `Segment{i:02}` in segment order, heads on the string
/// axis at the [`bone_locations`] positions.
///
/// # Arguments
///
/// * `length` - String length in scene units
/// * `segment_count` - Number of mesh segments; yields `segment_count + 1`
///   bones
///
/// # Errors
///
/// Returns [`RigError::InvalidLength`] for a non-positive or non-finite
/// length, or [`RigError::TooFewBones`] if `segment_count` is zero.
pub fn build_armature(length: f64, segment_count: usize) -> RigResult<Vec<Bone>> {
    if !length.is_finite() || length <= 0.0 {
        return Err(RigError::InvalidLength(length));
    }
    if segment_count == 0 {
        return Err(RigError::TooFewBones {
            min: 2,
            actual: segment_count + 1,
        });
    }

    let bones = bone_locations(length, segment_count)
        .into_iter()
        .enumerate()
        .map(|(i, y)| Bone {
            name: format!("Segment{i:02}"),
            head: Point3::new(0.0, y, 0.0),
            tail: Point3::new(0.0, y, BONE_TAIL_LENGTH),
        })
        .collect();

    Ok(bones)
}
