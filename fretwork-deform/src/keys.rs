//! Shape key synthesis for fret pressing.

use fretwork_types::constants::{
    BEND_SEGMENT_COUNT, FRET_BIAS_FIRST, FRET_BIAS_SECOND, PRESS_OVERSHOOT, STRING_HEIGHT,
};
use fretwork_types::TubeMesh;
use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DeformError, DeformResult};
use crate::fret::fretted_y;

/// Name of the basis key holding the rest positions.
pub const BASIS_KEY_NAME: &str = "BaseKey";

/// Name of the pressing key that bends the string down onto the fret.
pub const PRESSED_KEY_NAME: &str = "Pressed";

/// A named deformation target: a full per-vertex position override blended
/// against the basis by the host's shape-key system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShapeKey {
    /// Key name as exposed to the host.
    pub name: String,

    /// Override position for every vertex of the mesh.
    pub positions: Vec<Point3<f64>>,
}

/// Synthesize the ordered shape key list for a fretted string.
///
/// The result is ordered the way the host must create the keys:
///
/// 1. `BaseKey` - the rest positions, captured before any deformation
/// 2. `Pressed` - bends the string laterally onto the fret crown
/// 3. `Fret01`..`FretNN` - one key per fret, compressing the segments toward
///    the fret along the string axis
///
/// The first and last segments are never displaced by any key, so the string
/// stays anchored at the nut and the body.
///
/// The fret keys move each interior segment to [`fretted_y`], with small
/// fixed axial biases on the two interior bend segments placing them just
/// behind the fret crown where the finger would press. The pressed key moves
/// the bend segments a full string height (plus a small overshoot) in `-x`,
/// and fades that displacement linearly to zero over the remaining segments.
///
/// # Arguments
///
/// * `mesh` - The tube mesh, with its segment list intact
/// * `length` - String length in scene units
/// * `fret_count` - Number of fret keys to create; `0` yields just the basis
///
/// # Errors
///
/// Returns [`DeformError::InsufficientGeometry`] if the mesh has fewer
/// segments than the bend region needs, or
/// [`DeformError::IndexOutOfBounds`] if a segment indexes past the vertex
/// buffer.
#[allow(clippy::cast_precision_loss)] // segment counts are bounded at 44
pub fn fret_shape_keys(
    mesh: &TubeMesh,
    length: f64,
    fret_count: usize,
) -> DeformResult<Vec<ShapeKey>> {
    let n = mesh.segment_count();
    if n < BEND_SEGMENT_COUNT + 1 {
        return Err(DeformError::InsufficientGeometry {
            min: BEND_SEGMENT_COUNT + 1,
            actual: n,
        });
    }
    check_indices(mesh)?;

    // The basis must capture the rest positions before any other key exists.
    let basis = ShapeKey {
        name: BASIS_KEY_NAME.to_owned(),
        positions: mesh.vertices.clone(),
    };

    if fret_count == 0 {
        return Ok(vec![basis]);
    }

    let mut keys = Vec::with_capacity(fret_count + 2);

    let mut pressed = basis.positions.clone();
    for (i_seg, segment) in mesh.segments.iter().enumerate().take(n - 1).skip(1) {
        let height = if i_seg < BEND_SEGMENT_COUNT {
            STRING_HEIGHT + PRESS_OVERSHOOT
        } else {
            (n - i_seg) as f64 / (n - BEND_SEGMENT_COUNT) as f64 * STRING_HEIGHT
        };

        for &index in &segment.indices {
            pressed[index as usize].x = basis.positions[index as usize].x - height;
        }
    }

    keys.push(basis);
    keys.push(ShapeKey {
        name: PRESSED_KEY_NAME.to_owned(),
        positions: pressed,
    });

    let half_length = length / 2.0;
    for fret in 1..=fret_count {
        let mut positions = keys[0].positions.clone();

        for (i_seg, segment) in mesh.segments.iter().enumerate().take(n - 1).skip(1) {
            let mut y_new = fretted_y(segment.y, half_length, fret);
            if i_seg == 1 {
                y_new += FRET_BIAS_FIRST;
            }
            if i_seg == 2 {
                y_new += FRET_BIAS_SECOND;
            }

            for &index in &segment.indices {
                positions[index as usize].y = y_new;
            }
        }

        keys.push(ShapeKey {
            name: format!("Fret{fret:02}"),
            positions,
        });
    }

    Ok(keys)
}

/// Reject segment lists that index past the vertex buffer.
pub(crate) fn check_indices(mesh: &TubeMesh) -> DeformResult<()> {
    let vertex_count = mesh.vertex_count();
    for segment in &mesh.segments {
        for &index in &segment.indices {
            if index as usize >= vertex_count {
                return Err(DeformError::IndexOutOfBounds {
                    index,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}
