//! Vertex group synthesis for armature binding.

use fretwork_types::constants::BEND_SEGMENT_COUNT;
use fretwork_types::TubeMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DeformError, DeformResult};
use crate::keys::check_indices;

/// Name of the combined group holding all bend segments.
pub const BEND_GROUP_NAME: &str = "SegmentBend";

/// How the host should apply a group's weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightPolicy {
    /// Set each vertex's weight, overwriting any previous value.
    Replace,

    /// Accumulate weights if a vertex appears more than once. The bend
    /// segments do not overlap by construction, but the accumulate policy
    /// keeps the group correct if the bend region ever grows.
    Add,
}

/// A named set of vertex weights for skinning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexGroup {
    /// Group name; primary groups match their bone's name exactly.
    pub name: String,

    /// Weight application policy.
    pub policy: WeightPolicy,

    /// `(vertex index, weight)` pairs.
    pub weights: Vec<(u32, f64)>,
}

/// Synthesize the vertex groups binding the mesh to the armature.
///
/// Each main segment `i` gets its own group `Segment{i:02}`, named to match
/// the bone at the same index and position; every vertex of the segment
/// carries weight 1.0 and belongs to exactly one such group. When the string
/// has frets, the leading bend segments are combined into one extra
/// [`BEND_GROUP_NAME`] group with [`WeightPolicy::Add`], listed first.
///
/// # Errors
///
/// Returns [`DeformError::InsufficientGeometry`] if the segment list is too
/// short (fewer than 2 segments, or fewer than the bend region plus one when
/// `with_frets`), or [`DeformError::IndexOutOfBounds`] if a segment indexes
/// past the vertex buffer.
pub fn vertex_groups(mesh: &TubeMesh, with_frets: bool) -> DeformResult<Vec<VertexGroup>> {
    let n = mesh.segment_count();
    let min = if with_frets {
        BEND_SEGMENT_COUNT + 1
    } else {
        2
    };
    if n < min {
        return Err(DeformError::InsufficientGeometry { min, actual: n });
    }
    check_indices(mesh)?;

    let bend_segments = if with_frets { BEND_SEGMENT_COUNT } else { 0 };
    let mut groups = Vec::with_capacity(n - bend_segments + usize::from(with_frets));

    if with_frets {
        let weights = mesh.segments[..bend_segments]
            .iter()
            .flat_map(|segment| segment.indices.iter().map(|&index| (index, 1.0)))
            .collect();
        groups.push(VertexGroup {
            name: BEND_GROUP_NAME.to_owned(),
            policy: WeightPolicy::Add,
            weights,
        });
    }

    for (i, segment) in mesh.segments[bend_segments..].iter().enumerate() {
        groups.push(VertexGroup {
            name: format!("Segment{i:02}"),
            policy: WeightPolicy::Replace,
            weights: segment.indices.iter().map(|&index| (index, 1.0)).collect(),
        });
    }

    Ok(groups)
}
