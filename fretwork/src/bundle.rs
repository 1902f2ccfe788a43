//! One-call generation of the complete string data set.

use fretwork_deform::{fret_shape_keys, vertex_groups, ShapeKey, VertexGroup};
use fretwork_mesh::build_tube;
use fretwork_rig::{
    build_armature, vibration_actions, Bone, Timing, VibrationAction, VibrationConfig,
};
use fretwork_types::{StringParams, TubeMesh};
use tracing::{debug, info};

use crate::error::StringResult;

/// Everything the scene-graph binding needs to assemble one animated string:
/// mesh buffers, skin weights, shape keys, bone rest layout, vibration
/// actions and the timing the curves were sampled for.
///
/// The bundle is plain data; attaching it to scene objects (and any undo or
/// mode handling that involves) is entirely the binding's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct StringBundle {
    /// The tube mesh with its segment list.
    pub mesh: TubeMesh,

    /// Vertex groups for armature binding; names match bone names.
    pub groups: Vec<VertexGroup>,

    /// Ordered shape keys, basis first. Empty for a fretless string.
    pub shape_keys: Vec<ShapeKey>,

    /// Bone rest layout, `segment_count + 1` bones.
    pub bones: Vec<Bone>,

    /// Vibration animations, one per pluck direction.
    pub actions: Vec<VibrationAction>,

    /// Scene timing the animation curves assume.
    pub timing: Timing,
}

/// Material slot names the binding should create for the mesh.
///
/// A fretted string gets separate slots for the vibrating and bent sections
/// so their textures can be rescaled as the string is pressed to different
/// frets without stretching.
#[must_use]
pub fn material_slot_names(has_frets: bool) -> Vec<String> {
    let mut names = vec!["MatString".to_owned()];
    if has_frets {
        for i in 0..2 {
            names.push(format!("MatString{i}"));
        }
    }
    names
}

/// Generate a complete string bundle with default timing and vibration.
///
/// # Errors
///
/// Returns a [`StringError`](crate::StringError) if any parameter is out of
/// bounds or any stage fails. No partial output is produced.
///
/// # Example
///
/// ```
/// use fretwork::generate_string;
/// use fretwork_types::StringParams;
///
/// let bundle = generate_string(&StringParams::default()).unwrap();
///
/// assert_eq!(bundle.bones.len(), 9);
/// assert_eq!(bundle.shape_keys.len(), 21);
/// ```
pub fn generate_string(params: &StringParams) -> StringResult<StringBundle> {
    generate_string_with(params, Timing::default(), VibrationConfig::default())
}

/// Generate a complete string bundle with explicit timing and vibration
/// configuration.
///
/// # Errors
///
/// Returns a [`StringError`](crate::StringError) if any parameter is out of
/// bounds or any stage fails.
pub fn generate_string_with(
    params: &StringParams,
    timing: Timing,
    vibration: VibrationConfig,
) -> StringResult<StringBundle> {
    params.validate()?;

    let mesh = build_tube(params)?;
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        segments = mesh.segment_count(),
        "built tube mesh"
    );

    let groups = vertex_groups(&mesh, params.has_frets())?;

    let shape_keys = if params.has_frets() {
        fret_shape_keys(&mesh, params.length_units(), params.fret_count)?
    } else {
        Vec::new()
    };

    let bones = build_armature(params.length_units(), params.segment_count)?;
    let actions = vibration_actions(bones.len(), &timing, &vibration)?;

    info!(
        gauge = params.gauge,
        frets = params.fret_count,
        bones = bones.len(),
        shape_keys = shape_keys.len(),
        "generated string bundle"
    );

    Ok(StringBundle {
        mesh,
        groups,
        shape_keys,
        bones,
        actions,
        timing,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn material_slots() {
        assert_eq!(material_slot_names(false), vec!["MatString"]);
        assert_eq!(
            material_slot_names(true),
            vec!["MatString", "MatString0", "MatString1"]
        );
    }

    #[test]
    fn fretless_bundle_has_no_keys() {
        let params = StringParams::default().with_fret_count(0);
        let bundle = generate_string(&params).unwrap();

        assert!(bundle.shape_keys.is_empty());
        assert_eq!(bundle.groups.len(), 9);
    }

    #[test]
    fn invalid_params_fail_before_generation() {
        let params = StringParams::default().with_segment_count(0);
        assert!(generate_string(&params).is_err());
    }
}
