//! Tube mesh assembly from chained cross-section segments.

use fretwork_types::constants::{BEND_SEGMENT_COUNT, BEND_SEGMENT_SPACING};
use fretwork_types::{Segment, StringParams, TubeMesh};

use crate::error::{MeshError, MeshResult};
use crate::segment::create_segment;

/// Build the string tube mesh from validated parameters.
///
/// The tube is centered on the origin, nut end at `+y`. The main body is
/// `segment_count + 1` equally spaced rings; a fretted string additionally
/// gets [`BEND_SEGMENT_COUNT`] closely spaced rings just above the nut end,
/// which later give the pressed shape key room to bend the string over the
/// fret crown.
///
/// Consecutive rings are bridged into quad faces with a fixed winding, so
/// face normals stay consistent along the whole tube.
///
/// # Errors
///
/// Returns [`MeshError::Param`] if any parameter is outside its declared
/// bound. Bridging cannot fail here because every ring is generated with the
/// same vertex count.
///
/// # Example
///
/// ```
/// use fretwork_mesh::build_tube;
/// use fretwork_types::StringParams;
///
/// let mesh = build_tube(&StringParams::default()).unwrap();
/// // 3 bend segments + 9 main segments, 8 vertices each
/// assert_eq!(mesh.segment_count(), 12);
/// assert_eq!(mesh.vertex_count(), 96);
/// assert_eq!(mesh.face_count(), 88);
/// ```
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
// Vertex counts are bounded by 16 * 44 rings, far below any cast limit
pub fn build_tube(params: &StringParams) -> MeshResult<TubeMesh> {
    params.validate()?;

    let length = params.length_units();
    let start_y = length / 2.0;
    let spacing = length / params.segment_count as f64;

    let bend_segments = if params.has_frets() {
        BEND_SEGMENT_COUNT
    } else {
        0
    };
    let total_segments = params.segment_count + 1 + bend_segments;
    let vertex_count = params.vertex_count;

    let mut mesh = TubeMesh::with_capacity(
        total_segments * vertex_count,
        (total_segments - 1) * vertex_count,
        total_segments,
    );

    let mut vertex_id = 0u32;
    let mut push_ring = |mesh: &mut TubeMesh, y: f64| {
        let (vertices, segment) = create_segment(vertex_id, vertex_count, params.gauge, y);
        vertex_id += vertex_count as u32;
        mesh.vertices.extend(vertices);
        mesh.segments.push(segment);
    };

    // Extra rings above the nut end enable bending; the spacing leaves just
    // enough room to avoid vertex merging in the host.
    for i in (1..=bend_segments).rev() {
        push_ring(&mut mesh, start_y + i as f64 * BEND_SEGMENT_SPACING);
    }

    for i in 0..=params.segment_count {
        push_ring(&mut mesh, start_y - i as f64 * spacing);
    }

    for i in 0..mesh.segments.len() - 1 {
        let faces = bridge_faces(&mesh.segments[i], &mesh.segments[i + 1])?;
        mesh.faces.extend(faces);
    }

    Ok(mesh)
}

/// Bridge two segments of equal vertex count into a ring of quad faces.
///
/// For each ring position `i` the quad is
/// `[a[i], a[i+1], b[i+1], b[i]]` (indices mod ring size). The winding is
/// fixed; reversing it would flip the face normals of the whole tube.
///
/// # Errors
///
/// Returns [`MeshError::DimensionMismatch`] if the segments differ in vertex
/// count.
pub fn bridge_faces(start: &Segment, end: &Segment) -> MeshResult<Vec<[u32; 4]>> {
    if start.len() != end.len() {
        return Err(MeshError::DimensionMismatch {
            left: start.len(),
            right: end.len(),
        });
    }

    let n = start.len();
    let mut faces = Vec::with_capacity(n);

    for i in 0..n {
        let j = (i + 1) % n;
        faces.push([
            start.indices[i],
            start.indices[j],
            end.indices[j],
            end.indices[i],
        ]);
    }

    Ok(faces)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fretwork_types::constants::LENGTH_SCALE;

    fn reference_params() -> StringParams {
        StringParams::default()
    }

    #[test]
    fn fretted_tube_counts() {
        let mesh = build_tube(&reference_params()).unwrap();

        assert_eq!(mesh.segment_count(), 12);
        assert_eq!(mesh.vertex_count(), 8 * 12);
        assert_eq!(mesh.face_count(), 8 * 11);
    }

    #[test]
    fn fretless_tube_counts() {
        let params = reference_params().with_fret_count(0);
        let mesh = build_tube(&params).unwrap();

        assert_eq!(mesh.segment_count(), 9);
        assert_eq!(mesh.vertex_count(), 72);
        assert_eq!(mesh.face_count(), 64);
    }

    #[test]
    fn vertex_count_matches_segments() {
        for segment_count in [3, 8, 40] {
            let params = reference_params().with_segment_count(segment_count);
            let mesh = build_tube(&params).unwrap();
            assert_eq!(
                mesh.vertex_count(),
                params.vertex_count * mesh.segment_count()
            );
        }
    }

    #[test]
    fn tube_is_centered_on_origin() {
        let params = reference_params();
        let mesh = build_tube(&params).unwrap();
        let half = params.length_units() / 2.0;

        // First main segment sits at +length/2, last at -length/2
        let first_main = &mesh.segments[3];
        let last = mesh.segments.last().unwrap();
        assert_relative_eq!(first_main.y, half);
        assert_relative_eq!(last.y, -half);
        assert_relative_eq!(half, 24.75 * LENGTH_SCALE / 2.0);
    }

    #[test]
    fn bend_segments_sit_above_nut() {
        let params = reference_params();
        let mesh = build_tube(&params).unwrap();
        let start_y = params.length_units() / 2.0;

        assert_relative_eq!(mesh.segments[0].y, start_y + 3.0 * BEND_SEGMENT_SPACING);
        assert_relative_eq!(mesh.segments[1].y, start_y + 2.0 * BEND_SEGMENT_SPACING);
        assert_relative_eq!(mesh.segments[2].y, start_y + BEND_SEGMENT_SPACING);
    }

    #[test]
    fn segment_y_is_monotonically_decreasing() {
        let mesh = build_tube(&reference_params()).unwrap();
        for pair in mesh.segments.windows(2) {
            assert!(pair[0].y > pair[1].y);
        }
    }

    #[test]
    fn face_indices_in_bounds() {
        let mesh = build_tube(&reference_params()).unwrap();
        let n = mesh.vertex_count() as u32;
        for face in &mesh.faces {
            for &index in face {
                assert!(index < n);
            }
        }
    }

    #[test]
    fn winding_is_consistent_across_bridges() {
        // Each quad's normal dotted with its outward radial direction must
        // keep the sign established by the first bridged pair.
        let mesh = build_tube(&reference_params()).unwrap();

        let mut reference_sign = 0.0f64;
        for face in &mesh.faces {
            let p: Vec<_> = face.iter().map(|&i| mesh.vertices[i as usize]).collect();
            let normal = (p[1] - p[0]).cross(&(p[3] - p[0]));
            let radial = nalgebra::Vector3::new(
                (p[0].x + p[2].x) / 2.0,
                0.0,
                (p[0].z + p[2].z) / 2.0,
            );
            let sign = normal.dot(&radial).signum();

            if reference_sign == 0.0 {
                reference_sign = sign;
            } else {
                assert_eq!(sign, reference_sign);
            }
        }
    }

    #[test]
    fn bridge_rejects_mismatched_segments() {
        let a = Segment {
            indices: vec![0, 1, 2, 3],
            y: 0.0,
        };
        let b = Segment {
            indices: vec![4, 5, 6],
            y: -0.1,
        };

        let result = bridge_faces(&a, &b);
        assert!(matches!(
            result,
            Err(MeshError::DimensionMismatch { left: 4, right: 3 })
        ));
    }

    #[test]
    fn bridge_wraps_around_ring() {
        let a = Segment {
            indices: vec![0, 1, 2],
            y: 0.0,
        };
        let b = Segment {
            indices: vec![3, 4, 5],
            y: -0.1,
        };

        let faces = bridge_faces(&a, &b).unwrap();
        assert_eq!(faces, vec![[0, 1, 4, 3], [1, 2, 5, 4], [2, 0, 3, 5]]);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = reference_params().with_vertex_count(2);
        assert!(matches!(build_tube(&params), Err(MeshError::Param(_))));
    }
}
