//! Cross-section ring generation.

use fretwork_types::constants::RADIUS_SCALE;
use fretwork_types::Segment;
use nalgebra::Point3;

/// Generate one circular cross-section ring at the given axial position.
///
/// The ring lies in the x/z plane with radius `RADIUS_SCALE * gauge`. Vertex
/// `i` sits at angle `i * 2π / vertex_count`, so rings with equal vertex
/// counts always have their vertices in angular correspondence, which the
/// bridging step relies on.
///
/// # Arguments
///
/// * `vertex_id_offset` - Index of the first vertex of this ring in the
///   mesh-wide vertex buffer
/// * `vertex_count` - Number of vertices in the ring
/// * `gauge` - String gauge in inches
/// * `y` - Axial position of the ring
///
/// # Returns
///
/// The ring's vertex positions and the [`Segment`] indexing them.
///
/// # Example
///
/// ```
/// use fretwork_mesh::create_segment;
///
/// let (vertices, segment) = create_segment(0, 8, 0.056, 0.3);
/// assert_eq!(vertices.len(), 8);
/// assert_eq!(segment.indices, (0..8).collect::<Vec<u32>>());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
// Ring sizes are bounded at 16 vertices, far below any cast limit
pub fn create_segment(
    vertex_id_offset: u32,
    vertex_count: usize,
    gauge: f64,
    y: f64,
) -> (Vec<Point3<f64>>, Segment) {
    let radius = RADIUS_SCALE * gauge;
    let step = 2.0 * std::f64::consts::PI / vertex_count as f64;

    let mut vertices = Vec::with_capacity(vertex_count);
    let mut indices = Vec::with_capacity(vertex_count);

    for i in 0..vertex_count {
        let alpha = i as f64 * step;
        vertices.push(Point3::new(radius * alpha.cos(), y, radius * alpha.sin()));
        indices.push(vertex_id_offset + i as u32);
    }

    (vertices, Segment { indices, y })
}
