//! Quad tube mesh with retained cross-section segments.

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One cross-sectional ring of the tube at a fixed axial position.
///
/// Segments are the link between the mesh and everything generated after it:
/// shape keys displace whole segments, vertex groups are built per segment,
/// and bones are laid out to match segment positions index-for-index.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// Vertex indices forming the ring, in angular order.
    pub indices: Vec<u32>,

    /// Rest position of the ring along the string axis.
    pub y: f64,
}

impl Segment {
    /// Number of vertices in the ring.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the ring has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// A tube mesh built from bridged cross-section rings.
///
/// Faces are quads with a fixed winding so adjacent bridges produce
/// consistent normals. The segment list is ordered nut end first and is kept
/// after construction; downstream stages rely on it.
///
/// # Example
///
/// ```
/// use fretwork_types::{Point3, Segment, TubeMesh};
///
/// let mut mesh = TubeMesh::new();
/// mesh.vertices.push(Point3::new(0.0, 0.3, 0.0));
/// mesh.segments.push(Segment { indices: vec![0], y: 0.3 });
///
/// assert_eq!(mesh.vertex_count(), 1);
/// assert_eq!(mesh.segment_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TubeMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Quad faces as indices into the vertex array.
    pub faces: Vec<[u32; 4]>,

    /// Cross-section rings, ordered from nut end to body end.
    pub segments: Vec<Segment>,
}

impl TubeMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            segments: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize, segment_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            segments: Vec::with_capacity(segment_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of quad faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of cross-section segments.
    #[inline]
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Position of a vertex, if the index is in bounds.
    #[inline]
    #[must_use]
    pub fn position(&self, index: u32) -> Option<&Point3<f64>> {
        self.vertices.get(index as usize)
    }
}
