//! Tube mesh construction for instrument strings.
//!
//! Builds the cylindrical string mesh as a chain of circular cross-section
//! rings ("segments") bridged into quad faces, with extra closely spaced
//! rings at the nut end when the string has frets.
//!
//! The returned [`TubeMesh`](fretwork_types::TubeMesh) keeps its segment
//! list: the deformation and rig crates index into it to stay aligned with
//! the geometry.
//!
//! # Example
//!
//! ```
//! use fretwork_mesh::build_tube;
//! use fretwork_types::StringParams;
//!
//! let params = StringParams::default().with_fret_count(0);
//! let mesh = build_tube(&params).unwrap();
//!
//! assert_eq!(mesh.segment_count(), params.segment_count + 1);
//! assert_eq!(mesh.vertex_count(), params.vertex_count * mesh.segment_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod segment;
mod tube;

pub use error::{MeshError, MeshResult};
pub use segment::create_segment;
pub use tube::{bridge_faces, build_tube};
