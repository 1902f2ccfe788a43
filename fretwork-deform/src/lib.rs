//! Fret deformation synthesis for string meshes.
//!
//! Given a tube mesh with its segment list intact, this crate produces the
//! two data sets the host needs to make the string playable:
//!
//! - **Shape keys** ([`fret_shape_keys`]): an ordered list of deformation
//!   targets - the basis, a lateral `Pressed` key, and one axial key per
//!   fret following the 12-tone equal-tempered spacing law ([`fret_fraction`]).
//! - **Vertex groups** ([`vertex_groups`]): per-segment weight groups whose
//!   names line up with the armature bones, plus a combined group for the
//!   bend segments of a fretted string.
//!
//! # Example
//!
//! ```
//! use fretwork_deform::{fret_shape_keys, vertex_groups};
//! use fretwork_mesh::build_tube;
//! use fretwork_types::StringParams;
//!
//! let params = StringParams::default();
//! let mesh = build_tube(&params).unwrap();
//!
//! let keys = fret_shape_keys(&mesh, params.length_units(), params.fret_count).unwrap();
//! let groups = vertex_groups(&mesh, params.has_frets()).unwrap();
//!
//! assert_eq!(keys.len(), params.fret_count + 2);
//! assert_eq!(groups.len(), params.segment_count + 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod fret;
mod groups;
mod keys;

pub use error::{DeformError, DeformResult};
pub use fret::{fret_fraction, fretted_y};
pub use groups::{vertex_groups, VertexGroup, WeightPolicy, BEND_GROUP_NAME};
pub use keys::{fret_shape_keys, ShapeKey, BASIS_KEY_NAME, PRESSED_KEY_NAME};
