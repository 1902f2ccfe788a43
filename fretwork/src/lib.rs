//! Procedural generator for animated musical-instrument strings.
//!
//! This umbrella crate re-exports the generator stack and provides the
//! one-call composition [`generate_string`], which turns a validated
//! parameter record into the complete plain-data bundle a scene-graph
//! binding attaches to host objects: tube mesh, skin weight groups, fret
//! shape keys, bone rest layout and damped-standing-wave vibration actions.
//!
//! # Quick Start
//!
//! ```
//! use fretwork::generate_string;
//! use fretwork_types::StringParams;
//!
//! let params = StringParams::default()
//!     .with_gauge(0.042)
//!     .with_fret_count(22);
//!
//! let bundle = generate_string(&params).unwrap();
//!
//! assert_eq!(bundle.bones.len(), params.segment_count + 1);
//! assert_eq!(bundle.shape_keys.len(), params.fret_count + 2);
//! assert_eq!(bundle.actions.len(), 2);
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Parameters, mesh data types, shared constants
//! - [`mesh`] - Tube mesh construction from cross-section segments
//! - [`deform`] - Fret math, shape keys, vertex groups
//! - [`rig`] - Armature layout and vibration keyframe synthesis
//!
//! # Determinism
//!
//! Generation is pure and bounded: identical parameters always yield
//! identical bundles, and nothing is retained between calls.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bundle;
mod error;

pub use bundle::{generate_string, generate_string_with, material_slot_names, StringBundle};
pub use error::{StringError, StringResult};

/// Core data types: parameters, mesh, constants.
pub use fretwork_types as types;

/// Tube mesh construction.
pub use fretwork_mesh as mesh;

/// Fret deformation synthesis.
pub use fretwork_deform as deform;

/// Armature and animation synthesis.
pub use fretwork_rig as rig;
