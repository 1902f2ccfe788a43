//! Core data types for the fretwork string-generation toolkit.
//!
//! This crate provides the foundational types shared by the generator crates:
//!
//! - [`StringParams`] - Validated generation parameters
//! - [`TubeMesh`] - A quad tube mesh that retains its cross-section rings
//! - [`Segment`] - One cross-sectional ring of vertex indices
//! - [`constants`] - Fixed scale and tuning constants
//!
//! # Units
//!
//! User-facing parameters (gauge, length) are in **inches**, matching how
//! string sets are labeled. Generated geometry is in scene units; the
//! conversion factors live in [`constants`].
//!
//! # Coordinate System
//!
//! The string runs along the **y axis**, nut end at `+y`, body end at `-y`,
//! centered on the origin. Cross sections span the x/z plane. Fret-press
//! deformation moves vertices in `-x`; vibration displaces bones laterally.
//!
//! # Example
//!
//! ```
//! use fretwork_types::StringParams;
//!
//! let params = StringParams::default();
//! assert!(params.validate().is_ok());
//! assert!(params.has_frets());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod constants;
mod error;
mod mesh;
mod params;

pub use error::{ParamError, ParamResult};
pub use mesh::{Segment, TubeMesh};
pub use params::StringParams;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
