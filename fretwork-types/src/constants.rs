//! Fixed scale and tuning constants.
//!
//! The displacement biases in this module are empirically chosen to match
//! reference visuals. Treat them as fixed tuning values, not derived ones.

/// Conversion from inches to scene units, applied to the string length.
pub const LENGTH_SCALE: f64 = 0.0256;

/// Ring radius per inch of gauge.
///
/// Gauge is a diameter in inches, so the radius is half of it, converted to
/// scene units (hence `0.0256 / 2`).
pub const RADIUS_SCALE: f64 = 0.0128;

/// Number of closely spaced rings emitted at the nut end when frets are
/// enabled, giving the mesh freedom to bend under fret-press deformation.
pub const BEND_SEGMENT_COUNT: usize = 3;

/// Axial spacing between bend segments. Small enough to read as a single
/// ring, large enough to avoid merge problems in the host.
pub const BEND_SEGMENT_SPACING: f64 = 0.0001;

/// Lateral travel of the string when pressed down onto a fret.
pub const STRING_HEIGHT: f64 = 0.003;

/// Extra press depth applied to the bend segments so they clear the fret
/// crown instead of resting exactly on it.
pub const PRESS_OVERSHOOT: f64 = 0.0003;

/// Axial bias nudging the second segment toward the fret crown, where the
/// finger would press the string.
pub const FRET_BIAS_FIRST: f64 = 0.008;

/// Axial bias for the third segment.
pub const FRET_BIAS_SECOND: f64 = 0.003;

/// Bone tail offset along +z. Visualization only; carries no animation
/// semantics.
pub const BONE_TAIL_LENGTH: f64 = 0.01;
