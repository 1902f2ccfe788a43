//! Generation parameters and their validation.

use crate::constants::{LENGTH_SCALE, RADIUS_SCALE};
use crate::error::{ParamError, ParamResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Allowed range for [`StringParams::vertex_count`].
pub const VERTEX_COUNT_RANGE: (usize, usize) = (4, 16);
/// Allowed range for [`StringParams::gauge`], in inches.
pub const GAUGE_RANGE: (f64, f64) = (0.008, 0.175);
/// Minimum [`StringParams::length`], in inches.
pub const MIN_LENGTH: f64 = 10.0;
/// Allowed range for [`StringParams::segment_count`].
pub const SEGMENT_COUNT_RANGE: (usize, usize) = (3, 40);
/// Allowed range for [`StringParams::fret_count`].
pub const FRET_COUNT_RANGE: (usize, usize) = (0, 36);

/// Parameters for one string generation call.
///
/// Values are immutable per call: every generator stage takes the same
/// record and identical parameters always produce identical output.
///
/// Defaults describe a typical wound guitar D string on a 24.75" scale.
///
/// # Example
///
/// ```
/// use fretwork_types::StringParams;
///
/// let params = StringParams::default()
///     .with_gauge(0.042)
///     .with_fret_count(22);
///
/// params.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StringParams {
    /// Number of vertices in each cross-section ring.
    pub vertex_count: usize,

    /// String gauge (diameter) in inches.
    pub gauge: f64,

    /// Scale length in inches.
    pub length: f64,

    /// Number of segments along the string. Extra geometry for animation;
    /// must match the armature bone layout.
    pub segment_count: usize,

    /// Number of frets. Zero disables fret shape keys and bend geometry.
    pub fret_count: usize,
}

impl Default for StringParams {
    fn default() -> Self {
        Self {
            vertex_count: 8,
            gauge: 0.056,
            length: 24.75,
            segment_count: 8,
            fret_count: 19,
        }
    }
}

impl StringParams {
    /// Set the cross-section vertex count.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Set the gauge in inches.
    #[must_use]
    pub const fn with_gauge(mut self, gauge: f64) -> Self {
        self.gauge = gauge;
        self
    }

    /// Set the scale length in inches.
    #[must_use]
    pub const fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Set the segment count.
    #[must_use]
    pub const fn with_segment_count(mut self, segment_count: usize) -> Self {
        self.segment_count = segment_count;
        self
    }

    /// Set the fret count. Zero disables fretting entirely.
    #[must_use]
    pub const fn with_fret_count(mut self, fret_count: usize) -> Self {
        self.fret_count = fret_count;
        self
    }

    /// Whether this string carries frets.
    ///
    /// A fretted string gets extra bend segments in the mesh plus fret and
    /// pressed shape keys; a fretless one is a plain tube.
    #[inline]
    #[must_use]
    pub const fn has_frets(&self) -> bool {
        self.fret_count != 0
    }

    /// String length converted to scene units.
    #[inline]
    #[must_use]
    pub fn length_units(&self) -> f64 {
        self.length * LENGTH_SCALE
    }

    /// Cross-section ring radius in scene units.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.gauge * RADIUS_SCALE
    }

    /// Check every parameter against its declared bound.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamError`] naming the first offending parameter.
    pub fn validate(&self) -> ParamResult<()> {
        check_count("vertex_count", self.vertex_count, VERTEX_COUNT_RANGE)?;
        check_finite("gauge", self.gauge)?;
        check_value("gauge", self.gauge, GAUGE_RANGE)?;
        check_finite("length", self.length)?;
        if self.length < MIN_LENGTH {
            return Err(ParamError::BelowMinimum {
                name: "length",
                min: MIN_LENGTH,
                value: self.length,
            });
        }
        check_count("segment_count", self.segment_count, SEGMENT_COUNT_RANGE)?;
        check_count("fret_count", self.fret_count, FRET_COUNT_RANGE)?;
        Ok(())
    }
}

fn check_count(name: &'static str, value: usize, (min, max): (usize, usize)) -> ParamResult<()> {
    if value < min || value > max {
        return Err(ParamError::CountOutOfRange {
            name,
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn check_value(name: &'static str, value: f64, (min, max): (f64, f64)) -> ParamResult<()> {
    if value < min || value > max {
        return Err(ParamError::ValueOutOfRange {
            name,
            min,
            max,
            value,
        });
    }
    Ok(())
}

fn check_finite(name: &'static str, value: f64) -> ParamResult<()> {
    if !value.is_finite() {
        return Err(ParamError::NotFinite { name, value });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        let params = StringParams::default();
        assert!(params.validate().is_ok());
        assert!(params.has_frets());
    }

    #[test]
    fn builders_set_fields() {
        let params = StringParams::default()
            .with_vertex_count(6)
            .with_gauge(0.010)
            .with_length(25.5)
            .with_segment_count(12)
            .with_fret_count(0);

        assert_eq!(params.vertex_count, 6);
        assert_relative_eq!(params.gauge, 0.010);
        assert_relative_eq!(params.length, 25.5);
        assert_eq!(params.segment_count, 12);
        assert!(!params.has_frets());
    }

    #[test]
    fn unit_conversion() {
        let params = StringParams::default();
        assert_relative_eq!(params.length_units(), 24.75 * 0.0256);
        assert_relative_eq!(params.radius(), 0.056 * 0.0128);
    }

    #[test]
    fn rejects_vertex_count_out_of_range() {
        let params = StringParams::default().with_vertex_count(3);
        assert!(matches!(
            params.validate(),
            Err(ParamError::CountOutOfRange {
                name: "vertex_count",
                ..
            })
        ));

        let params = StringParams::default().with_vertex_count(17);
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_gauge_out_of_range() {
        let params = StringParams::default().with_gauge(0.2);
        assert!(matches!(
            params.validate(),
            Err(ParamError::ValueOutOfRange { name: "gauge", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_gauge() {
        let params = StringParams::default().with_gauge(f64::NAN);
        assert!(matches!(
            params.validate(),
            Err(ParamError::NotFinite { name: "gauge", .. })
        ));
    }

    #[test]
    fn rejects_short_length() {
        let params = StringParams::default().with_length(9.0);
        assert!(matches!(
            params.validate(),
            Err(ParamError::BelowMinimum { name: "length", .. })
        ));
    }

    #[test]
    fn rejects_segment_and_fret_counts() {
        assert!(StringParams::default()
            .with_segment_count(2)
            .validate()
            .is_err());
        assert!(StringParams::default()
            .with_segment_count(41)
            .validate()
            .is_err());
        assert!(StringParams::default()
            .with_fret_count(37)
            .validate()
            .is_err());
    }

    #[test]
    fn fret_count_zero_is_valid() {
        let params = StringParams::default().with_fret_count(0);
        assert!(params.validate().is_ok());
        assert!(!params.has_frets());
    }
}
