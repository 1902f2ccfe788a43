//! Closed-form fret position math.
//!
//! Fret spacing follows the 12-tone equal-tempered rule: pressing fret `f`
//! shortens the vibrating length by the factor `2^(-f/12)`, so the fret sits
//! at fractional distance `1 - 2^(-f/12)` from the nut. Fret 12 is the
//! octave, exactly halfway down the string.

/// Fractional distance of fret `fret` from the nut, in `[0, 1)`.
///
/// Monotonically increasing in `fret`; `0` at the nut (fret 0), `0.5` at the
/// octave (fret 12).
///
/// # Example
///
/// ```
/// use fretwork_deform::fret_fraction;
///
/// assert_eq!(fret_fraction(0), 0.0);
/// assert!((fret_fraction(12) - 0.5).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)] // fret counts are bounded at 36
pub fn fret_fraction(fret: usize) -> f64 {
    1.0 - 2.0f64.powf(-(fret as f64) / 12.0)
}

/// Axial position of a segment after pressing at `fret`.
///
/// Every segment's distance from the nut (`y0 + half_length`) is compressed
/// by [`fret_fraction`], uniformly redistributing the segments over the
/// shortened vibrating length.
///
/// # Arguments
///
/// * `y0` - Rest position of the segment along the string axis
/// * `half_length` - Half the string length (the nut offset from the origin)
/// * `fret` - Fret index, 1-based
#[inline]
#[must_use]
pub fn fretted_y(y0: f64, half_length: f64, fret: usize) -> f64 {
    y0 - (y0 + half_length) * fret_fraction(fret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nut_is_at_zero() {
        assert_relative_eq!(fret_fraction(0), 0.0);
    }

    #[test]
    fn first_fret_value() {
        assert_relative_eq!(fret_fraction(1), 0.056_125_687_318_306_74, epsilon = 1e-12);
    }

    #[test]
    fn octave_is_halfway() {
        assert_relative_eq!(fret_fraction(12), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn fraction_is_monotonically_increasing() {
        for fret in 1..=36 {
            assert!(fret_fraction(fret) > fret_fraction(fret - 1));
        }
    }

    #[test]
    fn fretting_compresses_toward_fret() {
        let half = 0.3168;

        // The nut-end segment lands exactly on the fret position
        let y = fretted_y(half, half, 12);
        assert_relative_eq!(y, half - 2.0 * half * 0.5, epsilon = 1e-12);

        // The body-end segment does not move
        assert_relative_eq!(fretted_y(-half, half, 12), -half);
    }
}
