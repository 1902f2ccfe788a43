//! Damped standing-wave keyframe synthesis.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RigError, RigResult};
use crate::params::{Timing, VibrationConfig};

/// Initial pluck direction of a vibration action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PluckDirection {
    /// Upstroke.
    Up,
    /// Downstroke.
    Down,
}

impl PluckDirection {
    /// Sign applied to the fundamental mode.
    #[inline]
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Up => -1.0,
            Self::Down => 1.0,
        }
    }

    /// Action name exposed to the host for this direction.
    #[inline]
    #[must_use]
    pub const fn action_name(self) -> &'static str {
        match self {
            Self::Up => "StringVibrationUp",
            Self::Down => "StringVibrationDown",
        }
    }
}

/// One keyframe sample: lateral offset at an integer frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keyframe {
    /// Frame number.
    pub frame: u32,

    /// Lateral offset from the bone's rest position.
    pub value: f64,
}

/// Keyframe curve for one bone, sorted ascending by frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoneCurve {
    /// Index of the bone this curve drives.
    pub bone_index: usize,

    /// Keyframe samples in frame order.
    pub keyframes: Vec<Keyframe>,
}

/// A complete vibration animation for one pluck direction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VibrationAction {
    /// Action name exposed to the host.
    pub name: String,

    /// Pluck direction this action animates.
    pub direction: PluckDirection,

    /// One curve per bone, in bone order.
    pub curves: Vec<BoneCurve>,
}

/// Superposition of two standing-wave modes at spatial phase `x` and frame
/// `t`: a fundamental-like mode and a first overtone at twice the frequency
/// and a quarter of the amplitude.
fn standing_wave(direction: f64, x: f64, t: f64) -> f64 {
    direction * (t * PI / 4.0).sin() * (0.5 * x).sin() + 0.25 * (t * PI / 2.0).sin() * x.sin()
}

/// Synthesize the two vibration actions (upstroke and downstroke).
///
/// For every bone the curve starts and ends at the rest offset (0.0), so the
/// animation loops cleanly. Interior bones additionally get one sample per
/// frame on `[frame_start + hold_frames, frame_end)`:
///
/// ```text
/// x = i / bone_count * 2π
/// offset(t) = amplitude · e^(-t / dampening) · standing_wave(direction, x, t)
/// ```
///
/// The two endpoint bones stay pinned at rest, matching the string being
/// anchored at nut and bridge.
///
/// # Errors
///
/// Returns an error for fewer than 2 bones, an empty frame range, or a
/// non-positive dampening.
///
/// # Example
///
/// ```
/// use fretwork_rig::{vibration_actions, Timing, VibrationConfig};
///
/// let actions =
///     vibration_actions(9, &Timing::default(), &VibrationConfig::default()).unwrap();
///
/// assert_eq!(actions.len(), 2);
/// assert_eq!(actions[0].curves.len(), 9);
/// ```
#[allow(clippy::cast_precision_loss)] // bone and frame counts are small
pub fn vibration_actions(
    bone_count: usize,
    timing: &Timing,
    config: &VibrationConfig,
) -> RigResult<Vec<VibrationAction>> {
    timing.validate()?;
    config.validate()?;
    if bone_count < 2 {
        return Err(RigError::TooFewBones {
            min: 2,
            actual: bone_count,
        });
    }

    let wave_start = timing.frame_start.saturating_add(config.hold_frames);

    let actions = [PluckDirection::Up, PluckDirection::Down]
        .into_iter()
        .map(|direction| {
            let curves = (0..bone_count)
                .map(|bone_index| {
                    let mut keyframes = vec![Keyframe {
                        frame: timing.frame_start,
                        value: 0.0,
                    }];

                    if bone_index > 0 && bone_index < bone_count - 1 {
                        let x = bone_index as f64 / bone_count as f64 * 2.0 * PI;
                        for frame in wave_start..timing.frame_end {
                            let t = f64::from(frame);
                            let wave = standing_wave(direction.factor(), x, t);
                            keyframes.push(Keyframe {
                                frame,
                                value: config.amplitude * (-t / config.dampening).exp() * wave,
                            });
                        }
                    }

                    keyframes.push(Keyframe {
                        frame: timing.frame_end,
                        value: 0.0,
                    });

                    BoneCurve {
                        bone_index,
                        keyframes,
                    }
                })
                .collect();

            VibrationAction {
                name: direction.action_name().to_owned(),
                direction,
                curves,
            }
        })
        .collect();

    Ok(actions)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_actions() -> Vec<VibrationAction> {
        vibration_actions(9, &Timing::default(), &VibrationConfig::default()).unwrap()
    }

    #[test]
    fn two_actions_with_expected_names() {
        let actions = reference_actions();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].name, "StringVibrationUp");
        assert_eq!(actions[1].name, "StringVibrationDown");
    }

    #[test]
    fn endpoints_are_pinned_to_rest() {
        for action in reference_actions() {
            for curve in &action.curves {
                let first = curve.keyframes.first().unwrap();
                let last = curve.keyframes.last().unwrap();
                assert_eq!(first.frame, 1);
                assert_relative_eq!(first.value, 0.0);
                assert_eq!(last.frame, 100);
                assert_relative_eq!(last.value, 0.0);
            }
        }
    }

    #[test]
    fn endpoint_bones_never_move() {
        for action in reference_actions() {
            for curve in [&action.curves[0], &action.curves[8]] {
                assert_eq!(curve.keyframes.len(), 2);
            }
        }
    }

    #[test]
    fn interior_bones_sample_every_wave_frame() {
        let actions = reference_actions();
        let curve = &actions[0].curves[4];

        // Rest key + frames 6..100 + end key
        assert_eq!(curve.keyframes.len(), 2 + (100 - 6));
        assert_eq!(curve.keyframes[1].frame, 6);
        assert_eq!(curve.keyframes[curve.keyframes.len() - 2].frame, 99);
    }

    #[test]
    fn keyframes_are_sorted_by_frame() {
        for action in reference_actions() {
            for curve in &action.curves {
                for pair in curve.keyframes.windows(2) {
                    assert!(pair[0].frame < pair[1].frame);
                }
            }
        }
    }

    #[test]
    fn decay_envelope_bounds_every_sample() {
        // |wave| <= 1.25, so the envelope is 1.25 * amplitude * e^(-t/40)
        let config = VibrationConfig::default();
        for action in reference_actions() {
            for curve in &action.curves {
                for key in &curve.keyframes {
                    let envelope =
                        1.25 * config.amplitude * (-f64::from(key.frame) / config.dampening).exp();
                    assert!(key.value.abs() <= envelope + 1e-15);
                }
            }
        }
    }

    #[test]
    fn directions_mirror_the_fundamental() {
        let actions = reference_actions();
        let up = &actions[0].curves[4].keyframes[10];
        let down = &actions[1].curves[4].keyframes[10];
        assert_eq!(up.frame, down.frame);

        let t = f64::from(up.frame);
        let x = 4.0 / 9.0 * 2.0 * PI;
        let overtone = 0.25 * (t * PI / 2.0).sin() * x.sin();
        let envelope = 0.002 * (-t / 40.0).exp();

        // Up and down share the overtone term and flip the fundamental
        assert_relative_eq!(
            up.value + down.value,
            2.0 * envelope * overtone,
            epsilon = 1e-15
        );
    }

    #[test]
    fn deterministic_output() {
        assert_eq!(reference_actions(), reference_actions());
    }

    #[test]
    fn rejects_too_few_bones() {
        let result = vibration_actions(1, &Timing::default(), &VibrationConfig::default());
        assert!(matches!(
            result,
            Err(RigError::TooFewBones { min: 2, actual: 1 })
        ));
    }

    #[test]
    fn rejects_inverted_frame_range() {
        let timing = Timing {
            frame_start: 100,
            frame_end: 1,
            fps: 60,
        };
        let result = vibration_actions(9, &timing, &VibrationConfig::default());
        assert!(matches!(result, Err(RigError::InvalidFrameRange { .. })));
    }
}
