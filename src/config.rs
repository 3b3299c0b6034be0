//! Tuning Configuration
//!
//! Every coefficient that shapes the flight is enumerated here as one
//! immutable struct. Defaults are the shipped tuning; any field can be
//! overridden independently via struct-update syntax or a partial JSON
//! preset (all fields carry `#[serde(default)]` semantics).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, RigError};

/// Parametrization of the Catmull-Rom curve built over the control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveMode {
    /// Uniform knot spacing; honors [`TuningConfig::tension`] as a cardinal
    /// coefficient. Can overshoot when control points are unevenly spaced.
    Uniform,
    /// Centripetal parametrization (alpha = 0.5). No cusps, no overshoot on
    /// uneven spacing; the default for authored flight paths.
    Centripetal,
    /// Chordal parametrization (alpha = 1.0).
    Chordal,
}

/// Immutable coefficient set for the whole rig.
///
/// Constructed once, validated once, never mutated. Angle maxima are in
/// radians, smoothing "rates" are per-second (multiplied by the frame delta),
/// smoothing "factors" are per-frame lerp fractions in (0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    // === Curve ===
    /// Interpolation mode for the authored path.
    pub curve_mode: CurveMode,
    /// Cardinal tension, only consulted in [`CurveMode::Uniform`].
    pub tension: f32,
    /// Number of precomputed curve samples; lookups lerp between neighbors.
    pub curve_resolution: usize,

    // === Progress ===
    /// Rate at which animated progress chases the raw scroll value, per
    /// second. Higher tracks tighter; the effective per-frame fraction is
    /// `min(1, delta * progress_smoothing)`.
    pub progress_smoothing: f32,
    /// How many samples past the current one the turn anticipation looks.
    pub lookahead_samples: usize,

    // === Bank / pitch / yaw targets ===
    /// Nominal maximum roll, radians.
    pub max_bank_angle: f32,
    /// Multiplier applied on top of `max_bank_angle` when converting the
    /// look-ahead turn angle into a bank target.
    pub bank_gain: f32,
    /// When true, the post-gain bank target is clamped back into
    /// `±max_bank_angle`. The shipped behavior leaves it unclamped.
    pub clamp_bank: bool,
    /// Maximum pitch, radians.
    pub max_pitch_angle: f32,
    /// Scale from per-sample elevation change to pitch target.
    pub elevation_influence: f32,
    /// Scale from heading-change rate to the nose-wag yaw target.
    pub yaw_gain: f32,
    /// Whether the composed rotation includes the yaw component. Yaw is
    /// always computed and published either way.
    pub include_yaw_in_rotation: bool,

    // === Per-frame smoothing factors (not delta-scaled) ===
    /// Bank lerp fraction per frame.
    pub bank_smoothing: f32,
    /// Pitch lerp fraction per frame.
    pub pitch_smoothing: f32,
    /// Yaw lerp fraction per frame.
    pub yaw_smoothing: f32,
    /// Slerp fraction toward the composed target rotation per frame.
    pub rotation_smoothing: f32,
    /// Lerp fraction toward the sampled curve position per frame.
    pub position_smoothing: f32,

    // === Camera ===
    /// Chase offset in the vehicle's local frame, rotated by the current
    /// orientation each frame.
    pub camera_offset: Vec3,
    /// Rate for the trailing camera position and look-at, per second
    /// (delta-scaled, unlike the angle factors above).
    pub camera_smoothing: f32,

    // === Debug ===
    /// Emit a `log::debug!` line with angles, position and axes every N
    /// frames. Zero disables the emission entirely.
    pub debug_log_every: u32,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            curve_mode: CurveMode::Centripetal,
            tension: 0.5,
            curve_resolution: 4000,

            progress_smoothing: 2.0,
            lookahead_samples: 60,

            max_bank_angle: std::f32::consts::FRAC_PI_3,
            bank_gain: 1.5,
            clamp_bank: false,
            max_pitch_angle: 0.5,
            elevation_influence: 2.0,
            yaw_gain: 4.0,
            include_yaw_in_rotation: false,

            bank_smoothing: 0.08,
            pitch_smoothing: 0.08,
            yaw_smoothing: 0.1,
            rotation_smoothing: 0.12,
            position_smoothing: 0.25,

            camera_offset: Vec3::new(0.0, 2.5, 8.0),
            camera_smoothing: 3.0,

            debug_log_every: 0,
        }
    }
}

impl TuningConfig {
    /// Checks every coefficient against its valid domain.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("tension", self.tension),
            ("bank_gain", self.bank_gain),
            ("elevation_influence", self.elevation_influence),
            ("yaw_gain", self.yaw_gain),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(RigError::InvalidConfig {
                    reason: format!("{name} must be finite, got {value}"),
                });
            }
        }

        // Angle maxima feed `f32::clamp(-max, max)` every frame; a negative
        // maximum would panic there, so it must never survive construction.
        let angle_maxima = [
            ("max_bank_angle", self.max_bank_angle),
            ("max_pitch_angle", self.max_pitch_angle),
        ];
        for (name, value) in angle_maxima {
            if !(value.is_finite() && value >= 0.0) {
                return Err(RigError::InvalidConfig {
                    reason: format!("{name} must be finite and non-negative, got {value}"),
                });
            }
        }

        // A non-positive rate inverts the chase and drives state away from
        // its target instead of toward it.
        let rates = [
            ("progress_smoothing", self.progress_smoothing),
            ("camera_smoothing", self.camera_smoothing),
        ];
        for (name, value) in rates {
            if !(value.is_finite() && value > 0.0) {
                return Err(RigError::InvalidConfig {
                    reason: format!("{name} must be finite and positive, got {value}"),
                });
            }
        }

        let fractions = [
            ("bank_smoothing", self.bank_smoothing),
            ("pitch_smoothing", self.pitch_smoothing),
            ("yaw_smoothing", self.yaw_smoothing),
            ("rotation_smoothing", self.rotation_smoothing),
            ("position_smoothing", self.position_smoothing),
        ];
        for (name, value) in fractions {
            if !(value.is_finite() && value > 0.0 && value <= 1.0) {
                return Err(RigError::InvalidConfig {
                    reason: format!("{name} must be in (0, 1], got {value}"),
                });
            }
        }

        if self.curve_resolution < 2 {
            return Err(RigError::InvalidConfig {
                reason: format!(
                    "curve_resolution must be at least 2, got {}",
                    self.curve_resolution
                ),
            });
        }
        if self.lookahead_samples == 0 {
            return Err(RigError::InvalidConfig {
                reason: "lookahead_samples must be at least 1".to_string(),
            });
        }
        if !self.camera_offset.is_finite() {
            return Err(RigError::InvalidConfig {
                reason: format!("camera_offset must be finite, got {}", self.camera_offset),
            });
        }
        Ok(())
    }
}
