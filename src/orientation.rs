//! Orientation Targets
//!
//! Turns three curve samples (current, next, look-ahead) into raw target
//! angles and a base look rotation. Banking anticipates the turn the
//! look-ahead point reveals, pitch follows the local slope, yaw adds a nose
//! wag proportional to the heading-change rate. All outputs are unsmoothed;
//! smoothing belongs to [`crate::motion`].

use glam::{Mat3, Quat, Vec3};

use crate::config::TuningConfig;

const WORLD_UP: Vec3 = Vec3::Y;
const EPS_SQ: f32 = 1e-10;

/// Raw per-frame orientation targets.
#[derive(Debug, Clone, Copy)]
pub struct OrientationTargets {
    /// Unit direction of travel.
    pub forward: Vec3,
    /// Unit lateral axis (forward x world-up).
    pub right: Vec3,
    /// Unit local up (right x forward).
    pub up: Vec3,
    /// Target roll, radians. Sign encodes turn direction.
    pub bank: f32,
    /// Target pitch, radians, clamped to the configured maximum.
    pub pitch: f32,
    /// Target yaw, radians.
    pub yaw: f32,
    /// Look rotation aligning -Z with `forward` under `WORLD_UP`.
    pub base_rotation: Quat,
}

/// Computes targets from the bracketing curve samples.
///
/// `last_forward` is the previous frame's travel direction; it substitutes
/// for any direction that degenerates (coincident samples, vertical travel)
/// so no NaN ever leaves this function.
#[must_use]
pub fn solve(
    cur: Vec3,
    next: Vec3,
    future: Vec3,
    last_forward: Vec3,
    cfg: &TuningConfig,
) -> OrientationTargets {
    let forward = dir_or(next - cur, last_forward);
    let right = dir_or(forward.cross(WORLD_UP), Vec3::X);
    let up = dir_or(right.cross(forward), WORLD_UP);

    let future_dir = dir_or(future - cur, forward);
    let horizontal_future = dir_or(Vec3::new(future_dir.x, 0.0, future_dir.z), forward);

    // Unsigned turn toward the look-ahead heading; the lateral dot supplies
    // the left/right sign.
    let turn = forward.dot(horizontal_future).clamp(-1.0, 1.0).acos();
    let turn_sign = right.dot(future_dir).signum();
    let mut bank = -turn_sign * turn * cfg.max_bank_angle * cfg.bank_gain;
    if cfg.clamp_bank {
        bank = bank.clamp(-cfg.max_bank_angle, cfg.max_bank_angle);
    }

    let pitch = ((next.y - cur.y) * cfg.elevation_influence)
        .clamp(-cfg.max_pitch_angle, cfg.max_pitch_angle);

    // f32::signum maps ±0.0 to ±1.0, so a heading change with no lateral
    // component must short-circuit to zero wag explicitly.
    let heading_delta = forward - last_forward;
    let yaw = if heading_delta.x == 0.0 {
        0.0
    } else {
        Vec3::new(heading_delta.x, 0.0, heading_delta.z).length()
            * heading_delta.x.signum()
            * cfg.yaw_gain
    };

    let base_rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward));

    OrientationTargets {
        forward,
        right,
        up,
        bank,
        pitch,
        yaw,
        base_rotation,
    }
}

/// Normalizes `v`, or returns `fallback` when `v` is too short to trust.
fn dir_or(v: Vec3, fallback: Vec3) -> Vec3 {
    if v.length_squared() < EPS_SQ {
        fallback
    } else {
        v.normalize()
    }
}
