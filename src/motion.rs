//! Motion Smoothing
//!
//! Advances the persistent flight state toward the per-frame targets. Angle
//! smoothing uses fixed per-frame lerp fractions — deliberately NOT scaled by
//! the frame delta, a known frame-rate-dependence kept for its stability at
//! the shipped tuning. The trailing camera pair IS delta-scaled; the
//! asymmetry is intentional.

use glam::{Quat, Vec3};

use crate::config::TuningConfig;
use crate::orientation::OrientationTargets;
use crate::rig::FlightState;

/// One smoothing step: angles, composed rotation, position, camera.
///
/// `path_position` is the exact interpolated curve point for the current
/// animated progress. A non-finite `delta` freezes the delta-scaled camera
/// lerp for this frame; the angle lerps still advance, consistent with their
/// delta-independence.
pub fn step(
    state: &mut FlightState,
    targets: &OrientationTargets,
    path_position: Vec3,
    delta: f32,
    cfg: &TuningConfig,
) {
    state.bank += (targets.bank - state.bank) * cfg.bank_smoothing;
    state.pitch += (targets.pitch - state.pitch) * cfg.pitch_smoothing;
    state.yaw += (targets.yaw - state.yaw) * cfg.yaw_smoothing;

    // Fixed composition order: base look rotation, then roll about the
    // travel axis, then pitch about the lateral axis. Yaw participates only
    // when configured; it is still smoothed and published above.
    let bank_rot = Quat::from_axis_angle(targets.forward, state.bank);
    let pitch_rot = Quat::from_axis_angle(targets.right, state.pitch);
    let mut target_rotation = targets.base_rotation * bank_rot * pitch_rot;
    if cfg.include_yaw_in_rotation {
        target_rotation *= Quat::from_axis_angle(Vec3::Y, state.yaw);
    }

    state.rotation = state
        .rotation
        .slerp(target_rotation, cfg.rotation_smoothing)
        .normalize();
    state.position = state.position.lerp(path_position, cfg.position_smoothing);
    state.last_forward = targets.forward;

    let delta = if delta.is_finite() && delta > 0.0 {
        delta
    } else {
        0.0
    };
    let k = (delta * cfg.camera_smoothing).min(1.0);
    let chase = state.position + state.rotation * cfg.camera_offset;
    state.camera_position = state.camera_position.lerp(chase, k);
    state.camera_target = state.camera_target.lerp(state.position, k);
}
