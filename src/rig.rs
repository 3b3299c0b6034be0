//! Flight Rig
//!
//! The orchestrator. Owns the curve, the configuration, and all per-frame
//! state; one [`FlightRig::step`] per rendered frame runs the whole pipeline
//! (progress smoothing, curve sampling, orientation targets, motion
//! smoothing) and publishes the transforms the renderer consumes.

use glam::{Quat, Vec3};
use log::debug;

use crate::config::TuningConfig;
use crate::errors::Result;
use crate::motion;
use crate::orientation;
use crate::path::PathCurve;
use crate::progress::ProgressSmoother;

/// Raw per-frame input from the external frame driver.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Scroll progress in [0, 1]; out-of-range values are clamped.
    pub raw_progress: f32,
    /// Frame delta in seconds; non-finite values are treated as zero.
    pub delta: f32,
}

/// Transforms published to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct FlightFrame {
    /// Animated object position.
    pub position: Vec3,
    /// Animated object orientation (unit quaternion).
    pub rotation: Quat,
    /// Trailing chase-camera position.
    pub camera_position: Vec3,
    /// Trailing camera look-at point.
    pub camera_target: Vec3,
    /// Animated progress after smoothing.
    pub progress: f32,
}

/// All state that persists across frames.
///
/// Owned exclusively by the rig and mutated exactly once per [`FlightRig::step`];
/// nothing here is reset mid-session except through [`FlightRig::reset`].
#[derive(Debug, Clone)]
pub struct FlightState {
    /// Smoothed object position.
    pub position: Vec3,
    /// Smoothed object orientation, kept unit-length.
    pub rotation: Quat,
    /// Smoothed roll, radians.
    pub bank: f32,
    /// Smoothed pitch, radians.
    pub pitch: f32,
    /// Smoothed yaw, radians.
    pub yaw: f32,
    /// Travel direction from the previous frame; the degenerate-geometry
    /// fallback in the orientation solver.
    pub last_forward: Vec3,
    /// Trailing camera position.
    pub camera_position: Vec3,
    /// Trailing camera look-at.
    pub camera_target: Vec3,
    /// Frames stepped since construction or reset.
    pub frame: u64,
}

/// Scroll-driven flight along a pre-authored curve.
pub struct FlightRig {
    curve: PathCurve,
    config: TuningConfig,
    progress: ProgressSmoother,
    state: FlightState,
}

impl FlightRig {
    /// Builds a rig over an already-validated curve.
    ///
    /// Fails if any tuning coefficient is out of domain; a rejected config
    /// never produces a partially constructed rig.
    pub fn new(curve: PathCurve, config: TuningConfig) -> Result<Self> {
        config.validate()?;
        let state = Self::initial_state(&curve, &config);
        let progress = ProgressSmoother::new(config.progress_smoothing);
        Ok(Self {
            curve,
            config,
            progress,
            state,
        })
    }

    /// Convenience constructor: builds the curve from control points using
    /// the config's curve mode, tension and resolution.
    pub fn from_points(points: &[Vec3], config: TuningConfig) -> Result<Self> {
        let curve = PathCurve::new(
            points,
            config.curve_mode,
            config.tension,
            config.curve_resolution,
        )?;
        Self::new(curve, config)
    }

    /// Advances the rig by one frame and publishes the resulting transforms.
    pub fn step(&mut self, input: FrameInput) -> FlightFrame {
        let progress = self.progress.advance(input.raw_progress, input.delta);

        let last = self.curve.sample_count() - 1;
        let idx = self.curve.sample_index(progress).min(last - 1);
        let cur = self.curve.sample(idx);
        let next = self.curve.sample(idx + 1);
        let future = self.curve.sample((idx + self.config.lookahead_samples).min(last));
        let path_position = self.curve.sample_at(progress);

        let targets = orientation::solve(cur, next, future, self.state.last_forward, &self.config);
        motion::step(
            &mut self.state,
            &targets,
            path_position,
            input.delta,
            &self.config,
        );
        self.state.frame += 1;

        if self.config.debug_log_every > 0
            && self.state.frame % u64::from(self.config.debug_log_every) == 0
        {
            debug!(
                "frame {} progress {:.4} bank {:+.4} pitch {:+.4} yaw {:+.4} pos {} fwd {} right {} up {}",
                self.state.frame,
                progress,
                self.state.bank,
                self.state.pitch,
                self.state.yaw,
                self.state.position,
                targets.forward,
                targets.right,
                targets.up,
            );
        }

        FlightFrame {
            position: self.state.position,
            rotation: self.state.rotation,
            camera_position: self.state.camera_position,
            camera_target: self.state.camera_target,
            progress,
        }
    }

    /// Rebuilds the state at progress 0, as if freshly constructed.
    pub fn reset(&mut self) {
        self.state = Self::initial_state(&self.curve, &self.config);
        self.progress.reset(0.0);
    }

    /// The persistent motion state.
    #[must_use]
    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// The underlying curve.
    #[must_use]
    pub fn curve(&self) -> &PathCurve {
        &self.curve
    }

    /// The active tuning.
    #[must_use]
    pub fn config(&self) -> &TuningConfig {
        &self.config
    }

    /// Seeds the state at the start of the path, facing along the first
    /// curve segment, with the camera already in its chase position so frame
    /// zero has nothing to catch up on.
    fn initial_state(curve: &PathCurve, config: &TuningConfig) -> FlightState {
        let position = curve.sample(0);
        let first_leg = curve.sample(1) - position;
        let last_forward = if first_leg.length_squared() > 0.0 {
            first_leg.normalize()
        } else {
            Vec3::NEG_Z
        };
        let targets = orientation::solve(
            position,
            curve.sample(1),
            curve.sample(config.lookahead_samples.min(curve.sample_count() - 1)),
            last_forward,
            config,
        );
        let rotation = targets.base_rotation;
        FlightState {
            position,
            rotation,
            bank: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            last_forward,
            camera_position: position + rotation * config.camera_offset,
            camera_target: position,
            frame: 0,
        }
    }
}
