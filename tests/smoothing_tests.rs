//! ProgressSmoother and TuningConfig tests
//!
//! Tests for:
//! - Exponential lag behavior and frame-rate-independent factor
//! - Clamping of raw input and animated output
//! - Non-finite / zero delta handling
//! - Config validation domains
//! - Serde round-trip and partial-preset overrides

use skyrig::errors::RigError;
use skyrig::{CurveMode, ProgressSmoother, TuningConfig};

const EPSILON: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ============================================================================
// ProgressSmoother
// ============================================================================

#[test]
fn progress_lags_behind_a_jump() {
    // Raw progress jumps 0 -> 1 in one frame; with rate 2 and a 16ms frame
    // the smoother only moves by dt * rate = 0.032.
    let mut smoother = ProgressSmoother::new(2.0);
    let value = smoother.advance(1.0, 0.016);
    assert!(approx(value, 0.032), "expected 0.032, got {value}");
}

#[test]
fn progress_converges_monotonically() {
    let mut smoother = ProgressSmoother::new(2.0);
    let mut last = 0.0;
    for _ in 0..600 {
        let value = smoother.advance(0.75, 1.0 / 60.0);
        assert!(value >= last, "overshot or reversed at {value}");
        assert!(value <= 0.75 + EPSILON);
        last = value;
    }
    assert!(approx(last, 0.75), "did not converge, got {last}");
}

#[test]
fn progress_clamps_raw_input() {
    let mut smoother = ProgressSmoother::new(100.0);
    // Large rate saturates the per-frame factor at 1, so the animated value
    // lands exactly on the clamped raw input.
    assert!(approx(smoother.advance(4.2, 1.0), 1.0));
    assert!(approx(smoother.advance(-3.0, 1.0), 0.0));
}

#[test]
fn progress_ignores_bad_deltas() {
    let mut smoother = ProgressSmoother::new(2.0);
    smoother.advance(1.0, 0.016);
    let before = smoother.value();

    assert!(approx(smoother.advance(1.0, 0.0), before));
    assert!(approx(smoother.advance(1.0, f32::NAN), before));
    assert!(approx(smoother.advance(1.0, f32::NEG_INFINITY), before));
    assert!(approx(smoother.advance(1.0, -0.5), before));
}

#[test]
fn progress_reset_snaps() {
    let mut smoother = ProgressSmoother::new(2.0);
    smoother.reset(0.6);
    assert!(approx(smoother.value(), 0.6));
    smoother.reset(9.0);
    assert!(approx(smoother.value(), 1.0));
}

// ============================================================================
// TuningConfig validation
// ============================================================================

#[test]
fn default_config_validates() {
    TuningConfig::default().validate().unwrap();
}

#[test]
fn config_rejects_bad_resolution() {
    let cfg = TuningConfig {
        curve_resolution: 1,
        ..TuningConfig::default()
    };
    assert!(matches!(
        cfg.validate().unwrap_err(),
        RigError::InvalidConfig { .. }
    ));
}

#[test]
fn config_rejects_zero_lookahead() {
    let cfg = TuningConfig {
        lookahead_samples: 0,
        ..TuningConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_negative_angle_maxima() {
    // A negative maximum would flip the min/max arguments of the per-frame
    // angle clamps; it has to die at construction, not mid-frame.
    let cfg = TuningConfig {
        max_pitch_angle: -0.1,
        ..TuningConfig::default()
    };
    assert!(matches!(
        cfg.validate().unwrap_err(),
        RigError::InvalidConfig { .. }
    ));

    let cfg = TuningConfig {
        max_bank_angle: -1.0,
        ..TuningConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_non_positive_rates() {
    for bad in [0.0, -2.0, f32::NAN] {
        let cfg = TuningConfig {
            progress_smoothing: bad,
            ..TuningConfig::default()
        };
        assert!(cfg.validate().is_err(), "accepted progress rate {bad}");

        let cfg = TuningConfig {
            camera_smoothing: bad,
            ..TuningConfig::default()
        };
        assert!(cfg.validate().is_err(), "accepted camera rate {bad}");
    }
}

#[test]
fn negative_maximum_in_a_preset_is_rejected() {
    // Presets go through the same validation as hand-built configs.
    let cfg: TuningConfig = serde_json::from_str(r#"{"max_pitch_angle": -0.1}"#).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_non_finite_coefficient() {
    let cfg = TuningConfig {
        bank_gain: f32::NAN,
        ..TuningConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn config_rejects_out_of_range_lerp_factors() {
    for bad in [0.0, -0.1, 1.5, f32::NAN] {
        let cfg = TuningConfig {
            position_smoothing: bad,
            ..TuningConfig::default()
        };
        assert!(cfg.validate().is_err(), "accepted {bad}");
    }
}

// ============================================================================
// Serde presets
// ============================================================================

#[test]
fn config_json_round_trip() {
    let cfg = TuningConfig {
        curve_mode: CurveMode::Chordal,
        bank_gain: 2.25,
        include_yaw_in_rotation: true,
        ..TuningConfig::default()
    };
    let json = serde_json::to_string(&cfg).unwrap();
    let back: TuningConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.curve_mode, CurveMode::Chordal);
    assert!(approx(back.bank_gain, 2.25));
    assert!(back.include_yaw_in_rotation);
    assert_eq!(back.lookahead_samples, cfg.lookahead_samples);
    assert!(approx(back.camera_offset.y, cfg.camera_offset.y));
}

#[test]
fn config_partial_preset_keeps_defaults() {
    let back: TuningConfig =
        serde_json::from_str(r#"{"bank_gain": 3.0, "curve_mode": "chordal"}"#).unwrap();
    let defaults = TuningConfig::default();

    assert!(approx(back.bank_gain, 3.0));
    assert_eq!(back.curve_mode, CurveMode::Chordal);
    assert!(approx(back.max_bank_angle, defaults.max_bank_angle));
    assert_eq!(back.curve_resolution, defaults.curve_resolution);
    assert_eq!(back.include_yaw_in_rotation, defaults.include_yaw_in_rotation);
}
