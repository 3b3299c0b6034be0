//! Flight Path Curve
//!
//! Wraps the authored control points in a piecewise cubic Catmull-Rom curve
//! and precomputes a dense table of evenly progress-spaced samples. Per-frame
//! lookups are index arithmetic and one lerp; the spline itself is only
//! evaluated once, at construction.

use glam::Vec3;

use crate::config::CurveMode;
use crate::errors::{Result, RigError};

/// Knot spacings below this are collapsed to avoid dividing by ~zero when
/// consecutive control points (nearly) coincide.
const MIN_KNOT: f32 = 1e-4;

/// A pre-authored 3D flight path with O(1) progress lookup.
#[derive(Debug, Clone)]
pub struct PathCurve {
    points: Vec<Vec3>,
    mode: CurveMode,
    tension: f32,
    samples: Vec<Vec3>,
}

impl PathCurve {
    /// Builds the curve and its sample table.
    ///
    /// Fails with [`RigError::InvalidPath`] on fewer than 2 control points or
    /// any non-finite coordinate, and [`RigError::InvalidConfig`] on a
    /// resolution below 2.
    pub fn new(
        points: &[Vec3],
        mode: CurveMode,
        tension: f32,
        resolution: usize,
    ) -> Result<Self> {
        if points.len() < 2 {
            return Err(RigError::InvalidPath {
                reason: format!("need at least 2 control points, got {}", points.len()),
            });
        }
        if let Some((i, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(RigError::InvalidPath {
                reason: format!("control point {i} is not finite: {p}"),
            });
        }
        if resolution < 2 {
            return Err(RigError::InvalidConfig {
                reason: format!("curve resolution must be at least 2, got {resolution}"),
            });
        }
        if !tension.is_finite() {
            return Err(RigError::InvalidConfig {
                reason: format!("tension must be finite, got {tension}"),
            });
        }

        let mut curve = Self {
            points: points.to_vec(),
            mode,
            tension,
            samples: Vec::with_capacity(resolution),
        };
        for i in 0..resolution {
            let t = i as f32 / (resolution - 1) as f32;
            let p = curve.evaluate(t);
            curve.samples.push(p);
        }
        Ok(curve)
    }

    /// Samples the curve at `progress` in [0, 1] by lerping between the two
    /// bracketing precomputed samples.
    #[must_use]
    pub fn sample_at(&self, progress: f32) -> Vec3 {
        let n = self.samples.len();
        let scaled = progress.clamp(0.0, 1.0) * (n - 1) as f32;
        // Clamp the index to n-2 so progress exactly 1.0 lerps fully into
        // the final sample instead of indexing past it.
        let idx = (scaled as usize).min(n - 2);
        let frac = scaled - idx as f32;
        self.samples[idx].lerp(self.samples[idx + 1], frac)
    }

    /// Index of the sample at or just before `progress`.
    #[must_use]
    pub fn sample_index(&self, progress: f32) -> usize {
        let n = self.samples.len();
        ((progress.clamp(0.0, 1.0) * (n - 1) as f32) as usize).min(n - 1)
    }

    /// The precomputed sample at `index`, clamped into range.
    #[must_use]
    pub fn sample(&self, index: usize) -> Vec3 {
        self.samples[index.min(self.samples.len() - 1)]
    }

    /// Number of precomputed samples (the configured resolution).
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// The authored control points, in order.
    #[must_use]
    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    /// Evaluates the piecewise cubic at curve parameter `t` in [0, 1].
    ///
    /// Endpoint segments use phantom points reflected through the first and
    /// last control points, so the curve passes through both ends with a
    /// natural tangent.
    fn evaluate(&self, t: f32) -> Vec3 {
        let len = self.points.len();
        let segments = len - 1;
        let scaled = t.clamp(0.0, 1.0) * segments as f32;
        let seg = (scaled as usize).min(segments - 1);
        let u = scaled - seg as f32;

        let p1 = self.points[seg];
        let p2 = self.points[seg + 1];
        let p0 = if seg == 0 {
            p1 * 2.0 - p2
        } else {
            self.points[seg - 1]
        };
        let p3 = if seg + 2 < len {
            self.points[seg + 2]
        } else {
            p2 * 2.0 - p1
        };

        let (m1, m2) = match self.mode {
            CurveMode::Uniform => {
                // Cardinal tangents with the configured tension.
                ((p2 - p0) * self.tension, (p3 - p1) * self.tension)
            }
            CurveMode::Centripetal | CurveMode::Chordal => {
                // Non-uniform knot spacing from the chord lengths; the
                // exponent on the squared distance is alpha / 2.
                let pow = if self.mode == CurveMode::Chordal {
                    0.5
                } else {
                    0.25
                };
                let mut dt0 = p0.distance_squared(p1).powf(pow);
                let mut dt1 = p1.distance_squared(p2).powf(pow);
                let mut dt2 = p2.distance_squared(p3).powf(pow);

                if dt1 < MIN_KNOT {
                    dt1 = 1.0;
                }
                if dt0 < MIN_KNOT {
                    dt0 = dt1;
                }
                if dt2 < MIN_KNOT {
                    dt2 = dt1;
                }

                let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
                let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
                (m1, m2)
            }
        };

        hermite(p1, m1, p2, m2, u)
    }
}

/// Cubic Hermite interpolation between `p1` (tangent `m1`) and `p2`
/// (tangent `m2`) at `u` in [0, 1].
fn hermite(p1: Vec3, m1: Vec3, p2: Vec3, m2: Vec3, u: f32) -> Vec3 {
    let u2 = u * u;
    let u3 = u2 * u;
    let h00 = 2.0 * u3 - 3.0 * u2 + 1.0;
    let h10 = u3 - 2.0 * u2 + u;
    let h01 = -2.0 * u3 + 3.0 * u2;
    let h11 = u3 - u2;
    p1 * h00 + m1 * h10 + p2 * h01 + m2 * h11
}
