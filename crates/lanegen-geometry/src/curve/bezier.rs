//! Cubic Bezier segment.

use lanegen_core::error::{LanegenError, Result};
use lanegen_core::traits::BoundingBox;
use lanegen_core::SamplingConfig;
use lanegen_math::{clamp_unit, Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::resample::{Resample, Resampler};
use crate::tessellate;

/// A cubic Bezier segment `[P0, P1, P2, P3]`.
///
/// `P0` and `P3` are anchors the curve passes through, `P1` and `P2` are
/// handles shaping the tangents. Serialized as a plain array of four points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicBezier {
    points: [Point3; 4],
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    pub fn from_points(points: [Point3; 4]) -> Self {
        Self { points }
    }

    /// Build a curve from a slice that must hold exactly 4 points.
    pub fn from_slice(points: &[Point3]) -> Result<Self> {
        let points: [Point3; 4] = points
            .try_into()
            .map_err(|_| LanegenError::InvalidCurve {
                count: points.len(),
            })?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point3; 4] {
        &self.points
    }

    pub fn start(&self) -> Point3 {
        self.points[0]
    }

    pub fn end(&self) -> Point3 {
        self.points[3]
    }

    pub fn handles(&self) -> (Point3, Point3) {
        (self.points[1], self.points[2])
    }

    /// Copy of this curve with every control point moved by `offset`.
    pub fn translated(&self, offset: Vector3) -> Self {
        Self {
            points: self.points.map(|p| p + offset),
        }
    }

    /// Point on the curve at `t`, with `t` clamped to `[0, 1]`.
    ///
    /// Evaluated by de Casteljau subdivision, which returns the anchors
    /// exactly at `t = 0` and `t = 1` and a coincident control point
    /// exactly for every `t`.
    pub fn evaluate(&self, t: f64) -> Point3 {
        let t = clamp_unit(t);
        let [p0, p1, p2, p3] = self.points;

        let a = lerp(p0, p1, t);
        let b = lerp(p1, p2, t);
        let c = lerp(p2, p3, t);

        let d = lerp(a, b, t);
        let e = lerp(b, c, t);

        lerp(d, e, t)
    }

    /// First derivative with respect to `t` (clamped to `[0, 1]`).
    pub fn derivative(&self, t: f64) -> Vector3 {
        let t = clamp_unit(t);
        let [p0, p1, p2, p3] = self.points;
        let mt = 1.0 - t;

        (p1 - p0) * (3.0 * mt * mt) + (p2 - p1) * (6.0 * mt * t) + (p3 - p2) * (3.0 * t * t)
    }

    /// Resample at `interval` with the default step resolution.
    pub fn resample(&self, interval: f64) -> Result<Resample<'_>> {
        Ok(Resampler::new(interval)?.resample(self))
    }

    /// Polyline length over the default fixed-step sampling.
    pub fn length(&self) -> f64 {
        tessellate::polyline_length(tessellate::uniform_points(
            self,
            SamplingConfig::DEFAULT_STEP_COUNT,
        ))
    }

    pub fn aabb(&self) -> Aabb3 {
        let (min, max) = self.bounding_box();
        Aabb3::new(min, max)
    }
}

impl From<[Point3; 4]> for CubicBezier {
    fn from(points: [Point3; 4]) -> Self {
        Self::from_points(points)
    }
}

impl TryFrom<&[Point3]> for CubicBezier {
    type Error = LanegenError;

    fn try_from(points: &[Point3]) -> Result<Self> {
        Self::from_slice(points)
    }
}

impl TryFrom<Vec<Point3>> for CubicBezier {
    type Error = LanegenError;

    fn try_from(points: Vec<Point3>) -> Result<Self> {
        Self::from_slice(&points)
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        self.evaluate(t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        self.derivative(t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl BoundingBox for CubicBezier {
    type Point = Point3;

    /// Box around the control polygon; the curve lies inside its convex hull.
    fn bounding_box(&self) -> (Point3, Point3) {
        let [p0, p1, p2, p3] = self.points;
        (p0.min(p1).min(p2).min(p3), p0.max(p1).max(p2).max(p3))
    }
}

/// Interpolation that is exact at both ends and for equal inputs.
fn lerp(a: Point3, b: Point3, t: f64) -> Point3 {
    if t < 0.5 {
        a + (b - a) * t
    } else {
        b - (b - a) * (1.0 - t)
    }
}
