//! Uniform-parameter tessellation of curves into polylines.

use lanegen_core::error::{LanegenError, Result};
use lanegen_math::Point3;

use crate::curve::Curve;

/// Convert a curve to a preview polyline of `segments` straight pieces.
///
/// Returns `segments + 1` points at equal parameter increments, starting at
/// the curve's start point and ending at its end point.
pub fn preview_polyline(curve: &dyn Curve, segments: usize) -> Result<Vec<Point3>> {
    if segments == 0 {
        return Err(LanegenError::InvalidArgument(
            "preview polyline needs at least 1 segment".into(),
        ));
    }
    Ok(uniform_points(curve, segments).collect())
}

/// Approximate the arc length as the length of the `step_count`-step polyline.
pub fn approximate_length(curve: &dyn Curve, step_count: usize) -> Result<f64> {
    if step_count == 0 {
        return Err(LanegenError::InvalidArgument(
            "step_count must be at least 1".into(),
        ));
    }
    Ok(polyline_length(uniform_points(curve, step_count)))
}

/// Sample at `divisions + 1` equally spaced parameters across the domain.
pub(crate) fn uniform_points(
    curve: &dyn Curve,
    divisions: usize,
) -> impl Iterator<Item = Point3> + '_ {
    (0..=divisions).map(move |i| curve.point_at(curve.param_at_step(i, divisions)))
}

pub(crate) fn polyline_length(points: impl IntoIterator<Item = Point3>) -> f64 {
    let mut points = points.into_iter();
    let Some(mut prev) = points.next() else {
        return 0.0;
    };
    let mut length = 0.0;
    for p in points {
        length += prev.distance(p);
        prev = p;
    }
    length
}
