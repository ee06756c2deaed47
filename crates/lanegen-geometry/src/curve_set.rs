//! Ordered collections of curves ("lines").

use lanegen_core::error::{LanegenError, Result};
use lanegen_core::SamplingConfig;
use lanegen_math::{Aabb3, Point3, Vector3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::curve::CubicBezier;
use crate::resample::Resampler;
use crate::tessellate;

/// An ordered set of independent cubic Bezier curves.
///
/// Order is preserved by every operation; resampled markers come out curve
/// by curve in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveSet {
    curves: Vec<CubicBezier>,
}

impl CurveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_curves(curves: Vec<CubicBezier>) -> Self {
        Self { curves }
    }

    /// `count` copies of `template`, copy `i` shifted by `i * spacing` along +X.
    pub fn offset_lines(template: CubicBezier, count: usize, spacing: f64) -> Result<Self> {
        if !spacing.is_finite() {
            return Err(LanegenError::InvalidArgument(format!(
                "line spacing must be finite, got {spacing}"
            )));
        }
        log::debug!("laying out {count} lines at spacing {spacing}");
        let curves = (0..count)
            .map(|i| template.translated(Vector3::X * (i as f64 * spacing)))
            .collect();
        Ok(Self { curves })
    }

    /// Offset layout using the spacing from `config`.
    pub fn offset_lines_with_config(
        template: CubicBezier,
        count: usize,
        config: &SamplingConfig,
    ) -> Result<Self> {
        Self::offset_lines(template, count, config.line_spacing)
    }

    pub fn push(&mut self, curve: CubicBezier) {
        self.curves.push(curve);
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn curves(&self) -> &[CubicBezier] {
        &self.curves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CubicBezier> {
        self.curves.iter()
    }

    /// Lazily resample every curve at `interval` with the default step.
    pub fn resample(&self, interval: f64) -> Result<impl Iterator<Item = Point3> + '_> {
        Ok(self.resample_with(Resampler::new(interval)?))
    }

    /// Lazily resample every curve with `resampler`, concatenating in order.
    pub fn resample_with(&self, resampler: Resampler) -> impl Iterator<Item = Point3> + '_ {
        log::debug!(
            "resampling {} curves at interval {} ({} steps per curve)",
            self.curves.len(),
            resampler.interval(),
            resampler.step_count()
        );
        self.curves
            .iter()
            .flat_map(move |curve| resampler.resample(curve))
    }

    /// Resample all curves on the rayon pool.
    ///
    /// Produces the same points in the same order as [`CurveSet::resample`].
    pub fn resample_par(&self, interval: f64) -> Result<Vec<Point3>> {
        let resampler = Resampler::new(interval)?;
        Ok(self.resample_par_with(resampler))
    }

    pub fn resample_par_with(&self, resampler: Resampler) -> Vec<Point3> {
        let points: Vec<Point3> = self
            .curves
            .par_iter()
            .flat_map_iter(|curve| resampler.resample(curve))
            .collect();
        log::debug!(
            "resampled {} curves into {} markers",
            self.curves.len(),
            points.len()
        );
        points
    }

    /// Sum of the approximate lengths of all curves.
    pub fn total_length(&self, step_count: usize) -> Result<f64> {
        self.curves
            .iter()
            .map(|curve| tessellate::approximate_length(curve, step_count))
            .sum()
    }

    /// Total length at the step resolution from `config`.
    pub fn total_length_with(&self, config: &SamplingConfig) -> Result<f64> {
        self.total_length(config.checked_step_count()?)
    }

    /// Preview polylines, one per curve.
    pub fn preview_polylines(&self, segments: usize) -> Result<Vec<Vec<Point3>>> {
        self.curves
            .iter()
            .map(|curve| tessellate::preview_polyline(curve, segments))
            .collect()
    }

    /// Preview polylines with `config.preview_segments` segments each.
    pub fn preview_polylines_with(&self, config: &SamplingConfig) -> Result<Vec<Vec<Point3>>> {
        self.preview_polylines(config.preview_segments)
    }

    /// Union of the control-hull boxes, `None` for an empty set.
    pub fn bounding_box(&self) -> Option<Aabb3> {
        self.curves
            .iter()
            .map(CubicBezier::aabb)
            .reduce(|a, b| a.union(&b))
    }
}

impl From<Vec<CubicBezier>> for CurveSet {
    fn from(curves: Vec<CubicBezier>) -> Self {
        Self::from_curves(curves)
    }
}

impl FromIterator<CubicBezier> for CurveSet {
    fn from_iter<I: IntoIterator<Item = CubicBezier>>(iter: I) -> Self {
        Self {
            curves: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CurveSet {
    type Item = &'a CubicBezier;
    type IntoIter = std::slice::Iter<'a, CubicBezier>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
