//! Arclength resampling of curves into evenly spaced marker points.
//!
//! The curve is walked at a fixed parameter step. The distance between
//! consecutive samples accumulates, and a marker is emitted at the current
//! sample each time the running total reaches the interval; the total then
//! restarts from zero, so any overshoot past the interval is dropped.

use std::iter::FusedIterator;

use lanegen_core::error::{LanegenError, Result};
use lanegen_core::SamplingConfig;
use lanegen_math::Point3;

use crate::curve::Curve;

/// Validated resampling parameters.
///
/// Holds no per-curve state, so one resampler can be reused across curves
/// and threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resampler {
    interval: f64,
    step_count: usize,
}

impl Resampler {
    /// Resampler with the default step resolution (`t` step of 0.01).
    pub fn new(interval: f64) -> Result<Self> {
        Self::with_config(interval, &SamplingConfig::default())
    }

    /// Resampler with the step resolution taken from `config`.
    ///
    /// Only `step_count` is read from `config`. `interval` must be positive;
    /// `+inf` is accepted and never emits.
    pub fn with_config(interval: f64, config: &SamplingConfig) -> Result<Self> {
        let step_count = config.checked_step_count()?;
        // Also rejects NaN.
        if !(interval > 0.0) {
            return Err(LanegenError::InvalidArgument(format!(
                "resample interval must be positive, got {interval}"
            )));
        }
        Ok(Self {
            interval,
            step_count,
        })
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Lazily resample one curve.
    pub fn resample<'a>(&self, curve: &'a dyn Curve) -> Resample<'a> {
        let (t_min, _) = curve.domain();
        Resample {
            curve,
            interval: self.interval,
            step_count: self.step_count,
            next_step: 0,
            accumulated: 0.0,
            previous: curve.point_at(t_min),
        }
    }
}

/// Iterator over the marker points of a single curve.
///
/// Cloning before iteration yields an independent pass over the same curve.
#[derive(Clone)]
pub struct Resample<'a> {
    curve: &'a dyn Curve,
    interval: f64,
    step_count: usize,
    next_step: usize,
    accumulated: f64,
    previous: Point3,
}

impl Iterator for Resample<'_> {
    type Item = Point3;

    fn next(&mut self) -> Option<Point3> {
        while self.next_step <= self.step_count {
            let t = self.curve.param_at_step(self.next_step, self.step_count);
            self.next_step += 1;

            let current = self.curve.point_at(t);
            self.accumulated += self.previous.distance(current);
            self.previous = current;

            if self.accumulated >= self.interval {
                self.accumulated = 0.0;
                return Some(current);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.step_count.saturating_add(1).saturating_sub(self.next_step);
        (0, Some(remaining))
    }
}

impl FusedIterator for Resample<'_> {}

impl std::fmt::Debug for Resample<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resample")
            .field("interval", &self.interval)
            .field("step_count", &self.step_count)
            .field("next_step", &self.next_step)
            .field("accumulated", &self.accumulated)
            .finish_non_exhaustive()
    }
}
