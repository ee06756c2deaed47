use crate::error::{LanegenError, Result};
use crate::traits::Validate;

/// Sampling resolution shared by resampling, length estimation and previews.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of fixed parameter steps per curve; samples are taken at
    /// `t = i / step_count` for `i` in `0..=step_count`.
    pub step_count: usize,
    /// Number of line segments in a preview polyline.
    pub preview_segments: usize,
    /// Distance along +X between consecutive lines of an offset layout.
    pub line_spacing: f64,
}

impl SamplingConfig {
    /// A step of 0.01 in parameter space.
    pub const DEFAULT_STEP_COUNT: usize = 100;
    pub const DEFAULT_PREVIEW_SEGMENTS: usize = 20;
    pub const DEFAULT_LINE_SPACING: f64 = 3.0;

    pub fn new(step_count: usize, preview_segments: usize, line_spacing: f64) -> Self {
        Self {
            step_count,
            preview_segments,
            line_spacing,
        }
    }

    pub fn coarse() -> Self {
        Self {
            step_count: 20,
            preview_segments: 8,
            ..Self::default()
        }
    }

    pub fn fine() -> Self {
        Self {
            step_count: 1000,
            preview_segments: 64,
            ..Self::default()
        }
    }

    pub fn with_step_count(mut self, step_count: usize) -> Self {
        self.step_count = step_count;
        self
    }

    /// The step count alone, checked for use by resampling and length
    /// estimation; the other fields do not affect those operations.
    pub fn checked_step_count(&self) -> Result<usize> {
        if self.step_count == 0 {
            return Err(LanegenError::InvalidArgument(
                "step_count must be at least 1".into(),
            ));
        }
        Ok(self.step_count)
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            step_count: Self::DEFAULT_STEP_COUNT,
            preview_segments: Self::DEFAULT_PREVIEW_SEGMENTS,
            line_spacing: Self::DEFAULT_LINE_SPACING,
        }
    }
}

impl Validate for SamplingConfig {
    fn validate(&self) -> Result<()> {
        self.checked_step_count()?;
        if self.preview_segments == 0 {
            return Err(LanegenError::InvalidArgument(
                "preview_segments must be at least 1".into(),
            ));
        }
        if !self.line_spacing.is_finite() {
            return Err(LanegenError::InvalidArgument(format!(
                "line_spacing must be finite, got {}",
                self.line_spacing
            )));
        }
        Ok(())
    }
}
