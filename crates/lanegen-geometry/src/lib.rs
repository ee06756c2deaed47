//! lanegen geometry: cubic Bezier lane centerlines and arclength resampling.

pub mod curve;
pub mod curve_set;
pub mod resample;
pub mod tessellate;

pub use curve::{CubicBezier, Curve};
pub use curve_set::CurveSet;
pub use resample::{Resample, Resampler};
