//! Curve traits and implementations.

mod bezier;

use lanegen_math::{Point3, Vector3};

pub use bezier::CubicBezier;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Parameter at step `i` of `steps` equal divisions of the domain.
    ///
    /// The last step lands on `t_max` exactly.
    fn param_at_step(&self, i: usize, steps: usize) -> f64 {
        let (t_min, t_max) = self.domain();
        if i >= steps {
            t_max
        } else {
            t_min + (t_max - t_min) * (i as f64 / steps as f64)
        }
    }
}
