use crate::Point3;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb3 {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb3 {
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` when there are none.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |aabb, p| aabb.include(p)))
    }

    /// Grow the box so it contains `p`.
    pub fn include(self, p: Point3) -> Self {
        Self {
            min: self.min.min(p),
            max: self.max.max(p),
        }
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn size(&self) -> Point3 {
        self.max - self.min
    }

    /// Containment test with a slack of `eps` on every face.
    pub fn contains_point(&self, p: Point3, eps: f64) -> bool {
        p.cmpge(self.min - eps).all() && p.cmple(self.max + eps).all()
    }
}
