pub mod aabb;
pub mod scalar;

pub use glam::{dvec3, DVec3};
pub use aabb::Aabb3;
pub use scalar::clamp_unit;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
