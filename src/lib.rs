use crate::math::V3;

pub mod camera;
pub mod marcher;
pub mod math;

pub trait Sdf {
    fn distance(&self, x: &V3) -> f64;
}
