use crate::marcher::noise::value_noise;
use crate::math::{abs, abs_v, max_v, mix, mul, sub, v, Quat, V3};
use crate::Sdf;

// Distance formulas from https://iquilezles.org/articles/distfunctions/
// Every primitive rotates the sample point into its local frame first,
// so orientation is carried entirely by the quaternion.

pub struct Sphere {
    pub radius: f64,
    pub rotation: Quat,
}

impl Sdf for Sphere {
    fn distance(&self, x: &V3) -> f64 {
        let p = self.rotation.rotate(x);
        abs(&p) - self.radius
    }
}

pub struct RoundBox {
    pub half_extents: V3,
    pub corner_radius: f64,
    pub rotation: Quat,
}

impl Sdf for RoundBox {
    fn distance(&self, x: &V3) -> f64 {
        let p = self.rotation.rotate(x);
        let q = sub(&abs_v(&p), &self.half_extents) + self.corner_radius * v(1., 1., 1.);
        abs(&max_v(&q, 0.)) + q.x.max(q.y.max(q.z)).min(0.) - self.corner_radius
    }
}

pub fn op_union(d1: f64, d2: f64) -> f64 {
    d1.min(d2)
}

pub fn op_subtraction(d1: f64, d2: f64) -> f64 {
    (-d1).max(d2)
}

// Blend radii this small are indistinguishable from a hard min;
// the floor only keeps the division finite.
const SMIN_K_FLOOR: f64 = 1e-4;

// Polynomial smooth minimum. The result is an approximate distance:
// it undershoots min(a, b) inside the blend region, which is fine for
// marching (steps only get more conservative).
pub fn smin(a: f64, b: f64, k: f64) -> f64 {
    let k = k.max(SMIN_K_FLOOR);
    let h = (0.5 + 0.5 * (b - a) / k).clamp(0., 1.);
    mix(b, a, h) - k * h * (1. - h)
}

/// The animated scene: a sphere-carved rounded box shell smoothly
/// blended with a noise-distorted small sphere, the whole thing
/// tumbling under a time-driven quaternion.
pub struct SceneField {
    pub time: f64,
}

impl SceneField {
    pub fn rotation(&self) -> Quat {
        let t = self.time;
        Quat::normalized(1., t.sin() * 0.1, 0., t * 0.2)
    }
}

impl Sdf for SceneField {
    fn distance(&self, x: &V3) -> f64 {
        let quat = self.rotation();
        let t = self.time;

        // spatially varying blend radius
        let k = 1. + value_noise(&mul(0.25, x));

        let p = quat.rotate(x);

        let round_box = RoundBox {
            half_extents: v(2., 2., 2.),
            corner_radius: 0.5,
            rotation: quat,
        }
        .distance(&p);
        let shell = Sphere {
            radius: 2.5,
            rotation: quat,
        }
        .distance(&p);
        let blob = Sphere {
            radius: 1.,
            rotation: quat,
        }
        .distance(&p)
            + value_noise(&(p + v(t, t, t))) * 0.25;

        smin(blob, op_subtraction(shell, round_box), k)
    }
}
