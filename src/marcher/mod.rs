use crate::camera::Camera;
use crate::math::{normalize, v, v4, Ray, V3, V4, O};
use crate::Sdf;

pub mod noise;
pub mod primitives;
pub mod shading;

pub use primitives::SceneField;

/// Everything the per-pixel function reads besides the ray itself.
/// One instance per frame, shared read-only across pixels.
#[derive(Clone, Debug)]
pub struct Uniforms {
    pub eps: f64,
    pub max_dis: f64,
    pub max_steps: u32,

    pub clear_color: V3,

    pub light_dir: V3,
    pub light_color: V3,

    pub diff_intensity: f64,
    pub spec_intensity: f64,
    pub ambient_intensity: f64,
    pub shininess: f64,

    pub time: f64,
}

impl Default for Uniforms {
    fn default() -> Uniforms {
        Uniforms {
            eps: 0.001,
            max_dis: 1000.,
            max_steps: 100,
            clear_color: v(1., 1., 1.),
            light_dir: normalize(&v(1., 1., 1.)),
            light_color: v(1., 1., 1.),
            diff_intensity: 0.5,
            spec_intensity: 3.,
            ambient_intensity: 0.15,
            shininess: 16.,
            time: 0.,
        }
    }
}

/// Sphere-trace a ray through the field. Returns total distance
/// travelled, clamped to `max_dis`; the caller tells hit from miss by
/// comparing against `max_dis`. Running out of steps is a miss, not an
/// error.
pub fn march(s: &impl Sdf, r: &Ray, u: &Uniforms) -> f64 {
    let mut d = 0.;
    for _ in 0..u.max_steps {
        let p = r.x + d * r.d;
        let cd = s.distance(&p);
        if cd < u.eps || d >= u.max_dis {
            break;
        }
        d += cd;
    }
    d.min(u.max_dis)
}

// Tetrahedron sampling, four field evaluations instead of six.
// https://iquilezles.org/articles/normalsSDF/
pub fn estimate_normal(s: &impl Sdf, p: &V3, eps: f64) -> V3 {
    let mut n = O;
    for i in 0..4i32 {
        let bits = v(
            (((i + 3) >> 1) & 1) as f64,
            ((i >> 1) & 1) as f64,
            (i & 1) as f64,
        );
        let e = 0.5773 * (2. * bits - v(1., 1., 1.));
        n = n + s.distance(&(*p + eps * e)) * e;
    }
    normalize(&n)
}

/// The per-pixel function: normalized screen coordinate in, RGBA out.
/// Misses produce the clear color at full opacity.
pub fn render(cam: &Camera, uv: (f64, f64), u: &Uniforms) -> V4 {
    let ray = cam.ray(uv.0, uv.1);
    let field = SceneField { time: u.time };

    let travelled = march(&field, &ray, u);
    if travelled >= u.max_dis {
        return v4(u.clear_color.x, u.clear_color.y, u.clear_color.z, 1.);
    }

    let hit = ray.x + travelled * ray.d;
    let n = estimate_normal(&field, &hit, u.eps);
    let color = shading::shade(&hit, &n, u);
    v4(color.x, color.y, color.z, 1.)
}
