use crate::marcher::Uniforms;
use crate::math::{dist, dot, mix_v, mul, mul_v, v, V3};

const RED: V3 = V3 {
    x: 1.,
    y: 0.,
    z: 0.,
};
const BLUE: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 1.,
};

// Decorative coloring, independent of the distance field: a smooth
// red/blue blend keyed on two sphere centers that chase each other
// around the origin.
pub fn scene_color(p: &V3, t: f64) -> V3 {
    let sphere1 = dist(p, &v(t.cos(), t.sin(), 0.)) - 1.;
    let sphere2 = dist(p, &v(t.sin(), t.cos(), 0.)) - 0.75;

    let k = 0.5;
    let h = (0.5 + 0.5 * (sphere2 - sphere1) / k).clamp(0., 1.);

    mix_v(&RED, &BLUE, h)
}

// Phong-like: the specular term reuses the diffuse term instead of a
// half-vector, which reads as a cheap glint rather than a true highlight.
pub fn shade(hit: &V3, normal: &V3, u: &Uniforms) -> V3 {
    let diff = dot(normal, &u.light_dir).max(0.) * u.diff_intensity;
    let spec = diff.powf(u.shininess) * u.spec_intensity;
    let ambient = u.ambient_intensity;

    let base = mul(spec + ambient + diff, &scene_color(hit, u.time));
    mul_v(&u.light_color, &base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{normalize, O};

    #[test]
    fn scene_color_blends_between_red_and_blue() {
        for i in 0..100 {
            let t = i as f64 * 0.31;
            let c = scene_color(&v(i as f64 * 0.07 - 3.5, 0.2, -0.4), t);
            assert!((0. ..=1.).contains(&c.x));
            assert!(c.y == 0.);
            assert!((0. ..=1.).contains(&c.z));
            assert!((c.x + c.z - 1.).abs() < 1e-12, "blend weights must sum to 1");
        }
    }

    #[test]
    fn backfacing_normal_gets_ambient_only() {
        let u = Uniforms::default();
        let n = normalize(&v(-1., -1., -1.));
        let c = shade(&O, &n, &u);
        let base = scene_color(&O, u.time);
        assert!((c.x - base.x * u.ambient_intensity).abs() < 1e-12);
        assert!((c.z - base.z * u.ambient_intensity).abs() < 1e-12);
    }

    #[test]
    fn lit_surface_is_brighter_than_unlit() {
        let u = Uniforms::default();
        let toward = shade(&O, &normalize(&v(1., 1., 1.)), &u);
        let away = shade(&O, &normalize(&v(-1., -1., -1.)), &u);
        assert!(toward.x + toward.z > away.x + away.z);
    }
}
