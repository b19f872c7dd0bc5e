use crate::math::{dot, mix, v, V3};
use std::f64::consts::PI;

// Lattice hash constants; the four channel offsets pick the
// corner values of one cell out of a single 1D hash.
const LATTICE: V3 = V3 {
    x: 1.,
    y: 57.,
    z: 21.,
};
const CHANNELS: [f64; 4] = [0., 57., 21., 78.];

fn hash(t: f64) -> f64 {
    (t.cos() * t).sin()
}

// Cosine fade, 0 at the low cell face, 1 at the high one.
fn fade(t: f64) -> f64 {
    (t * PI).cos() * -0.5 + 0.5
}

/// Cheap lattice value noise, continuous everywhere, range about [-1, 1].
/// Not gradient noise; good enough for surface distortion.
pub fn value_noise(p: &V3) -> f64 {
    let i = v(p.x.floor(), p.y.floor(), p.z.floor());
    let base = dot(&i, &LATTICE);

    let fx = fade(p.x - i.x);
    let fy = fade(p.y - i.y);
    let fz = fade(p.z - i.z);

    let mut a = [0.; 4];
    for (c, offset) in a.iter_mut().zip(CHANNELS) {
        let t = base + offset;
        *c = mix(hash(t), hash(1. + t), fx);
    }

    // pair the channels by lattice stride: y carries 57, z carries 21
    let x0 = mix(a[0], a[1], fy);
    let x1 = mix(a[2], a[3], fy);
    mix(x0, x1, fz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    #[test]
    fn noise_stays_in_expected_range() {
        let mut rng = thread_rng();
        for _ in 0..10_000 {
            let p = v(
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            );
            let n = value_noise(&p);
            assert!(n.is_finite());
            assert!((-1.0..=1.0).contains(&n), "noise out of range: {}", n);
        }
    }

    #[test]
    fn noise_is_continuous_across_cell_boundaries() {
        // straddle integer lattice planes along every axis, not just x
        let h = 1e-5;
        let mut rng = thread_rng();
        for axis in 0..3 {
            for _ in 0..1_000 {
                let mut p = [
                    rng.gen_range(-5.0..5.0),
                    rng.gen_range(-5.0..5.0),
                    rng.gen_range(-5.0..5.0),
                ];
                p[axis] = rng.gen_range(-5i32..5) as f64 - h / 2.;
                let mut q = p;
                q[axis] += h;
                let dn = (value_noise(&v(q[0], q[1], q[2]))
                    - value_noise(&v(p[0], p[1], p[2])))
                .abs();
                assert!(dn < 10. * h, "noise jump {} across axis {}", dn, axis);
            }
        }
    }

    #[test]
    fn adjacent_cells_agree_on_shared_corners() {
        // a wrong channel pairing tears the lattice apart at whole-number
        // y and z planes while leaving x intact
        let h = 1e-6;
        for (below, at) in [
            (v(0.4, 1. - h, 0.7), v(0.4, 1., 0.7)),
            (v(0.4, 0.3, 2. - h), v(0.4, 0.3, 2.)),
            (v(3. - h, -1.2, 0.7), v(3., -1.2, 0.7)),
        ] {
            let dn = (value_noise(&at) - value_noise(&below)).abs();
            assert!(dn < 1e-4, "corner value jump {} at {:?}", dn, at);
        }
    }

    #[test]
    fn noise_is_deterministic() {
        let p = v(1.3, -2.7, 0.4);
        assert!(value_noise(&p) == value_noise(&p));
    }
}
