use crate::math::{cross, normalize, sub, v4, M4, Ray, V3};

/// Perspective camera mirroring the usual scene-graph conventions:
/// the camera looks down its local -z, `cam_to_world` carries the pose
/// and `inv_projection` undoes a symmetric perspective projection.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: V3,
    pub cam_to_world: M4,
    pub inv_projection: M4,
}

impl Camera {
    pub fn look_at(
        eye: V3,
        target: V3,
        up: V3,
        fov_deg: f64,
        aspect: f64,
        near: f64,
        far: f64,
    ) -> Camera {
        let back = normalize(&sub(&eye, &target));
        let right = normalize(&cross(&up, &back));
        let upward = cross(&back, &right);

        let cam_to_world = M4 {
            v0: v4(right.x, right.y, right.z, 0.),
            v1: v4(upward.x, upward.y, upward.z, 0.),
            v2: v4(back.x, back.y, back.z, 0.),
            v3: v4(eye.x, eye.y, eye.z, 1.),
        };

        // Closed-form inverse of the symmetric perspective matrix.
        let tan_half = (fov_deg.to_radians() / 2.).tan();
        let m22 = -(far + near) / (far - near);
        let m23 = -2. * far * near / (far - near);
        let inv_projection = M4 {
            v0: v4(aspect * tan_half, 0., 0., 0.),
            v1: v4(0., tan_half, 0., 0.),
            v2: v4(0., 0., 0., 1. / m23),
            v3: v4(0., 0., -1., m22 / m23),
        };

        Camera {
            position: eye,
            cam_to_world,
            inv_projection,
        }
    }

    /// Ray through a normalized screen coordinate, (0,0) bottom left,
    /// (1,1) top right. Same construction as the screen-quad shader:
    /// unproject the pixel at z = 0 in clip space, then rotate the
    /// resulting view-space direction into the world.
    pub fn ray(&self, u: f64, v: f64) -> Ray {
        let clip = v4(u * 2. - 1., v * 2. - 1., 0., 1.);
        let view_dir = (self.inv_projection * clip).xyz();
        let world_dir = (self.cam_to_world * v4(view_dir.x, view_dir.y, view_dir.z, 0.)).xyz();
        Ray {
            x: self.position,
            d: normalize(&world_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{abs, dot, v, B2, O};

    fn default_camera() -> Camera {
        Camera::look_at(v(0., 0., 5.), O, B2, 75., 16. / 9., 0.1, 1000.)
    }

    #[test]
    fn center_ray_points_at_the_target() {
        let cam = default_camera();
        let r = cam.ray(0.5, 0.5);
        assert!((r.d.z + 1.).abs() < 1e-12);
        assert!(r.d.x.abs() < 1e-12);
        assert!(r.d.y.abs() < 1e-12);
    }

    #[test]
    fn generated_directions_are_unit_length() {
        let cam = default_camera();
        for iu in 0..=10 {
            for iv in 0..=10 {
                let r = cam.ray(iu as f64 / 10., iv as f64 / 10.);
                assert!((abs(&r.d) - 1.).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn screen_axes_match_world_axes_for_an_axis_aligned_camera() {
        let cam = default_camera();
        let right = cam.ray(1., 0.5);
        let top = cam.ray(0.5, 1.);
        assert!(right.d.x > 0.);
        assert!(top.d.y > 0.);
    }

    #[test]
    fn field_of_view_controls_ray_spread() {
        let narrow = Camera::look_at(v(0., 0., 5.), O, B2, 30., 1., 0.1, 1000.);
        let wide = Camera::look_at(v(0., 0., 5.), O, B2, 90., 1., 0.1, 1000.);
        let center = v(0., 0., -1.);
        let n = narrow.ray(1., 0.5);
        let w = wide.ray(1., 0.5);
        assert!(dot(&w.d, &center) < dot(&n.d, &center), "wider fov spreads edge rays more");
    }

    #[test]
    fn oblique_camera_still_aims_at_the_target() {
        let eye = v(3., 2., 4.);
        let cam = Camera::look_at(eye, O, B2, 75., 1., 0.1, 1000.);
        let r = cam.ray(0.5, 0.5);
        let toward = normalize(&sub(&O, &eye));
        assert!(dot(&r.d, &toward) > 1. - 1e-9);
    }
}
