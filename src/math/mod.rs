use std::ops;

#[derive(Clone, Copy, Debug)]
pub struct V3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct V4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl V4 {
    pub fn xyz(&self) -> V3 {
        v(self.x, self.y, self.z)
    }
}

// Column-major 4x4, columns v0..v3.
#[derive(Clone, Copy, Debug)]
pub struct M4 {
    pub v0: V4,
    pub v1: V4,
    pub v2: V4,
    pub v3: V4,
}

// Rotation quaternion, scalar part in w.
#[derive(Clone, Copy, Debug)]
pub struct Quat {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quat {
    pub fn normalized(x: f64, y: f64, z: f64, w: f64) -> Quat {
        let n = (x * x + y * y + z * z + w * w).sqrt();
        Quat {
            x: x / n,
            y: y / n,
            z: z / n,
            w: w / n,
        }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    // q * v * conjugate(q), expanded to two cross products
    pub fn rotate(&self, p: &V3) -> V3 {
        let q = v(self.x, self.y, self.z);
        let uv = cross(&q, p);
        let uuv = cross(&q, &uv);
        *p + 2. * (self.w * uv + uuv)
    }
}

#[derive(Clone, Debug)]
pub struct Ray {
    pub x: V3,
    pub d: V3,
}

pub fn sub(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x - y.x,
        y: x.y - y.y,
        z: x.z - y.z,
    }
}

pub fn abs2(x: &V3) -> f64 {
    x.x * x.x + x.y * x.y + x.z * x.z
}

pub fn abs(x: &V3) -> f64 {
    abs2(x).sqrt()
}

pub fn v(x: f64, y: f64, z: f64) -> V3 {
    V3 { x, y, z }
}

pub fn v4(x: f64, y: f64, z: f64, w: f64) -> V4 {
    V4 { x, y, z, w }
}

pub fn mul(scalar: f64, x: &V3) -> V3 {
    V3 {
        x: x.x * scalar,
        y: x.y * scalar,
        z: x.z * scalar,
    }
}

pub fn add(x: &V3, y: &V3) -> V3 {
    V3 {
        x: x.x + y.x,
        y: x.y + y.y,
        z: x.z + y.z,
    }
}

pub fn dist(x: &V3, y: &V3) -> f64 {
    abs(&sub(x, y))
}

pub fn normalize(x: &V3) -> V3 {
    mul(1. / abs(x), x)
}

pub fn dot(x: &V3, y: &V3) -> f64 {
    x.x * y.x + x.y * y.y + x.z * y.z
}

pub fn cross(v1: &V3, v2: &V3) -> V3 {
    v(
        v1.y * v2.z - v1.z * v2.y,
        v1.z * v2.x - v1.x * v2.z,
        v1.x * v2.y - v1.y * v2.x,
    )
}

pub fn mix(a: f64, b: f64, h: f64) -> f64 {
    a + (b - a) * h
}

pub fn mix_v(a: &V3, b: &V3, h: f64) -> V3 {
    v(mix(a.x, b.x, h), mix(a.y, b.y, h), mix(a.z, b.z, h))
}

pub fn mul_v(x: &V3, y: &V3) -> V3 {
    v(x.x * y.x, x.y * y.y, x.z * y.z)
}

pub fn abs_v(x: &V3) -> V3 {
    v(x.x.abs(), x.y.abs(), x.z.abs())
}

pub fn max_v(x: &V3, s: f64) -> V3 {
    v(x.x.max(s), x.y.max(s), x.z.max(s))
}

impl ops::Add<V3> for V3 {
    type Output = V3;

    fn add(self, rhs: V3) -> V3 {
        return add(&self, &rhs)
    }
}

impl ops::Sub<V3> for V3 {
    type Output = V3;

    fn sub(self, rhs: V3) -> V3 {
        return sub(&self, &rhs)
    }
}

impl ops::Mul<V3> for f64 {
    type Output = V3;

    fn mul(self, rhs: V3) -> Self::Output {
        return mul(self, &rhs)
    }
}

impl ops::Add<V4> for V4 {
    type Output = V4;

    fn add(self, rhs: V4) -> V4 {
        return v4(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl ops::Mul<V4> for f64 {
    type Output = V4;

    fn mul(self, rhs: V4) -> Self::Output {
        return v4(self * rhs.x, self * rhs.y, self * rhs.z, self * rhs.w)
    }
}

impl ops::Mul<V4> for M4 {
    type Output = V4;

    fn mul(self, rhs: V4) -> Self::Output {
        return rhs.x * self.v0 + rhs.y * self.v1 + rhs.z * self.v2 + rhs.w * self.v3
    }
}

pub const B1: V3 = V3 {
    x: 1.,
    y: 0.,
    z: 0.,
};

pub const B2: V3 = V3 {
    x: 0.,
    y: 1.,
    z: 0.,
};

pub const B3: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 1.,
};

pub const O: V3 = V3 {
    x: 0.,
    y: 0.,
    z: 0.,
};
