use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Absolute per-component tolerance for approximate vector comparison.
/// Outputs of trigonometric and division operations accumulate floating
/// error, so tests never compare bitwise.
pub const EPSILON: f64 = 1e-15;

/// A three dimensional vector of f64 with value semantics: every algebraic
/// operation returns a new vector, except [`Vector3::add_with_scale`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3 { x, y, z }
    }

    pub fn dot(self, u: Vector3) -> f64 {
        self.x * u.x + self.y * u.y + self.z * u.z
    }

    pub fn squared_length(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// The 2-norm, or Euclidean length.
    pub fn length(self) -> f64 {
        self.squared_length().sqrt()
    }

    pub fn squared_distance(self, u: Vector3) -> f64 {
        (u - self).squared_length()
    }

    pub fn distance(self, u: Vector3) -> f64 {
        self.squared_distance(u).sqrt()
    }

    /// The 1-norm; used as the delta-v saturation norm.
    pub fn norm1(self) -> f64 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    pub fn scale(self, c: f64) -> Vector3 {
        Vector3::new(self.x * c, self.y * c, self.z * c)
    }

    /// A vector parallel to `self` with length `l`. The zero vector has no
    /// direction to preserve and scales to itself.
    pub fn scale_to(self, l: f64) -> Vector3 {
        if self == Vector3::ZERO {
            return Vector3::ZERO;
        }
        self.scale(l / self.length())
    }

    /// The unit vector along `self`.
    pub fn unit(self) -> Vector3 {
        self.scale_to(1.0)
    }

    /// The cross product `self × u` (right-hand rule).
    pub fn cross(self, u: Vector3) -> Vector3 {
        Vector3::new(
            self.y * u.z - self.z * u.y,
            self.z * u.x - self.x * u.z,
            self.x * u.y - self.y * u.x,
        )
    }

    /// Fused `self += u * s` without an intermediate vector; the integrator
    /// calls this twice per tick.
    pub fn add_with_scale(&mut self, u: Vector3, s: f64) {
        self.x += u.x * s;
        self.y += u.y * s;
        self.z += u.z * s;
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, u: Vector3) -> Vector3 {
        Vector3::new(self.x + u.x, self.y + u.y, self.z + u.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, u: Vector3) {
        *self = *self + u;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, u: Vector3) -> Vector3 {
        Vector3::new(self.x - u.x, self.y - u.y, self.z - u.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, u: Vector3) {
        *self = *self - u;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, c: f64) -> Vector3 {
        self.scale(c)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self.scale(-1.0)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon)
            && f64::abs_diff_eq(&self.y, &other.y, epsilon)
            && f64::abs_diff_eq(&self.z, &other.z, epsilon)
    }
}
