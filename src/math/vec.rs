use super::misc::nearly_equal;
use crate::error::MathError;

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vector3 {
        Vector3 { x, y, z }
    }
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);
}

impl Vector3 {
    pub fn dot(&self, other: Vector3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// right handed: X.cross(Y) == Z
    pub fn cross(&self, other: Vector3) -> Self {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// scales to unit length in place. a zero vector is left untouched.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len > 0.0 {
            self.x /= len;
            self.y /= len;
            self.z /= len;
        }
    }

    /// unit length copy, or the vector itself when its length is zero.
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    pub fn try_normalized(&self) -> Result<Self, MathError> {
        if self.length() > 0.0 {
            Ok(self.normalized())
        } else {
            Err(MathError::DegenerateVector)
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Vector3) -> bool {
        nearly_equal(self.x, other.x) && nearly_equal(self.y, other.y) && nearly_equal(self.z, other.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Vector3) {
        *self = *self + other;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Vector3) {
        *self = *self - other;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    fn mul(self, other: f32) -> Vector3 {
        Vector3::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    fn mul(self, other: Vector3) -> Vector3 {
        other * self
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, other: f32) {
        *self = *self * other;
    }
}

impl Div<f32> for Vector3 {
    type Output = Vector3;
    fn div(self, other: f32) -> Vector3 {
        Vector3::new(self.x / other, self.y / other, self.z / other)
    }
}

impl DivAssign<f32> for Vector3 {
    fn div_assign(&mut self, other: f32) {
        *self = *self / other;
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(other: [f32; 3]) -> Vector3 {
        Vector3::new(other[0], other[1], other[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> [f32; 3] {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Vector3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_equality_uses_epsilon() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0 + f32::EPSILON / 4.0));
        assert_ne!(a, Vector3::new(1.0, 2.0, 3.1));
    }

    #[test]
    fn test_dot_and_length() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length_squared(), 25.0);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Z.cross(Vector3::X), Vector3::Y);

        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(2.0, 3.0, 4.0);
        assert_eq!(a.cross(b), Vector3::new(-1.0, 2.0, -1.0));
    }

    #[test]
    fn test_cross_anticommutes() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut random_vector =
            || Vector3::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0));
        for _ in 0..64 {
            let a = random_vector();
            let b = random_vector();
            assert_eq!(a.cross(b), -(b.cross(a)));
            assert_eq!(a.cross(a), Vector3::ZERO);
        }
    }

    #[test]
    fn test_normalize() {
        let mut v = Vector3::new(0.0, 3.0, 4.0);
        v.normalize();
        assert_eq!(v, Vector3::new(0.0, 0.6, 0.8));
        assert_eq!(v.normalized(), v);
        assert_eq!(Vector3::new(5.0, 0.0, 0.0).normalized(), Vector3::X);
    }

    #[test]
    fn test_normalize_zero_vector_is_noop() {
        let mut v = Vector3::ZERO;
        v.normalize();
        assert_eq!(v, Vector3::ZERO);
        let n = Vector3::ZERO.normalized();
        assert!(n.is_finite());
        assert_eq!(n, Vector3::ZERO);
        assert!(matches!(
            Vector3::ZERO.try_normalized(),
            Err(MathError::DegenerateVector)
        ));
        assert_eq!(Vector3::Y.try_normalized().unwrap(), Vector3::Y);
    }

    #[test]
    fn test_array_conversions() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let a: [f32; 3] = v.into();
        assert_eq!(a, [1.0, 2.0, 3.0]);
    }
}
