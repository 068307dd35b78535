use super::misc::nearly_equal;
use super::Vector3;
use crate::error::MathError;

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// homogeneous 4 component vector. w == 1.0 marks a point, w == 0.0 a direction.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vector4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
        Vector4 { x, y, z, w }
    }
    pub const fn from_vec3(v: Vector3, w: f32) -> Vector4 {
        Vector4::new(v.x, v.y, v.z, w)
    }
    pub const ZERO: Vector4 = Vector4::new(0.0, 0.0, 0.0, 0.0);

    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }
    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }
}

impl Vector4 {
    pub fn dot(&self, other: Vector4) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn normalize(&mut self) {
        let len = self.length();
        if len > 0.0 {
            self.x /= len;
            self.y /= len;
            self.z /= len;
            self.w /= len;
        }
    }

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
}

impl PartialEq for Vector4 {
    fn eq(&self, other: &Vector4) -> bool {
        nearly_equal(self.x, other.x)
            && nearly_equal(self.y, other.y)
            && nearly_equal(self.z, other.z)
            && nearly_equal(self.w, other.w)
    }
}

impl Add for Vector4 {
    type Output = Vector4;
    fn add(self, other: Vector4) -> Vector4 {
        Vector4::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Vector4 {
    type Output = Vector4;
    fn sub(self, other: Vector4) -> Vector4 {
        Vector4::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Neg for Vector4 {
    type Output = Vector4;
    fn neg(self) -> Vector4 {
        Vector4::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Vector4;
    fn mul(self, other: f32) -> Vector4 {
        Vector4::new(self.x * other, self.y * other, self.z * other, self.w * other)
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;
    fn mul(self, other: Vector4) -> Vector4 {
        other * self
    }
}

impl Div<f32> for Vector4 {
    type Output = Vector4;
    fn div(self, other: f32) -> Vector4 {
        Vector4::new(self.x / other, self.y / other, self.z / other, self.w / other)
    }
}

impl From<[f32; 4]> for Vector4 {
    fn from(other: [f32; 4]) -> Vector4 {
        Vector4::new(other[0], other[1], other[2], other[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec3() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let p = Vector4::from_vec3(v, 1.0);
        assert!(p.is_point());
        assert!(!p.is_vector());
        assert_eq!(p.xyz(), v);

        let d = Vector4::from_vec3(v, 0.0);
        assert!(d.is_vector());
        assert!(!d.is_point());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector4::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Vector4::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(-a, Vector4::new(-1.0, -2.0, -3.0, -4.0));
        assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(0.5 * a, a / 2.0);
        assert_eq!(a.dot(b), 5.0);
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let p1 = Vector4::new(3.0, 2.0, 1.0, 1.0);
        let p2 = Vector4::new(5.0, 6.0, 7.0, 1.0);
        assert!((p1 - p2).is_vector());
    }

    #[test]
    fn test_normalize() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v.length(), 2.0);
        assert_eq!(v.normalized(), Vector4::new(0.5, 0.5, 0.5, 0.5));

        let mut zero = Vector4::ZERO;
        zero.normalize();
        assert_eq!(zero, Vector4::ZERO);
        assert!(Vector4::ZERO.try_normalized().is_err());
    }
}
