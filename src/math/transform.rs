use super::tuple::{Point, Vector};
use super::{Matrix, Ray, Vector3};
use crate::error::MathError;

use std::ops::{Div, Mul};

/// A matrix together with its inverse.
///
/// `*` maps from local to world space using `forward`, `/` maps back using `reverse`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3 {
    pub forward: Matrix,
    pub reverse: Matrix,
}

impl Transform3 {
    /// fails instead of silently substituting the identity when `forward` is singular
    pub fn new(forward: Matrix) -> Result<Self, MathError> {
        Ok(Transform3 {
            forward,
            reverse: forward.try_inverse()?,
        })
    }

    pub const fn new_from_raw(forward: Matrix, reverse: Matrix) -> Self {
        Transform3 { forward, reverse }
    }

    pub const IDENTITY: Transform3 = Transform3::new_from_raw(Matrix::IDENTITY, Matrix::IDENTITY);

    pub fn translation(shift: Vector3) -> Self {
        Transform3::new_from_raw(Matrix::translation(shift), Matrix::translation(-shift))
    }

    /// same singularity rule as [`Matrix::try_inverse`]: |x * y * z| < f32::EPSILON is rejected
    pub fn scale(factors: Vector3) -> Result<Self, MathError> {
        let determinant = factors.x * factors.y * factors.z;
        if determinant.abs() < f32::EPSILON {
            return Err(MathError::SingularMatrix { determinant });
        }
        Ok(Transform3::new_from_raw(
            Matrix::scaling(factors),
            Matrix::scaling(Vector3::new(1.0 / factors.x, 1.0 / factors.y, 1.0 / factors.z)),
        ))
    }

    // rotations are orthonormal, so the reverse is the transpose
    pub fn rotation_x(radians: f32) -> Self {
        let m = Matrix::rotation_x(radians);
        Transform3::new_from_raw(m, m.transpose())
    }

    pub fn rotation_y(radians: f32) -> Self {
        let m = Matrix::rotation_y(radians);
        Transform3::new_from_raw(m, m.transpose())
    }

    pub fn rotation_z(radians: f32) -> Self {
        let m = Matrix::rotation_z(radians);
        Transform3::new_from_raw(m, m.transpose())
    }

    pub fn inverse(self) -> Self {
        Transform3::new_from_raw(self.reverse, self.forward)
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Transform3::IDENTITY
    }
}

impl Mul<Point> for Transform3 {
    type Output = Point;
    fn mul(self, rhs: Point) -> Point {
        self.forward * rhs
    }
}

impl Mul<Vector> for Transform3 {
    type Output = Vector;
    fn mul(self, rhs: Vector) -> Vector {
        self.forward * rhs
    }
}

impl Mul<Ray> for Transform3 {
    type Output = Ray;
    fn mul(self, rhs: Ray) -> Ray {
        rhs.transformed(&self.forward)
    }
}

/// `a * b` applies `a` first, then `b`
impl Mul for Transform3 {
    type Output = Transform3;
    fn mul(self, rhs: Transform3) -> Transform3 {
        Transform3::new_from_raw(self.forward * rhs.forward, rhs.reverse * self.reverse)
    }
}

impl Div<Point> for Transform3 {
    type Output = Point;
    fn div(self, rhs: Point) -> Point {
        self.reverse * rhs
    }
}

impl Div<Vector> for Transform3 {
    type Output = Vector;
    fn div(self, rhs: Vector) -> Vector {
        self.reverse * rhs
    }
}

impl Div<Ray> for Transform3 {
    type Output = Ray;
    fn div(self, rhs: Ray) -> Ray {
        rhs.transformed(&self.reverse)
    }
}
