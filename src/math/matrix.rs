use super::misc::{det2, nearly_equal};
use super::tuple::{Point, Vector};
use super::{Vector3, Vector4};
use crate::error::MathError;

use serde::{Deserialize, Serialize};
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// 4x4 single precision matrix, stored column major: element (row, col) lives at
/// `elements[row + col * 4]`.
///
/// `a * b` composes so that `a` is applied first. In textbook notation it is `b·a`.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub struct Matrix {
    pub elements: [f32; 16],
}

impl Matrix {
    pub const COLUMNS: usize = 4;
    pub const ROWS: usize = 4;

    pub const ZERO: Matrix = Matrix::from_elements([0.0; 16]);
    pub const IDENTITY: Matrix = Matrix::diagonal(1.0);

    pub const fn from_elements(elements: [f32; 16]) -> Matrix {
        Matrix { elements }
    }

    /// `d` on the main diagonal, zero elsewhere
    pub const fn diagonal(d: f32) -> Matrix {
        let mut elements = [0.0; 16];
        elements[0] = d;
        elements[5] = d;
        elements[10] = d;
        elements[15] = d;
        Matrix { elements }
    }

    pub const fn identity() -> Matrix {
        Matrix::IDENTITY
    }

    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::ZERO;
        for c in 0..Self::COLUMNS {
            for r in 0..Self::ROWS {
                result.elements[c + r * Self::COLUMNS] = self.elements[r + c * Self::COLUMNS];
            }
        }
        result
    }

    pub fn transpose_in_place(&mut self) {
        for c in 0..Self::COLUMNS {
            for r in (c + 1)..Self::ROWS {
                self.elements.swap(r + c * Self::COLUMNS, c + r * Self::COLUMNS);
            }
        }
    }

    pub fn trace(&self) -> f32 {
        self.elements[0] + self.elements[5] + self.elements[10] + self.elements[15]
    }

    pub fn frobenius_norm(&self) -> f32 {
        self.elements.iter().map(|e| e * e).sum::<f32>().sqrt()
    }

    /// cofactor expansion along the first stored column, written out in full.
    pub fn determinant(&self) -> f32 {
        let m = &self.elements;
        m[0] * (m[5] * det2(m[10], m[11], m[14], m[15]) - m[6] * det2(m[9], m[11], m[13], m[15])
            + m[7] * det2(m[9], m[10], m[13], m[14]))
            - m[1]
                * (m[4] * det2(m[10], m[11], m[14], m[15]) - m[6] * det2(m[8], m[11], m[12], m[15])
                    + m[7] * det2(m[8], m[10], m[12], m[14]))
            + m[2]
                * (m[4] * det2(m[9], m[11], m[13], m[15]) - m[5] * det2(m[8], m[11], m[12], m[15])
                    + m[7] * det2(m[8], m[9], m[12], m[13]))
            - m[3]
                * (m[4] * det2(m[9], m[10], m[13], m[14]) - m[5] * det2(m[8], m[10], m[12], m[14])
                    + m[6] * det2(m[8], m[9], m[12], m[13]))
    }

    /// adjugate divided by the determinant. fails when |det| < f32::EPSILON.
    pub fn try_inverse(&self) -> Result<Matrix, MathError> {
        let det = self.determinant();
        if det.abs() < f32::EPSILON {
            return Err(MathError::SingularMatrix { determinant: det });
        }

        let m = &self.elements;

        // 2x2 minors shared between cofactors, named by the element indices they span
        let d_10_15 = det2(m[10], m[11], m[14], m[15]);
        let d_9_15 = det2(m[9], m[11], m[13], m[15]);
        let d_9_14 = det2(m[9], m[10], m[13], m[14]);
        let d_8_15 = det2(m[8], m[11], m[12], m[15]);
        let d_8_14 = det2(m[8], m[10], m[12], m[14]);
        let d_8_13 = det2(m[8], m[9], m[12], m[13]);
        let d_6_15 = det2(m[6], m[7], m[14], m[15]);
        let d_5_15 = det2(m[5], m[7], m[13], m[15]);
        let d_5_14 = det2(m[5], m[6], m[13], m[14]);
        let d_4_15 = det2(m[4], m[7], m[12], m[15]);
        let d_4_14 = det2(m[4], m[6], m[12], m[14]);
        let d_4_13 = det2(m[4], m[5], m[12], m[13]);
        let d_6_11 = det2(m[6], m[7], m[10], m[11]);
        let d_5_11 = det2(m[5], m[7], m[9], m[11]);
        let d_5_10 = det2(m[5], m[6], m[9], m[10]);
        let d_4_11 = det2(m[4], m[7], m[8], m[11]);
        let d_4_10 = det2(m[4], m[6], m[8], m[10]);
        let d_4_9 = det2(m[4], m[5], m[8], m[9]);

        let adjugate = [
            m[5] * d_10_15 - m[6] * d_9_15 + m[7] * d_9_14,
            -(m[1] * d_10_15 - m[2] * d_9_15 + m[3] * d_9_14),
            m[1] * d_6_15 - m[2] * d_5_15 + m[3] * d_5_14,
            -(m[1] * d_6_11 - m[2] * d_5_11 + m[3] * d_5_10),
            -(m[4] * d_10_15 - m[6] * d_8_15 + m[7] * d_8_14),
            m[0] * d_10_15 - m[2] * d_8_15 + m[3] * d_8_14,
            -(m[0] * d_6_15 - m[2] * d_4_15 + m[3] * d_4_14),
            m[0] * d_6_11 - m[2] * d_4_11 + m[3] * d_4_10,
            m[4] * d_9_15 - m[5] * d_8_15 + m[7] * d_8_13,
            -(m[0] * d_9_15 - m[1] * d_8_15 + m[3] * d_8_13),
            m[0] * d_5_15 - m[1] * d_4_15 + m[3] * d_4_13,
            -(m[0] * d_5_11 - m[1] * d_4_11 + m[3] * d_4_9),
            -(m[4] * d_9_14 - m[5] * d_8_14 + m[6] * d_8_13),
            m[0] * d_9_14 - m[1] * d_8_14 + m[2] * d_8_13,
            -(m[0] * d_5_14 - m[1] * d_4_14 + m[2] * d_4_13),
            m[0] * d_5_10 - m[1] * d_4_10 + m[2] * d_4_9,
        ];

        Ok(Matrix::from_elements(adjugate.map(|e| e / det)))
    }

    /// like `try_inverse`, but a singular matrix yields the identity.
    /// the substitution is indistinguishable from a genuine identity result, check
    /// `determinant` or use `try_inverse` when that matters.
    pub fn inverse(&self) -> Matrix {
        self.try_inverse().unwrap_or_else(|e| {
            warn!("{}, substituting identity", e);
            Matrix::IDENTITY
        })
    }
}

// named constructors
impl Matrix {
    pub fn translation(offset: Vector3) -> Matrix {
        let mut m = Matrix::IDENTITY;
        m[(0, 3)] = offset.x;
        m[(1, 3)] = offset.y;
        m[(2, 3)] = offset.z;
        m
    }

    pub fn scaling(factors: Vector3) -> Matrix {
        let mut m = Matrix::IDENTITY;
        m[(0, 0)] = factors.x;
        m[(1, 1)] = factors.y;
        m[(2, 2)] = factors.z;
        m
    }

    pub fn rotation_x(radians: f32) -> Matrix {
        let (s, c) = radians.sin_cos();
        let mut m = Matrix::IDENTITY;
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        m
    }

    pub fn rotation_y(radians: f32) -> Matrix {
        let (s, c) = radians.sin_cos();
        let mut m = Matrix::IDENTITY;
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        m
    }

    pub fn rotation_z(radians: f32) -> Matrix {
        let (s, c) = radians.sin_cos();
        let mut m = Matrix::IDENTITY;
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        m
    }

    /// right handed perspective projection, `fov` is the vertical field of view in radians.
    /// clip space depth runs from -1 at `near` to 1 at `far`, w receives -z.
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Matrix {
        let f = 1.0 / (fov / 2.0).tan();
        let mut m = Matrix::ZERO;
        m[(0, 0)] = f / aspect;
        m[(1, 1)] = f;
        m[(2, 2)] = -(far + near) / (far - near);
        m[(2, 3)] = -(2.0 * far * near) / (far - near);
        m[(3, 2)] = -1.0;
        m
    }

    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix {
        let mut m = Matrix::IDENTITY;
        m[(0, 0)] = 2.0 / (right - left);
        m[(1, 1)] = 2.0 / (top - bottom);
        m[(2, 2)] = -2.0 / (far - near);
        m[(0, 3)] = -(right + left) / (right - left);
        m[(1, 3)] = -(top + bottom) / (top - bottom);
        m[(2, 3)] = -(far + near) / (far - near);
        m
    }

    /// world to view matrix for a camera at `eye` looking towards `target`.
    /// the view looks down -z, with x = up × z and y = z × x.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Matrix {
        let z = (eye - target).normalized();
        let x = up.cross(z).normalized();
        let y = z.cross(x);

        let mut m = Matrix::IDENTITY;
        for (row, axis) in [x, y, z].into_iter().enumerate() {
            m[(row, 0)] = axis.x;
            m[(row, 1)] = axis.y;
            m[(row, 2)] = axis.z;
            m[(row, 3)] = -axis.dot(eye);
        }
        m
    }

    /// `xy` is the amount x moves in proportion to y, and so on.
    pub fn shear(xy: f32, xz: f32, yx: f32, yz: f32, zx: f32, zy: f32) -> Matrix {
        let mut m = Matrix::IDENTITY;
        m[(0, 1)] = xy;
        m[(0, 2)] = xz;
        m[(1, 0)] = yx;
        m[(1, 2)] = yz;
        m[(2, 0)] = zx;
        m[(2, 1)] = zy;
        m
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| nearly_equal(*a, *b))
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.elements[row + col * Self::COLUMNS]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.elements[row + col * Self::COLUMNS]
    }
}

impl Add for Matrix {
    type Output = Matrix;
    fn add(self, rhs: Matrix) -> Matrix {
        let mut result = self;
        for (a, b) in result.elements.iter_mut().zip(rhs.elements) {
            *a += b;
        }
        result
    }
}

impl Sub for Matrix {
    type Output = Matrix;
    fn sub(self, rhs: Matrix) -> Matrix {
        let mut result = self;
        for (a, b) in result.elements.iter_mut().zip(rhs.elements) {
            *a -= b;
        }
        result
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: f32) -> Matrix {
        Matrix::from_elements(self.elements.map(|e| e * rhs))
    }
}

impl Mul for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        let mut result = Matrix::ZERO;
        for c in 0..Self::COLUMNS {
            for r in 0..Self::ROWS {
                result.elements[r + c * Self::COLUMNS] = (0..Self::COLUMNS)
                    .map(|k| self.elements[k + c * Self::COLUMNS] * rhs.elements[r + k * Self::COLUMNS])
                    .sum();
            }
        }
        result
    }
}

impl Mul<Vector4> for Matrix {
    type Output = Vector4;
    fn mul(self, v: Vector4) -> Vector4 {
        let e = &self.elements;
        Vector4::new(
            e[0] * v.x + e[4] * v.y + e[8] * v.z + e[12] * v.w,
            e[1] * v.x + e[5] * v.y + e[9] * v.z + e[13] * v.w,
            e[2] * v.x + e[6] * v.y + e[10] * v.z + e[14] * v.w,
            e[3] * v.x + e[7] * v.y + e[11] * v.z + e[15] * v.w,
        )
    }
}

// affine use only: the resulting w is dropped, no perspective divide
impl Mul<Point> for Matrix {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        (self * p.to_homogeneous()).xyz().into()
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;
    fn mul(self, v: Vector) -> Vector {
        (self * v.to_homogeneous()).xyz().into()
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix {
    fn from(matrix: nalgebra::Matrix4<f32>) -> Self {
        // nalgebra is column major as well, so the slice maps over directly
        let mut elements = [0.0; 16];
        elements.copy_from_slice(matrix.as_slice());
        Matrix::from_elements(elements)
    }
}

impl From<Matrix> for nalgebra::Matrix4<f32> {
    fn from(matrix: Matrix) -> Self {
        nalgebra::Matrix4::from_column_slice(&matrix.elements)
    }
}
