use super::misc::nearly_equal;
use super::{Vector3, Vector4};

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

/// Compile time tag deciding the homogeneous `w` of a [`Tuple`].
pub trait TupleKind: Copy + Clone + fmt::Debug + Default {
    const W: f32;
}

#[derive(Copy, Clone, Debug, Default)]
pub struct PointKind;

#[derive(Copy, Clone, Debug, Default)]
pub struct VectorKind;

impl TupleKind for PointKind {
    const W: f32 = 1.0;
}

impl TupleKind for VectorKind {
    const W: f32 = 0.0;
}

/// xyz triple whose homogeneous w comes from its kind rather than from storage.
///
/// Only the arithmetic that keeps w in {0, 1} is implemented: point - point is a vector,
/// point +/- vector is a point, vectors form the usual vector space. Adding two points
/// does not compile.
#[derive(Copy, Clone, Default)]
pub struct Tuple<K: TupleKind> {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    kind: PhantomData<K>,
}

pub type Point = Tuple<PointKind>;
pub type Vector = Tuple<VectorKind>;

impl<K: TupleKind> Tuple<K> {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Tuple {
            x,
            y,
            z,
            kind: PhantomData,
        }
    }
    pub const fn w(&self) -> f32 {
        K::W
    }
    pub fn is_point(&self) -> bool {
        K::W == PointKind::W
    }
    pub fn is_vector(&self) -> bool {
        K::W == VectorKind::W
    }
    pub const fn to_homogeneous(&self) -> Vector4 {
        Vector4::new(self.x, self.y, self.z, K::W)
    }
    pub const fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Point {
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0, 0.0);

    pub fn dot(&self, other: Vector) -> f32 {
        self.xyz().dot(other.xyz())
    }
    pub fn cross(&self, other: Vector) -> Vector {
        self.xyz().cross(other.xyz()).into()
    }
    pub fn length(&self) -> f32 {
        self.xyz().length()
    }
    pub fn normalized(&self) -> Vector {
        self.xyz().normalized().into()
    }
}

impl<K: TupleKind> fmt::Debug for Tuple<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(if self.is_point() { "Point" } else { "Vector" })
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<K: TupleKind> PartialEq for Tuple<K> {
    fn eq(&self, other: &Self) -> bool {
        nearly_equal(self.x, other.x) && nearly_equal(self.y, other.y) && nearly_equal(self.z, other.z)
    }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, other: Point) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, other: Vector) -> Point {
        Point::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, other: Vector) -> Point {
        self + (-other)
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, other: Vector) -> Vector {
        self + (-other)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    fn mul(self, other: f32) -> Vector {
        Vector::new(self.x * other, self.y * other, self.z * other)
    }
}

impl Mul<Vector> for f32 {
    type Output = Vector;
    fn mul(self, other: Vector) -> Vector {
        other * self
    }
}

impl<K: TupleKind> From<Vector3> for Tuple<K> {
    fn from(v: Vector3) -> Self {
        Tuple::new(v.x, v.y, v.z)
    }
}

impl<K: TupleKind> From<Tuple<K>> for Vector3 {
    fn from(t: Tuple<K>) -> Vector3 {
        t.xyz()
    }
}

impl<K: TupleKind> From<Tuple<K>> for Vector4 {
    fn from(t: Tuple<K>) -> Vector4 {
        t.to_homogeneous()
    }
}

impl<K: TupleKind> From<[f32; 3]> for Tuple<K> {
    fn from(other: [f32; 3]) -> Self {
        Tuple::new(other[0], other[1], other[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_decides_w() {
        let p = Point::new(4.3, -4.2, 3.1);
        assert_eq!(p.w(), 1.0);
        assert!(p.is_point());
        assert!(!p.is_vector());

        let v = Vector::new(4.3, -4.2, 3.1);
        assert_eq!(v.w(), 0.0);
        assert!(v.is_vector());
        assert!(!v.is_point());

        assert!(p.to_homogeneous().is_point());
        assert!(v.to_homogeneous().is_vector());
    }

    #[test]
    fn test_point_vector_arithmetic() {
        let p1 = Point::new(3.0, 2.0, 1.0);
        let p2 = Point::new(5.0, 6.0, 7.0);
        let d: Vector = p1 - p2;
        assert_eq!(d, Vector::new(-2.0, -4.0, -6.0));
        assert_eq!(p2 + d, p1);
        assert_eq!(p1 - d, p2);

        let v = Vector::new(1.0, 0.0, 0.0);
        assert_eq!(v + v, 2.0 * v);
        assert_eq!(v - v, Vector::ZERO);
        assert_eq!(Vector::new(1.0, 0.0, 0.0).cross(Vector::new(0.0, 1.0, 0.0)), Vector::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_conversions() {
        let p = Point::from([1.0, 2.0, 3.0]);
        assert_eq!(Vector4::from(p), Vector4::new(1.0, 2.0, 3.0, 1.0));
        let v = Vector::from(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector4::from(v), Vector4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(Vector3::from(v), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_debug_names_kind() {
        assert!(format!("{:?}", Point::ORIGIN).starts_with("Point"));
        assert!(format!("{:?}", Vector::ZERO).starts_with("Vector"));
    }
}
