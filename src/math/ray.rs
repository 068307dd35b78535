use super::tuple::{Point, Vector};
use super::{Matrix, Vector3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// `direction` is normalized here, whatever length the caller passes.
    /// a zero direction stays zero and every `at(t)` collapses onto the origin.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        if direction.length_squared() == 0.0 {
            warn!("ray at {:?} constructed with a zero length direction", origin);
        }
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + t * self.direction
    }

    /// origin is mapped as a point and direction as a vector, then the direction is renormalized,
    /// so parametric distances are not preserved under scaling.
    pub fn transformed(&self, matrix: &Matrix) -> Ray {
        let origin = *matrix * Point::from(self.origin);
        let direction = *matrix * Vector::from(self.direction);
        Ray::new(origin.into(), direction.into())
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray {
            origin: Vector3::ZERO,
            direction: Vector3::Z,
        }
    }
}
