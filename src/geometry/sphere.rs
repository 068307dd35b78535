use crate::math::*;

use serde::{Deserialize, Serialize};

/// Result of [`Sphere::intersect`]. A miss is `hit == false` with both distances zero.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RayIntersection {
    pub hit: bool,
    pub t1: f32,
    pub t2: f32,
}

impl RayIntersection {
    pub const MISS: RayIntersection = RayIntersection {
        hit: false,
        t1: 0.0,
        t2: 0.0,
    };

    pub fn nearest(&self) -> Option<f32> {
        self.hit.then_some(self.t1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f32,
}

impl Sphere {
    /// radius is not validated, a non positive one gives meaningless intersections
    pub const fn new(center: Vector3, radius: f32) -> Sphere {
        Sphere { center, radius }
    }

    /// Both roots of the ray/sphere quadratic, smaller first, or `None` when the ray's line
    /// misses the sphere. Roots behind the origin are kept, so an origin inside the sphere
    /// yields a negative entry distance here.
    pub fn roots(&self, r: &Ray) -> Option<(f32, f32)> {
        let oc: Vector3 = r.origin - self.center;
        let a = r.direction.dot(r.direction);
        let b = 2.0 * oc.dot(r.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let discriminant_sqrt = discriminant.sqrt();
        let t1 = (-b - discriminant_sqrt) / (2.0 * a);
        let t2 = (-b + discriminant_sqrt) / (2.0 * a);
        if t1 > t2 {
            Some((t2, t1))
        } else {
            Some((t1, t2))
        }
    }

    /// Forward intersections only. When the ray starts inside the sphere the entry distance is
    /// dropped and both `t1` and `t2` report the exit; use [`Sphere::roots`] to get the entry.
    pub fn intersect(&self, r: &Ray) -> RayIntersection {
        match self.roots(r) {
            Some((_, t2)) if t2 < 0.0 => RayIntersection::MISS,
            Some((t1, t2)) if t1 >= 0.0 => RayIntersection { hit: true, t1, t2 },
            Some((_, t2)) => RayIntersection {
                hit: true,
                t1: t2,
                t2,
            },
            None => RayIntersection::MISS,
        }
    }

    /// unit outward normal. `point` is assumed to be on the surface, nothing checks that.
    pub fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.center).normalized()
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::new(Vector3::ZERO, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vector3::ZERO, 1.0)
    }

    #[test]
    fn test_constructors() {
        let sphere = Sphere::default();
        assert_eq!(sphere.center, Vector3::ZERO);
        assert_eq!(sphere.radius, 1.0);

        let sphere = Sphere::new(Vector3::new(1.0, 2.0, 3.0), 2.5);
        assert_eq!(sphere.center, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(sphere.radius, 2.5);
    }

    #[test]
    fn test_hit_from_outside() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::Z);
        let hit = unit_sphere().intersect(&ray);
        assert!(hit.hit);
        assert_eq!(hit.t1, 4.0);
        assert_eq!(hit.t2, 6.0);
        assert_eq!(hit.nearest(), Some(4.0));

        assert_eq!(ray.at(hit.t1), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.at(hit.t2), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_miss() {
        let ray = Ray::new(Vector3::new(0.0, 2.0, -5.0), Vector3::Z);
        let hit = unit_sphere().intersect(&ray);
        assert!(!hit.hit);
        assert_eq!(hit, RayIntersection::MISS);
        assert_eq!(hit.nearest(), None);
        assert_eq!(unit_sphere().roots(&ray), None);
    }

    #[test]
    fn test_tangent_hit() {
        let ray = Ray::new(Vector3::new(0.0, 1.0, -5.0), Vector3::Z);
        let hit = unit_sphere().intersect(&ray);
        assert!(hit.hit);
        assert_eq!(hit.t1, 5.0);
        assert_eq!(hit.t2, 5.0);
    }

    #[test]
    fn test_hit_from_inside_collapses_to_exit() {
        let sphere = unit_sphere();
        let ray = Ray::new(Vector3::ZERO, Vector3::Z);
        let hit = sphere.intersect(&ray);
        assert!(hit.hit);
        assert_eq!(hit.t1, 1.0);
        assert_eq!(hit.t2, 1.0);
        // the entry distance is still available from the raw roots
        assert_eq!(sphere.roots(&ray), Some((-1.0, 1.0)));

        for radius in [0.5, 2.0, 7.0] {
            let sphere = Sphere::new(Vector3::new(1.0, -2.0, 3.0), radius);
            for direction in [Vector3::X, -Vector3::Y, Vector3::new(0.0, 0.0, -3.0)] {
                let hit = sphere.intersect(&Ray::new(sphere.center, direction));
                assert!(hit.hit);
                assert_eq!(hit.t1, hit.t2);
                assert!((hit.t2 - radius).abs() <= radius * 1e-6);
            }
        }
    }

    #[test]
    fn test_inside_off_center() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 0.5), Vector3::Z);
        let hit = unit_sphere().intersect(&ray);
        assert!(hit.hit);
        assert_eq!(hit.t1, 0.5);
        assert_eq!(hit.t2, 0.5);
    }

    #[test]
    fn test_sphere_behind_ray() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::Z);
        assert_eq!(unit_sphere().intersect(&ray), RayIntersection::MISS);
        assert_eq!(unit_sphere().roots(&ray), Some((-6.0, -4.0)));
    }

    #[test]
    fn test_offset_sphere() {
        let sphere = Sphere::new(Vector3::new(3.0, 0.0, 0.0), 2.0);
        let ray = Ray::new(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0));
        let hit = sphere.intersect(&ray);
        assert!(hit.hit);
        assert_eq!((hit.t1, hit.t2), (1.0, 5.0));
    }

    #[test]
    fn test_normal_at() {
        let sphere = unit_sphere();
        assert_eq!(sphere.normal_at(Vector3::X), Vector3::X);
        assert_eq!(sphere.normal_at(-Vector3::Z), -Vector3::Z);

        let k = 3.0f32.sqrt() / 3.0;
        let n = sphere.normal_at(Vector3::new(k, k, k));
        assert!((n.length() - 1.0).abs() < 1e-6);

        let sphere = Sphere::new(Vector3::new(0.0, 1.0, 0.0), 2.0);
        assert_eq!(sphere.normal_at(Vector3::new(0.0, 3.0, 0.0)), Vector3::Y);
    }

    #[test]
    fn test_hit_point_and_normal_flow() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, 10.0), 2.0);
        let ray = Ray::new(Vector3::ZERO, Vector3::Z);
        let t = sphere.intersect(&ray).nearest().unwrap();
        let point = ray.at(t);
        assert_eq!(point, Vector3::new(0.0, 0.0, 8.0));
        assert_eq!(sphere.normal_at(point), -Vector3::Z);
    }
}
