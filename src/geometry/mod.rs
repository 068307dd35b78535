mod sphere;

pub use sphere::{RayIntersection, Sphere};
