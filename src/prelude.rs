pub use crate::error::MathError;
pub use crate::geometry::{RayIntersection, Sphere};
pub use crate::math::*;
