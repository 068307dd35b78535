mod color;
mod matrix;
mod misc;
mod ray;
mod transform;
mod tuple;
mod vec;
mod vec4;

pub use color::Color;
pub use matrix::Matrix;
pub use misc::nearly_equal;
pub use ray::Ray;
pub use std::f32::consts::PI;
pub const EPSILON: f32 = f32::EPSILON;
pub use transform::Transform3;
pub use tuple::{Point, PointKind, Tuple, TupleKind, Vector, VectorKind};
pub use vec::Vector3;
pub use vec4::Vector4;
