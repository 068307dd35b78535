#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod prelude;
pub mod probe;
pub mod profile;

pub use error::MathError;
