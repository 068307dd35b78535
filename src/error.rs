use thiserror::Error;

/// Failures of the fallible math operations.
///
/// The infallible counterparts (`Matrix::inverse`, `Vector3::normalized`) swallow these and
/// substitute a fallback value instead.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("matrix is singular, determinant {determinant} is below epsilon")]
    SingularMatrix { determinant: f32 },
    #[error("cannot normalize a zero length vector")]
    DegenerateVector,
}
