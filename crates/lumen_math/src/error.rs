use thiserror::Error;

/// Errors raised by the math layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// LU decomposition found a zero row or a zero pivot.
    #[error("cannot invert a singular matrix")]
    SingularMatrix,
}
