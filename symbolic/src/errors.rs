//! Failures raised by exact arithmetic.

use thiserror::Error;

pub type SymbolicResult<T> = Result<T, SymbolicError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolicError {
    #[error("division by zero")]
    DivisionByZero,

    /// Exact rational arithmetic left the 64-bit range.
    #[error("numeric overflow in {0}")]
    Overflow(&'static str),

    /// A function was evaluated at a pole, e.g. `log(0)`.
    #[error("{0} is undefined")]
    Pole(String),
}
