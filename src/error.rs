// towernum: a numeric tower library in Rust
// 2026

// error.rs
//
// Error kinds surfaced by tower operations

use thiserror::Error;

/// Errors raised by numeric tower operations.
///
/// Every fallible entry point reports one of these kinds at the call
/// site; nothing is caught internally. Reader failures in non-strict
/// mode are not errors (the reader returns `None` instead).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumericError {
    /// An operand does not have the numeric type the operation requires,
    /// e.g. a complex number where only reals are ordered.
    #[error("{expected} required, but got {got}")]
    Type {
        expected: &'static str,
        got: String,
    },

    /// Host-integer coercion out of range without clamp permission.
    #[error("argument out of range: {0}")]
    Range(String),

    /// Integer quotient, remainder or modulo with a zero divisor.
    #[error("attempt to calculate a {0} by zero")]
    DivisionByZero(&'static str),

    /// A decimal exponent or `expt` argument beyond the supported range.
    #[error("implementation limit exceeded: {0}")]
    LimitViolation(String),

    /// Exact infinity, exact NaN, or an exact complex number was requested.
    #[error("exact {0} is not supported")]
    UnsupportedExact(&'static str),

    /// Malformed input to the number reader in strict mode.
    #[error("bad number format{msg}: {input}")]
    Parse { msg: String, input: String },

    /// No generic method registered for a non-numeric operand pair.
    #[error("operation {op} is not defined between {x} and {y}")]
    GenericDispatch {
        op: &'static str,
        x: String,
        y: String,
    },
}

pub type Result<T> = std::result::Result<T, NumericError>;

impl NumericError {
    pub(crate) fn type_error(expected: &'static str, got: impl ToString) -> Self {
        NumericError::Type {
            expected,
            got: got.to_string(),
        }
    }

    pub(crate) fn range(got: impl ToString) -> Self {
        NumericError::Range(got.to_string())
    }
}
