//! Core calculator logic
//!
//! Pure session semantics with no DOM or browser dependencies.
//! All transitions are deterministic and fully testable.

mod evaluator;
mod format;
mod session;

pub use evaluator::{evaluate, Operator};
pub use format::{format_display, DisplayPolicy, ERROR_MARKER};
pub use session::{transition, CalcEvent, Calculator, Session};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Division or modulo by zero
    #[error("Division by zero")]
    DivisionByZero,
    /// Result exceeds representable range
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Result is not a valid number
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            CalcError::Overflow.to_string(),
            "Overflow: result exceeds maximum value"
        );
        assert_eq!(
            CalcError::InvalidResult("NaN".to_string()).to_string(),
            "Invalid result: NaN"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CalcError::DivisionByZero, CalcError::DivisionByZero);
        assert_ne!(CalcError::DivisionByZero, CalcError::Overflow);
    }

    #[test]
    fn test_result_alias() {
        let ok: CalcResult<f64> = Ok(1.5);
        let err: CalcResult<f64> = Err(CalcError::Overflow);
        assert!(ok.is_ok());
        assert!(err.is_err());
    }
}
