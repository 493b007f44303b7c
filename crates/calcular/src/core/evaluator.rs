//! Binary operator evaluation
//!
//! IEEE 754 arithmetic with explicit guards: division and modulo by zero
//! are rejected before evaluation, non-finite results are rejected after.

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Binary operators the keypad can stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Remainder
    Modulo,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// ASCII symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    /// Glyph used on the keypad and in the operation trail
    #[must_use]
    pub const fn display_symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "\u{2212}",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
            Self::Modulo => "%",
        }
    }

    /// Short name, used to derive button element ids
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "plus",
            Self::Subtract => "minus",
            Self::Multiply => "times",
            Self::Divide => "divide",
            Self::Modulo => "mod",
        }
    }
}

/// Applies `op` to `a` and `b`.
///
/// # Errors
///
/// Returns [`CalcError::DivisionByZero`] when dividing or taking the
/// remainder by zero, [`CalcError::Overflow`] when the result is
/// infinite, and [`CalcError::InvalidResult`] when it is `NaN`.
pub fn evaluate(a: f64, b: f64, op: Operator) -> CalcResult<f64> {
    let result = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operator::Modulo => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a % b
        }
    };
    check_finite(result)
}

/// Rejects non-finite results
fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_nan() {
        Err(CalcError::InvalidResult("NaN".to_string()))
    } else if result.is_infinite() {
        Err(CalcError::Overflow)
    } else {
        Ok(result)
    }
}
