//! Unified keypad driver API
//!
//! One specification, many drivers: the same verification routines run
//! against the bare session core and against the mock-DOM click path, so
//! every front end is held to identical behavior.

use crate::core::{Calculator, DisplayPolicy, Operator, Session};

/// Anything that behaves like the calculator keypad
pub trait KeypadDriver {
    /// Presses a digit key, `0` through `9`
    fn press_digit(&mut self, digit: u8);
    /// Presses the decimal point key
    fn press_decimal(&mut self);
    /// Presses an operator key
    fn press_operator(&mut self, op: Operator);
    /// Presses the equals key
    fn press_equals(&mut self);
    /// Presses the sign toggle key
    fn press_toggle_sign(&mut self);
    /// Presses the clear key
    fn press_clear(&mut self);
    /// Current display text
    fn display(&self) -> String;
    /// Current operation trail
    fn trail(&self) -> String;
    /// Whether the calculator is locked in the error state
    fn has_error(&self) -> bool;
    /// Driver name, for reporting
    fn name(&self) -> &'static str;
}

/// Driver over the bare session core, no DOM involved
#[derive(Debug, Clone, PartialEq)]
pub struct CoreDriver {
    calculator: Calculator,
}

impl Default for CoreDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreDriver {
    /// Creates a driver with the standard display policy
    #[must_use]
    pub fn new() -> Self {
        Self {
            calculator: Calculator::new(),
        }
    }

    /// Creates a driver with a custom display policy
    #[must_use]
    pub fn with_policy(policy: DisplayPolicy) -> Self {
        Self {
            calculator: Calculator::with_policy(policy),
        }
    }

    /// Underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Current session snapshot
    #[must_use]
    pub fn session(&self) -> &Session {
        self.calculator.session()
    }
}

impl KeypadDriver for CoreDriver {
    fn press_digit(&mut self, digit: u8) {
        self.calculator.press_digit(digit);
    }

    fn press_decimal(&mut self) {
        self.calculator.press_decimal();
    }

    fn press_operator(&mut self, op: Operator) {
        self.calculator.press_operator(op);
    }

    fn press_equals(&mut self) {
        self.calculator.press_equals();
    }

    fn press_toggle_sign(&mut self) {
        self.calculator.press_toggle_sign();
    }

    fn press_clear(&mut self) {
        self.calculator.press_clear();
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn trail(&self) -> String {
        self.calculator.operation_trail().to_string()
    }

    fn has_error(&self) -> bool {
        self.calculator.has_error()
    }

    fn name(&self) -> &'static str {
        "core"
    }
}

/// Types a number one keypad press per character. Characters other than
/// digits and the decimal point are ignored.
pub fn enter_number<D: KeypadDriver + ?Sized>(driver: &mut D, number: &str) {
    for ch in number.chars() {
        if ch == '.' {
            driver.press_decimal();
        } else if let Some(digit) = ch.to_digit(10) {
            driver.press_digit(digit as u8);
        }
    }
}

/// Verifies digit entry: appending, leading zeros, and the width budget.
///
/// # Panics
///
/// Panics when the driver deviates from the expected behavior.
pub fn verify_digit_entry<D: KeypadDriver + ?Sized>(driver: &mut D) {
    driver.press_clear();
    driver.press_digit(1);
    driver.press_digit(2);
    driver.press_digit(3);
    assert_eq!(driver.display(), "123", "digits should append");

    driver.press_clear();
    driver.press_digit(0);
    driver.press_digit(0);
    driver.press_digit(7);
    assert_eq!(driver.display(), "7", "leading zeros should collapse");

    driver.press_clear();
    for digit in [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 5] {
        driver.press_digit(digit);
    }
    assert_eq!(
        driver.display(),
        "987654321",
        "entry should stop at the display budget"
    );
}

/// Verifies decimal point entry.
///
/// # Panics
///
/// Panics when the driver deviates from the expected behavior.
pub fn verify_decimal_entry<D: KeypadDriver + ?Sized>(driver: &mut D) {
    driver.press_clear();
    enter_number(driver, "3.14");
    assert_eq!(driver.display(), "3.14");
    driver.press_decimal();
    assert_eq!(
        driver.display(),
        "3.14",
        "a second decimal point should be ignored"
    );

    driver.press_clear();
    driver.press_decimal();
    assert_eq!(driver.display(), "0.", "a bare point starts at zero");
    driver.press_digit(5);
    assert_eq!(driver.display(), "0.5");
}

/// Verifies operator staging, the trail, chaining, and replacement.
///
/// # Panics
///
/// Panics when the driver deviates from the expected behavior.
pub fn verify_operator_chaining<D: KeypadDriver + ?Sized>(driver: &mut D) {
    driver.press_clear();
    driver.press_digit(9);
    driver.press_operator(Operator::Add);
    driver.press_digit(5);
    assert_eq!(driver.display(), "5");
    assert_eq!(driver.trail(), "9 + 5", "trail shows the staged operation");
    driver.press_equals();
    assert_eq!(driver.display(), "14");
    assert_eq!(driver.trail(), "", "equals clears the trail");

    driver.press_clear();
    driver.press_digit(2);
    driver.press_operator(Operator::Add);
    driver.press_digit(3);
    driver.press_operator(Operator::Multiply);
    assert_eq!(driver.display(), "5", "chains fold left to right");
    driver.press_digit(4);
    driver.press_equals();
    assert_eq!(driver.display(), "20");

    driver.press_clear();
    driver.press_digit(6);
    driver.press_operator(Operator::Multiply);
    driver.press_operator(Operator::Add);
    driver.press_digit(2);
    driver.press_equals();
    assert_eq!(
        driver.display(),
        "8",
        "replacing the operator keeps the left operand"
    );
}

/// Verifies equals semantics, including the no-op and reuse cases.
///
/// # Panics
///
/// Panics when the driver deviates from the expected behavior.
pub fn verify_equals<D: KeypadDriver + ?Sized>(driver: &mut D) {
    driver.press_clear();
    driver.press_digit(5);
    driver.press_operator(Operator::Add);
    driver.press_digit(3);
    driver.press_equals();
    assert_eq!(driver.display(), "8");

    driver.press_equals();
    assert_eq!(
        driver.display(),
        "8",
        "equals without a staged operation is a no-op"
    );

    driver.press_clear();
    driver.press_digit(5);
    driver.press_operator(Operator::Add);
    driver.press_equals();
    assert_eq!(
        driver.display(),
        "10",
        "equals right after an operator reuses the display"
    );

    driver.press_clear();
    driver.press_digit(3);
    driver.press_operator(Operator::Subtract);
    driver.press_digit(5);
    driver.press_equals();
    assert_eq!(
        driver.display(),
        "-2",
        "negative results display under the standard policy"
    );
}

/// Verifies the sign toggle key.
///
/// # Panics
///
/// Panics when the driver deviates from the expected behavior.
pub fn verify_sign_toggle<D: KeypadDriver + ?Sized>(driver: &mut D) {
    driver.press_clear();
    driver.press_toggle_sign();
    assert_eq!(driver.display(), "0", "sign toggle on zero is a no-op");

    driver.press_digit(5);
    driver.press_toggle_sign();
    assert_eq!(driver.display(), "-5");
    driver.press_toggle_sign();
    assert_eq!(driver.display(), "5");

    driver.press_clear();
    driver.press_digit(5);
    driver.press_toggle_sign();
    driver.press_operator(Operator::Add);
    driver.press_digit(3);
    driver.press_equals();
    assert_eq!(driver.display(), "-2");
}

/// Verifies the error state and recovery through clear.
///
/// # Panics
///
/// Panics when the driver deviates from the expected behavior.
pub fn verify_error_recovery<D: KeypadDriver + ?Sized>(driver: &mut D) {
    driver.press_clear();
    driver.press_digit(8);
    driver.press_operator(Operator::Divide);
    driver.press_digit(0);
    driver.press_equals();
    assert_eq!(driver.display(), "ERROR");
    assert!(driver.has_error());
    assert_eq!(driver.trail(), "", "equals failures leave no trail");

    driver.press_digit(5);
    assert_eq!(driver.display(), "ERROR", "digits are ignored while in error");
    driver.press_operator(Operator::Add);
    assert!(driver.has_error(), "operators are ignored while in error");

    driver.press_clear();
    assert_eq!(driver.display(), "0");
    assert!(!driver.has_error());

    driver.press_digit(9);
    driver.press_operator(Operator::Modulo);
    driver.press_digit(0);
    driver.press_operator(Operator::Divide);
    assert_eq!(driver.display(), "ERROR");
    assert_eq!(
        driver.trail(),
        "ERROR ÷",
        "chained failures tag the trail with the next operator"
    );
    driver.press_clear();
}

/// Verifies the display width budget for entry and results.
///
/// # Panics
///
/// Panics when the driver deviates from the expected behavior.
pub fn verify_display_budget<D: KeypadDriver + ?Sized>(driver: &mut D) {
    driver.press_clear();
    enter_number(driver, "123456789");
    driver.press_digit(5);
    assert_eq!(driver.display(), "123456789");

    driver.press_clear();
    driver.press_digit(2);
    driver.press_operator(Operator::Divide);
    driver.press_digit(3);
    driver.press_equals();
    assert_eq!(
        driver.display(),
        "0.6666667",
        "long fractions are squeezed and rounded"
    );

    driver.press_clear();
    enter_number(driver, "999999999");
    driver.press_operator(Operator::Multiply);
    driver.press_digit(9);
    driver.press_equals();
    assert_eq!(driver.display(), "ERROR", "overflowing the display is an error");
    driver.press_clear();
}

/// Runs every verification routine in sequence. The driver is left in
/// the cleared state.
pub fn run_full_specification<D: KeypadDriver + ?Sized>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_entry(driver);
    verify_operator_chaining(driver);
    verify_equals(driver);
    verify_sign_toggle(driver);
    verify_error_recovery(driver);
    verify_display_budget(driver);
    driver.press_clear();
}
