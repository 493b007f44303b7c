//! Keypad session state machine
//!
//! A session is an immutable snapshot of the calculator between key
//! presses. [`transition`] is the single pure step function; [`Calculator`]
//! owns a session plus a display policy and folds events into it.

use serde::{Deserialize, Serialize};

use crate::core::{evaluate, format_display, DisplayPolicy, Operator, ERROR_MARKER};

/// A keypad event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcEvent {
    /// A digit key, `0` through `9`
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// An operator key
    Operator(Operator),
    /// The equals key
    Equals,
    /// The sign toggle key
    ToggleSign,
    /// The clear key
    Clear,
}

/// Snapshot of the calculator between key presses.
///
/// Either both `previous_value` and `operation` are set (an operation is
/// staged) or neither is. While `has_error` is set, every event except
/// [`CalcEvent::Clear`] leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    display: String,
    previous_value: Option<f64>,
    operation: Option<Operator>,
    awaiting_operand: bool,
    has_error: bool,
    operation_trail: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates the initial session: display `"0"`, nothing staged
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            awaiting_operand: false,
            has_error: false,
            operation_trail: String::new(),
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand of the staged operation, if any
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Staged operator, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    /// Whether the next digit starts a fresh operand
    #[must_use]
    pub fn awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Whether the session is locked in the error state
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.has_error
    }

    /// Running operation trail, e.g. `"9 + 5"`
    #[must_use]
    pub fn operation_trail(&self) -> &str {
        &self.operation_trail
    }

    /// Serializes the session as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Error state: display locked on the marker, nothing staged
    fn error_with_trail(operation_trail: String) -> Self {
        Self {
            display: ERROR_MARKER.to_string(),
            previous_value: None,
            operation: None,
            awaiting_operand: true,
            has_error: true,
            operation_trail,
        }
    }
}

/// Applies one keypad event to a session, producing the next session.
#[must_use]
pub fn transition(session: &Session, event: CalcEvent, policy: &DisplayPolicy) -> Session {
    if session.has_error && event != CalcEvent::Clear {
        return session.clone();
    }
    match event {
        CalcEvent::Digit(digit) => apply_digit(session, digit, policy),
        CalcEvent::Decimal => apply_decimal(session, policy),
        CalcEvent::Operator(op) => apply_operator(session, op, policy),
        CalcEvent::Equals => apply_equals(session, policy),
        CalcEvent::ToggleSign => apply_toggle_sign(session, policy),
        CalcEvent::Clear => Session::new(),
    }
}

fn apply_digit(session: &Session, digit: u8, policy: &DisplayPolicy) -> Session {
    let Some(ch) = char::from_digit(u32::from(digit), 10) else {
        return session.clone();
    };
    let mut next = session.clone();
    if next.awaiting_operand {
        next.display = ch.to_string();
        next.awaiting_operand = false;
    } else if next.display == "0" {
        next.display = ch.to_string();
    } else if policy.at_capacity(&next.display) {
        return next;
    } else {
        next.display.push(ch);
    }
    refresh_trail(&mut next, policy);
    next
}

fn apply_decimal(session: &Session, policy: &DisplayPolicy) -> Session {
    let mut next = session.clone();
    if next.awaiting_operand {
        next.display = "0.".to_string();
        next.awaiting_operand = false;
    } else if next.display.contains('.') || policy.at_capacity(&next.display) {
        return next;
    } else {
        next.display.push('.');
    }
    refresh_trail(&mut next, policy);
    next
}

fn apply_operator(session: &Session, op: Operator, policy: &DisplayPolicy) -> Session {
    match (session.previous_value, session.operation) {
        // A full pair is typed: fold it before staging the next operator.
        (Some(previous), Some(pending)) if !session.awaiting_operand => {
            match evaluate(previous, parse_display(&session.display), pending) {
                Ok(result) => {
                    let formatted = format_display(result, policy);
                    if formatted == ERROR_MARKER {
                        return Session::error_with_trail(stage_trail(ERROR_MARKER, op));
                    }
                    Session {
                        operation_trail: stage_trail(&formatted, op),
                        display: formatted,
                        previous_value: Some(result),
                        operation: Some(op),
                        awaiting_operand: true,
                        has_error: false,
                    }
                }
                Err(_) => Session::error_with_trail(stage_trail(ERROR_MARKER, op)),
            }
        }
        // Operator pressed again before an operand: replace it, keeping
        // the stored left operand.
        (Some(_), Some(_)) => {
            let mut next = session.clone();
            next.operation = Some(op);
            next.awaiting_operand = true;
            next.operation_trail = stage_trail(&next.display, op);
            next
        }
        // First operator of a chain.
        _ => {
            let mut next = session.clone();
            next.previous_value = Some(parse_display(&next.display));
            next.operation = Some(op);
            next.awaiting_operand = true;
            next.operation_trail = stage_trail(&next.display, op);
            next
        }
    }
}

fn apply_equals(session: &Session, policy: &DisplayPolicy) -> Session {
    let (Some(previous), Some(pending)) = (session.previous_value, session.operation) else {
        return session.clone();
    };
    match evaluate(previous, parse_display(&session.display), pending) {
        Ok(result) => {
            let formatted = format_display(result, policy);
            if formatted == ERROR_MARKER {
                return Session::error_with_trail(String::new());
            }
            Session {
                display: formatted,
                previous_value: None,
                operation: None,
                awaiting_operand: true,
                has_error: false,
                operation_trail: String::new(),
            }
        }
        Err(_) => Session::error_with_trail(String::new()),
    }
}

fn apply_toggle_sign(session: &Session, policy: &DisplayPolicy) -> Session {
    if session.display == "0" {
        return session.clone();
    }
    let negated = -parse_display(&session.display);
    let magnitude = format_display(negated.abs(), policy);
    if magnitude == ERROR_MARKER {
        return session.clone();
    }
    let display = if negated < 0.0 && magnitude != "0" {
        format!("-{magnitude}")
    } else {
        magnitude
    };
    if policy.display_width(&display) > policy.digit_budget {
        return session.clone();
    }
    let mut next = session.clone();
    next.display = display;
    refresh_trail(&mut next, policy);
    next
}

/// Rebuilds the trail around the in-progress right operand
fn refresh_trail(next: &mut Session, policy: &DisplayPolicy) {
    if let (Some(previous), Some(op)) = (next.previous_value, next.operation) {
        next.operation_trail = format!(
            "{} {} {}",
            format_display(previous, policy),
            op.display_symbol(),
            next.display
        );
    }
}

fn stage_trail(left: &str, op: Operator) -> String {
    format!("{left} {}", op.display_symbol())
}

/// Display strings are always valid decimal numbers, so the fallback is
/// unreachable in practice
fn parse_display(display: &str) -> f64 {
    display.parse().unwrap_or(0.0)
}

/// Calculator front end: a session folded under a fixed display policy
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    session: Session,
    policy: DisplayPolicy,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the standard display policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(DisplayPolicy::new())
    }

    /// Creates a calculator with a custom display policy
    #[must_use]
    pub fn with_policy(policy: DisplayPolicy) -> Self {
        Self {
            session: Session::new(),
            policy,
        }
    }

    /// Current session snapshot
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Display policy in effect
    #[must_use]
    pub fn policy(&self) -> &DisplayPolicy {
        &self.policy
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.session.display()
    }

    /// Current operation trail
    #[must_use]
    pub fn operation_trail(&self) -> &str {
        self.session.operation_trail()
    }

    /// Whether the calculator is locked in the error state
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.session.has_error()
    }

    /// Applies one keypad event
    pub fn apply(&mut self, event: CalcEvent) -> &Session {
        self.session = transition(&self.session, event, &self.policy);
        &self.session
    }

    /// Presses a digit key
    pub fn press_digit(&mut self, digit: u8) -> &Session {
        self.apply(CalcEvent::Digit(digit))
    }

    /// Presses the decimal point key
    pub fn press_decimal(&mut self) -> &Session {
        self.apply(CalcEvent::Decimal)
    }

    /// Presses an operator key
    pub fn press_operator(&mut self, op: Operator) -> &Session {
        self.apply(CalcEvent::Operator(op))
    }

    /// Presses the equals key
    pub fn press_equals(&mut self) -> &Session {
        self.apply(CalcEvent::Equals)
    }

    /// Presses the sign toggle key
    pub fn press_toggle_sign(&mut self) -> &Session {
        self.apply(CalcEvent::ToggleSign)
    }

    /// Presses the clear key
    pub fn press_clear(&mut self) -> &Session {
        self.apply(CalcEvent::Clear)
    }
}
