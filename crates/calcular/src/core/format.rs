//! Bounded-width display formatting
//!
//! Renders results into a fixed character budget: fractional digits are
//! sacrificed first, and values that cannot fit at all collapse to the
//! error marker. Output is always plain decimal, never scientific.

use serde::{Deserialize, Serialize};

/// Literal shown when a result cannot be rendered
pub const ERROR_MARKER: &str = "ERROR";

/// Rendering rules for the bounded display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPolicy {
    /// Maximum visible characters (digits plus at most one decimal point)
    pub digit_budget: usize,
    /// Whether a leading minus sign consumes budget
    pub count_sign_in_width: bool,
    /// Whether negative results render as the error marker
    pub reject_negative_results: bool,
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPolicy {
    /// Default character budget for pocket-calculator style displays
    pub const DEFAULT_DIGIT_BUDGET: usize = 9;

    /// Creates the standard policy: 9 characters, sign exempt,
    /// negative results allowed
    #[must_use]
    pub fn new() -> Self {
        Self {
            digit_budget: Self::DEFAULT_DIGIT_BUDGET,
            count_sign_in_width: false,
            reject_negative_results: false,
        }
    }

    /// Sets the character budget
    #[must_use]
    pub fn with_digit_budget(mut self, budget: usize) -> Self {
        self.digit_budget = budget;
        self
    }

    /// Sets whether a leading minus sign consumes budget
    #[must_use]
    pub fn with_sign_counted(mut self, counted: bool) -> Self {
        self.count_sign_in_width = counted;
        self
    }

    /// Sets whether negative results collapse to the error marker
    #[must_use]
    pub fn with_negative_rejection(mut self, reject: bool) -> Self {
        self.reject_negative_results = reject;
        self
    }

    /// Width of a display string under this policy
    #[must_use]
    pub fn display_width(&self, display: &str) -> usize {
        let body = if self.count_sign_in_width {
            display
        } else {
            display.strip_prefix('-').unwrap_or(display)
        };
        body.chars().count()
    }

    /// Whether a display string has no room left for another character
    #[must_use]
    pub fn at_capacity(&self, display: &str) -> bool {
        self.display_width(display) >= self.digit_budget
    }
}

/// Formats a result value for the bounded display.
///
/// Non-finite values, values whose integer part alone exceeds the budget,
/// and (under a rejecting policy) negative values all render as
/// [`ERROR_MARKER`]. Anything that rounds to zero renders as `"0"`,
/// never `"-0"`.
#[must_use]
pub fn format_display(value: f64, policy: &DisplayPolicy) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }
    if policy.reject_negative_results && value < 0.0 {
        return ERROR_MARKER.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    let negative = value < 0.0;
    let budget = if negative && policy.count_sign_in_width {
        policy.digit_budget.saturating_sub(1)
    } else {
        policy.digit_budget
    };

    let magnitude = value.abs();
    let rendered = magnitude.to_string();
    let body = if rendered.len() <= budget {
        rendered
    } else {
        match refit_fraction(magnitude, &rendered, budget) {
            Some(refit) => refit,
            None => return ERROR_MARKER.to_string(),
        }
    };

    if negative && body != "0" {
        format!("-{body}")
    } else {
        body
    }
}

/// Re-renders a too-wide value with however many fractional digits still
/// fit. Returns `None` when the integer part leaves no room for at least
/// one fractional digit.
fn refit_fraction(magnitude: f64, rendered: &str, budget: usize) -> Option<String> {
    let (int_part, _) = rendered.split_once('.')?;
    let allowance = budget.saturating_sub(int_part.len() + 1);
    if allowance == 0 {
        return None;
    }
    let refit = format!("{magnitude:.allowance$}");
    let refit = refit.trim_end_matches('0').trim_end_matches('.');
    Some(refit.to_string())
}
