//! Calcular: a keypad arithmetic calculator
//!
//! A pocket-calculator session core behind a browser keypad:
//! - Pure state machine: every key press is a pure session transition
//! - Bounded display: nine characters, fractional digits yield first
//! - One specification, many drivers: the bare core and the mock-DOM
//!   click path are verified against the same routines
//!
//! The `wasm` feature adds real browser bindings; everything else runs
//! and tests natively.
//!
//! # Example
//!
//! ```
//! use calcular::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.press_digit(5);
//! calc.press_operator(Operator::Add);
//! calc.press_digit(3);
//! calc.press_equals();
//! assert_eq!(calc.display(), "8");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        evaluate, format_display, transition, CalcError, CalcEvent, CalcResult, Calculator,
        DisplayPolicy, Operator, Session, ERROR_MARKER,
    };
    pub use crate::driver::{
        enter_number, run_full_specification, CoreDriver, KeypadDriver,
    };
    pub use crate::wasm::{
        DomDriver, DomElement, DomEvent, Keypad, KeypadAction, KeypadButton, MockDom,
        MockDomKeypadExt,
    };

    #[cfg(feature = "wasm")]
    pub use crate::wasm::browser::BrowserCalculator;
}
