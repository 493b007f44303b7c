//! Browser bindings
//!
//! Thin `wasm-bindgen` glue over the calculator and keypad. The page
//! wires each button's click listener to [`BrowserCalculator::handle_button`],
//! passing the clicked element id.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::core::Calculator;
use crate::wasm::keypad::Keypad;

/// Calculator handle exported to JavaScript
#[wasm_bindgen]
#[derive(Debug)]
pub struct BrowserCalculator {
    calculator: Calculator,
    keypad: Keypad,
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Creates a calculator with the standard display policy
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            calculator: Calculator::new(),
            keypad: Keypad::new(),
        }
    }

    /// Routes a button click by element id. Returns the new display
    /// text, or nothing when the id is not a keypad button.
    pub fn handle_button(&mut self, button_id: &str) -> Option<String> {
        let action = self.keypad.handle_click(button_id)?;
        self.calculator.apply(action.to_event());
        Some(self.calculator.display().to_string())
    }

    /// Current display text
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    /// Current operation trail
    #[wasm_bindgen(getter)]
    pub fn trail(&self) -> String {
        self.calculator.operation_trail().to_string()
    }

    /// Whether the calculator is locked in the error state
    #[wasm_bindgen(getter)]
    pub fn has_error(&self) -> bool {
        self.calculator.has_error()
    }

    /// Session snapshot as JSON, handy from the browser console
    #[must_use]
    pub fn state_json(&self) -> String {
        self.calculator
            .session()
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }
}

/// Module entry point, called once by the JS loader
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"calcular ready".into());
}
