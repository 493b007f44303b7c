//! Mock-DOM keypad driver
//!
//! Drives the calculator exactly the way a browser would: dispatch a
//! click at a button id, resolve it through the keypad, apply the
//! session event, and mirror the new state back into the DOM.

use crate::core::{Calculator, DisplayPolicy, Operator};
use crate::driver::KeypadDriver;
use crate::wasm::dom::{DomEvent, MockDom};
use crate::wasm::keypad::{Keypad, MockDomKeypadExt};

/// Driver over a mock DOM with a mounted keypad
#[derive(Debug, Clone, PartialEq)]
pub struct DomDriver {
    calculator: Calculator,
    keypad: Keypad,
    dom: MockDom,
}

impl Default for DomDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DomDriver {
    /// Creates a driver with the standard display policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(DisplayPolicy::new())
    }

    /// Creates a driver with a custom display policy
    #[must_use]
    pub fn with_policy(policy: DisplayPolicy) -> Self {
        let keypad = Keypad::new();
        let mut dom = MockDom::calculator();
        dom.add_keypad(&keypad);
        let mut driver = Self {
            calculator: Calculator::with_policy(policy),
            keypad,
            dom,
        };
        driver.sync_dom();
        driver
    }

    /// Clicks an element by id. Clicks on ids that are not keypad
    /// buttons are recorded in the event history but change nothing.
    pub fn click(&mut self, element_id: &str) {
        self.dom.dispatch_event(DomEvent::click(element_id));
        if let Some(action) = self.keypad.handle_click(element_id) {
            self.calculator.apply(action.to_event());
            self.sync_dom();
        }
    }

    /// Mirrors calculator state into the display elements
    fn sync_dom(&mut self) {
        let display = self.calculator.display().to_string();
        let trail = self.calculator.operation_trail().to_string();
        self.dom.set_element_text("calc-display", &display);
        self.dom.set_element_text("calc-trail", &trail);
        if let Some(element) = self.dom.get_element_mut("calc-display") {
            if self.calculator.has_error() {
                element.add_class("error");
            } else {
                element.remove_class("error");
            }
        }
    }

    /// Underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Mounted keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Mock DOM backing the driver
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Text of the display element
    #[must_use]
    pub fn display_element_text(&self) -> String {
        self.dom
            .get_element_text("calc-display")
            .unwrap_or_default()
            .to_string()
    }

    /// Text of the operation trail element
    #[must_use]
    pub fn trail_element_text(&self) -> String {
        self.dom
            .get_element_text("calc-trail")
            .unwrap_or_default()
            .to_string()
    }
}

impl KeypadDriver for DomDriver {
    fn press_digit(&mut self, digit: u8) {
        self.click(&format!("btn-{digit}"));
    }

    fn press_decimal(&mut self) {
        self.click("btn-decimal");
    }

    fn press_operator(&mut self, op: Operator) {
        self.click(&format!("btn-{}", op.name()));
    }

    fn press_equals(&mut self) {
        self.click("btn-equals");
    }

    fn press_toggle_sign(&mut self) {
        self.click("btn-sign");
    }

    fn press_clear(&mut self) {
        self.click("btn-clear");
    }

    // State is read back from the DOM, not the calculator, so these
    // also verify the sync path.

    fn display(&self) -> String {
        self.display_element_text()
    }

    fn trail(&self) -> String {
        self.trail_element_text()
    }

    fn has_error(&self) -> bool {
        self.dom
            .get_element("calc-display")
            .is_some_and(|e| e.has_class("error"))
    }

    fn name(&self) -> &'static str {
        "mock-dom"
    }
}
