//! Keypad layout and click routing
//!
//! The 19-button grid every front end renders: button definitions carry
//! their grid position and element id, and clicks resolve back to
//! keypad actions by id alone.

use crate::core::{CalcEvent, Operator};
use crate::wasm::dom::{DomElement, MockDom};

/// What a keypad button does when pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Enter a digit
    Digit(u8),
    /// Enter the decimal point
    Decimal,
    /// Stage an operator
    Operator(Operator),
    /// Evaluate the staged operation
    Equals,
    /// Reset the calculator
    Clear,
    /// Toggle the sign of the current operand
    ToggleSign,
}

impl KeypadAction {
    /// Button label as rendered on the keypad
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.display_symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::ToggleSign => "\u{b1}".to_string(),
        }
    }

    /// Element id of the button bound to this action
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(digit) => format!("btn-{digit}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::ToggleSign => "btn-sign".to_string(),
        }
    }

    /// Session event this action produces
    #[must_use]
    pub const fn to_event(&self) -> CalcEvent {
        match self {
            Self::Digit(digit) => CalcEvent::Digit(*digit),
            Self::Decimal => CalcEvent::Decimal,
            Self::Operator(op) => CalcEvent::Operator(*op),
            Self::Equals => CalcEvent::Equals,
            Self::Clear => CalcEvent::Clear,
            Self::ToggleSign => CalcEvent::ToggleSign,
        }
    }
}

/// A button placed on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Action the button triggers
    pub action: KeypadAction,
    /// Element id, derived from the action
    pub id: String,
    /// Grid row, top to bottom
    pub row: usize,
    /// Grid column, left to right
    pub col: usize,
    /// Number of grid columns the button spans
    pub col_span: usize,
}

impl KeypadButton {
    /// Creates a single-column button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self {
            id: action.element_id(),
            action,
            row,
            col,
            col_span: 1,
        }
    }

    /// Creates a button spanning several columns
    #[must_use]
    pub fn wide(action: KeypadAction, row: usize, col: usize, col_span: usize) -> Self {
        Self {
            id: action.element_id(),
            action,
            row,
            col,
            col_span,
        }
    }
}

/// The calculator keypad: a 5x4 grid of 19 buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout: clear row on top, digits below,
    /// operators down the right edge, a double-wide zero at the bottom
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::new(KeypadAction::Clear, 0, 0),
            KeypadButton::new(KeypadAction::ToggleSign, 0, 1),
            KeypadButton::new(KeypadAction::Operator(Operator::Modulo), 0, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Divide), 0, 3),
            KeypadButton::new(KeypadAction::Digit(7), 1, 0),
            KeypadButton::new(KeypadAction::Digit(8), 1, 1),
            KeypadButton::new(KeypadAction::Digit(9), 1, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Multiply), 1, 3),
            KeypadButton::new(KeypadAction::Digit(4), 2, 0),
            KeypadButton::new(KeypadAction::Digit(5), 2, 1),
            KeypadButton::new(KeypadAction::Digit(6), 2, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Subtract), 2, 3),
            KeypadButton::new(KeypadAction::Digit(1), 3, 0),
            KeypadButton::new(KeypadAction::Digit(2), 3, 1),
            KeypadButton::new(KeypadAction::Digit(3), 3, 2),
            KeypadButton::new(KeypadAction::Operator(Operator::Add), 3, 3),
            KeypadButton::wide(KeypadAction::Digit(0), 4, 0, 2),
            KeypadButton::new(KeypadAction::Decimal, 4, 2),
            KeypadButton::new(KeypadAction::Equals, 4, 3),
        ];
        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Every button, in layout order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid size as `(rows, cols)`
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button covering a grid cell, honoring column spans
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons
            .iter()
            .find(|b| b.row == row && col >= b.col && col < b.col + b.col_span)
    }

    /// Button with the given element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Resolves a click on an element id to the action it triggers
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|b| b.action)
    }

    /// Builds one DOM element per button. Operator buttons carry their
    /// ASCII symbol in `data-action` for dispatch from plain JavaScript.
    #[must_use]
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|button| {
                let action_attr = match button.action {
                    KeypadAction::Operator(op) => op.symbol(),
                    _ => button.id.trim_start_matches("btn-"),
                };
                let mut element = DomElement::new("button")
                    .with_id(&button.id)
                    .with_text(&button.action.label())
                    .with_class("keypad-btn")
                    .with_class(&format!("keypad-row-{}", button.row))
                    .with_class(&format!("keypad-col-{}", button.col))
                    .with_attr("data-action", action_attr);
                if button.col_span > 1 {
                    element = element.with_class("keypad-wide");
                }
                element
            })
            .collect()
    }

    /// Builds the keypad container with every button as a child
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        let mut keypad = DomElement::new("div").with_id("keypad").with_class("keypad");
        keypad.children = self.create_dom_elements();
        keypad
    }
}

/// Mounts a keypad into a mock DOM
pub trait MockDomKeypadExt {
    /// Registers every button and appends the keypad to the root
    fn add_keypad(&mut self, keypad: &Keypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &Keypad) {
        for element in keypad.create_dom_elements() {
            self.register_element(element);
        }
        let keypad_element = keypad.create_keypad_element();
        self.root.children.push(keypad_element.clone());
        self.register_element(keypad_element);
    }
}
