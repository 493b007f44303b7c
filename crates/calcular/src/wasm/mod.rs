//! Browser keypad surface with mock DOM testing
//!
//! The keypad, the DOM wiring, and the click-to-event mapping are all
//! testable without a browser: [`MockDom`] stands in for the real DOM,
//! and the `wasm` feature adds the actual `wasm-bindgen` bindings on top.

pub mod dom;
pub mod driver;
pub mod keypad;

#[cfg(feature = "wasm")]
pub mod browser;

pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::DomDriver;
pub use keypad::{Keypad, KeypadAction, KeypadButton, MockDomKeypadExt};
