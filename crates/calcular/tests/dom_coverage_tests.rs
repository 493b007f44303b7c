//! Mock-DOM coverage tests
//!
//! Every keypad button exercised through the click path, the front-end
//! contract scenarios end to end, and step-by-step equivalence between
//! the core driver and the DOM driver.

use calcular::prelude::*;

fn click_script(driver: &mut DomDriver, ids: &[&str]) {
    for id in ids {
        driver.click(id);
    }
}

fn apply_action<D: KeypadDriver>(driver: &mut D, action: KeypadAction) {
    match action {
        KeypadAction::Digit(digit) => driver.press_digit(digit),
        KeypadAction::Decimal => driver.press_decimal(),
        KeypadAction::Operator(op) => driver.press_operator(op),
        KeypadAction::Equals => driver.press_equals(),
        KeypadAction::Clear => driver.press_clear(),
        KeypadAction::ToggleSign => driver.press_toggle_sign(),
    }
}

// ===== Button coverage =====

#[test]
fn test_all_nineteen_buttons_are_clickable() {
    let mut driver = DomDriver::new();
    let ids: Vec<String> = driver
        .keypad()
        .buttons()
        .iter()
        .map(|b| b.id.clone())
        .collect();
    assert_eq!(ids.len(), 19);

    for id in &ids {
        driver.click(id);
    }
    assert_eq!(driver.dom().event_history().len(), 19);
    for id in &ids {
        assert_eq!(driver.dom().click_count(id), 1, "expected one click on {id}");
    }
    assert!(!driver.has_error());
}

#[test]
fn test_button_labels_render_into_the_dom() {
    let driver = DomDriver::new();
    assert_eq!(driver.dom().get_element_text("btn-7"), Some("7"));
    assert_eq!(driver.dom().get_element_text("btn-divide"), Some("÷"));
    assert_eq!(driver.dom().get_element_text("btn-clear"), Some("AC"));
    assert_eq!(driver.dom().get_element_text("btn-sign"), Some("±"));
    assert_eq!(driver.dom().get_element_text("btn-equals"), Some("="));
}

// ===== Contract scenarios =====

#[test]
fn test_scenario_five_plus_three() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-5", "btn-plus", "btn-3", "btn-equals"]);
    assert_eq!(driver.display_element_text(), "8");
    assert_eq!(driver.trail_element_text(), "");
}

#[test]
fn test_scenario_trail_tracks_staged_operation() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-9", "btn-plus", "btn-5"]);
    assert_eq!(driver.display_element_text(), "5");
    assert_eq!(driver.trail_element_text(), "9 + 5");
}

#[test]
fn test_scenario_decimal_entry() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-3", "btn-decimal", "btn-1", "btn-4"]);
    assert_eq!(driver.display_element_text(), "3.14");
    driver.click("btn-decimal");
    assert_eq!(driver.display_element_text(), "3.14");
}

#[test]
fn test_scenario_negative_result_displays_by_default() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-3", "btn-minus", "btn-5", "btn-equals"]);
    assert_eq!(driver.display_element_text(), "-2");
    assert!(!driver.has_error());
}

#[test]
fn test_scenario_negative_result_errors_under_strict_policy() {
    let mut driver = DomDriver::with_policy(DisplayPolicy::new().with_negative_rejection(true));
    click_script(&mut driver, &["btn-3", "btn-minus", "btn-5", "btn-equals"]);
    assert_eq!(driver.display_element_text(), "ERROR");
    assert!(driver.has_error());
}

#[test]
fn test_scenario_divide_by_zero_and_recovery() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-8", "btn-divide", "btn-0", "btn-equals"]);
    assert_eq!(driver.display_element_text(), "ERROR");
    assert!(driver.has_error());

    driver.click("btn-1");
    assert_eq!(driver.display_element_text(), "ERROR");

    driver.click("btn-clear");
    assert_eq!(driver.display_element_text(), "0");
    assert_eq!(driver.trail_element_text(), "");
    assert!(!driver.has_error());
}

#[test]
fn test_scenario_sign_toggle_on_zero_is_noop() {
    let mut driver = DomDriver::new();
    driver.click("btn-sign");
    assert_eq!(driver.display_element_text(), "0");
}

#[test]
fn test_scenario_modulo() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-1", "btn-0", "btn-mod", "btn-3", "btn-equals"]);
    assert_eq!(driver.display_element_text(), "1");
}

#[test]
fn test_scenario_entry_capped_at_budget() {
    let mut driver = DomDriver::new();
    for id in [
        "btn-1", "btn-2", "btn-3", "btn-4", "btn-5", "btn-6", "btn-7", "btn-8", "btn-9",
        "btn-0",
    ] {
        driver.click(id);
    }
    assert_eq!(driver.display_element_text(), "123456789");
}

// ===== Error class mirroring =====

#[test]
fn test_error_class_absent_during_normal_use() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-7", "btn-times", "btn-6", "btn-equals"]);
    assert!(!driver
        .dom()
        .get_element("calc-display")
        .is_some_and(|e| e.has_class("error")));
}

#[test]
fn test_error_class_present_while_locked() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-9", "btn-mod", "btn-0", "btn-equals"]);
    assert!(driver
        .dom()
        .get_element("calc-display")
        .is_some_and(|e| e.has_class("error")));
}

// ===== Driver equivalence =====

#[test]
fn test_drivers_agree_step_by_step() {
    let script = [
        KeypadAction::Digit(7),
        KeypadAction::Decimal,
        KeypadAction::Digit(5),
        KeypadAction::Operator(Operator::Multiply),
        KeypadAction::Digit(4),
        KeypadAction::Equals,
        KeypadAction::ToggleSign,
        KeypadAction::Operator(Operator::Subtract),
        KeypadAction::Digit(9),
        KeypadAction::Equals,
        KeypadAction::Operator(Operator::Divide),
        KeypadAction::Digit(0),
        KeypadAction::Equals,
        KeypadAction::Digit(5),
        KeypadAction::Clear,
        KeypadAction::Digit(1),
        KeypadAction::Digit(0),
        KeypadAction::Operator(Operator::Modulo),
        KeypadAction::Digit(4),
        KeypadAction::Equals,
    ];

    let mut core = CoreDriver::new();
    let mut dom = DomDriver::new();
    for (step, &action) in script.iter().enumerate() {
        apply_action(&mut core, action);
        apply_action(&mut dom, action);
        assert_eq!(
            core.display(),
            dom.display(),
            "displays diverge at step {step}"
        );
        assert_eq!(core.trail(), dom.trail(), "trails diverge at step {step}");
        assert_eq!(
            core.has_error(),
            dom.has_error(),
            "error flags diverge at step {step}"
        );
    }
}

#[test]
fn test_full_specification_passes_on_both_drivers() {
    run_full_specification(&mut CoreDriver::new());
    run_full_specification(&mut DomDriver::new());
}

// ===== Snapshot serialization =====

#[test]
fn test_session_snapshot_as_json() {
    let mut driver = DomDriver::new();
    click_script(&mut driver, &["btn-9", "btn-plus"]);
    let json = driver.calculator().session().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["display"], "9");
    assert_eq!(value["operation"], "Add");
    assert_eq!(value["previous_value"], 9.0);
    assert_eq!(value["awaiting_operand"], true);
    assert_eq!(value["has_error"], false);
}
