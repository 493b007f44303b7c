//! Property-based keypad session tests
//!
//! Session invariants that must hold under any sequence of key presses,
//! plus targeted checks for the seams the properties lean on.

use calcular::core::{
    evaluate, format_display, transition, CalcEvent, DisplayPolicy, Operator, Session,
    ERROR_MARKER,
};
use calcular::driver::KeypadDriver;
use calcular::wasm::DomDriver;
use proptest::prelude::*;

// ===== Strategies =====

fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
        Just(Operator::Modulo),
    ]
}

fn event_strategy() -> impl Strategy<Value = CalcEvent> {
    prop_oneof![
        4 => digit_strategy().prop_map(CalcEvent::Digit),
        1 => Just(CalcEvent::Decimal),
        2 => operator_strategy().prop_map(CalcEvent::Operator),
        1 => Just(CalcEvent::Equals),
        1 => Just(CalcEvent::ToggleSign),
        1 => Just(CalcEvent::Clear),
    ]
}

fn fold_events(events: &[CalcEvent], policy: &DisplayPolicy) -> Session {
    let mut session = Session::new();
    for &event in events {
        session = transition(&session, event, policy);
    }
    session
}

fn digit_events(value: u32) -> Vec<CalcEvent> {
    value
        .to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .map(|digit| CalcEvent::Digit(digit as u8))
        .collect()
}

fn button_id_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => digit_strategy().prop_map(|d| format!("btn-{d}")),
        1 => Just("btn-decimal".to_string()),
        1 => Just("btn-plus".to_string()),
        1 => Just("btn-minus".to_string()),
        1 => Just("btn-times".to_string()),
        1 => Just("btn-divide".to_string()),
        1 => Just("btn-mod".to_string()),
        1 => Just("btn-equals".to_string()),
        1 => Just("btn-sign".to_string()),
        1 => Just("btn-clear".to_string()),
        1 => Just("btn-ghost".to_string()),
    ]
}

// ===== Session properties =====

proptest! {
    #[test]
    fn prop_display_width_never_exceeds_budget(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let policy = DisplayPolicy::new();
        let session = fold_events(&events, &policy);
        if session.display() != ERROR_MARKER {
            prop_assert!(
                policy.display_width(session.display()) <= policy.digit_budget,
                "display {:?} is too wide", session.display()
            );
        }
    }

    #[test]
    fn prop_display_is_numeric_or_the_marker(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let policy = DisplayPolicy::new();
        let session = fold_events(&events, &policy);
        if session.display() != ERROR_MARKER {
            prop_assert!(session.display().parse::<f64>().is_ok());
        }
    }

    #[test]
    fn prop_error_flag_tracks_the_marker(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let policy = DisplayPolicy::new();
        let session = fold_events(&events, &policy);
        prop_assert_eq!(session.has_error(), session.display() == ERROR_MARKER);
    }

    #[test]
    fn prop_staged_value_and_operator_come_in_pairs(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let policy = DisplayPolicy::new();
        let session = fold_events(&events, &policy);
        prop_assert_eq!(
            session.previous_value().is_some(),
            session.operation().is_some()
        );
    }

    #[test]
    fn prop_clear_always_resets(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let policy = DisplayPolicy::new();
        let mut events = events;
        events.push(CalcEvent::Clear);
        prop_assert_eq!(fold_events(&events, &policy), Session::new());
    }

    #[test]
    fn prop_error_state_ignores_everything_but_clear(
        events in prop::collection::vec(event_strategy(), 0..60),
        extra in event_strategy(),
    ) {
        let policy = DisplayPolicy::new();
        let session = fold_events(&events, &policy);
        if session.has_error() && extra != CalcEvent::Clear {
            prop_assert_eq!(transition(&session, extra, &policy), session);
        }
    }

    #[test]
    fn prop_overlong_entry_keeps_the_first_nine_digits(
        digits in prop::collection::vec(digit_strategy(), 10..15)
    ) {
        prop_assume!(digits[0] != 0);
        let policy = DisplayPolicy::new();
        let events: Vec<CalcEvent> = digits.iter().map(|&d| CalcEvent::Digit(d)).collect();
        let session = fold_events(&events, &policy);
        let expected: String = digits
            .iter()
            .take(9)
            .map(|&d| char::from_digit(u32::from(d), 10).unwrap())
            .collect();
        prop_assert_eq!(session.display(), expected.as_str());
    }

    #[test]
    fn prop_double_sign_toggle_is_identity(
        digits in prop::collection::vec(digit_strategy(), 1..8)
    ) {
        let policy = DisplayPolicy::new();
        let events: Vec<CalcEvent> = digits.iter().map(|&d| CalcEvent::Digit(d)).collect();
        let before = fold_events(&events, &policy);
        let once = transition(&before, CalcEvent::ToggleSign, &policy);
        let twice = transition(&once, CalcEvent::ToggleSign, &policy);
        prop_assert_eq!(twice.display(), before.display());
    }

    #[test]
    fn prop_typed_arithmetic_matches_direct_evaluation(
        a in 0u32..100_000,
        b in 1u32..100_000,
        op in operator_strategy(),
    ) {
        let policy = DisplayPolicy::new();
        let mut session = Session::new();
        for event in digit_events(a) {
            session = transition(&session, event, &policy);
        }
        session = transition(&session, CalcEvent::Operator(op), &policy);
        for event in digit_events(b) {
            session = transition(&session, event, &policy);
        }
        session = transition(&session, CalcEvent::Equals, &policy);

        match evaluate(f64::from(a), f64::from(b), op) {
            Ok(result) => {
                prop_assert_eq!(session.display(), format_display(result, &policy));
            }
            Err(_) => prop_assert_eq!(session.display(), ERROR_MARKER),
        }
    }

    #[test]
    fn prop_dom_driver_survives_any_click_sequence(
        ids in prop::collection::vec(button_id_strategy(), 0..40)
    ) {
        let policy = DisplayPolicy::new();
        let mut driver = DomDriver::new();
        for id in &ids {
            driver.click(id);
        }
        let display = driver.display_element_text();
        if display != ERROR_MARKER {
            prop_assert!(policy.display_width(&display) <= policy.digit_budget);
            prop_assert!(display.parse::<f64>().is_ok());
        }
        prop_assert_eq!(driver.has_error(), display == ERROR_MARKER);
        prop_assert_eq!(driver.dom().event_history().len(), ids.len());
    }
}

// ===== Invariant checks =====

#[test]
fn invariant_initial_session_is_cleared() {
    let session = Session::new();
    assert_eq!(session.display(), "0");
    assert_eq!(session.operation_trail(), "");
    assert!(!session.has_error());
    assert!(!session.awaiting_operand());
}

#[test]
fn invariant_error_marker_never_parses_as_a_number() {
    assert!(ERROR_MARKER.parse::<f64>().is_err());
}

#[test]
fn invariant_standard_budget_is_nine_characters() {
    assert_eq!(DisplayPolicy::new().digit_budget, 9);
    assert_eq!(DisplayPolicy::DEFAULT_DIGIT_BUDGET, 9);
}

#[test]
fn invariant_every_operator_has_distinct_glyphs() {
    let mut symbols: Vec<&str> = Operator::ALL.iter().map(Operator::display_symbol).collect();
    symbols.sort_unstable();
    symbols.dedup();
    assert_eq!(symbols.len(), Operator::ALL.len());
}
