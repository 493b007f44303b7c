//! Mock-DOM keypad walkthrough
//!
//! Drives the calculator the way a browser would, one click at a time,
//! and finishes by running the shared specification on both drivers.
//!
//! Run with: cargo run --example keypad_clicks

use calcular::prelude::*;

fn click_and_report(driver: &mut DomDriver, id: &str) {
    driver.click(id);
    println!(
        "  click {:<12} display: {:<9}  trail: {:?}",
        id,
        driver.display_element_text(),
        driver.trail_element_text()
    );
}

fn main() {
    println!("╔══════════════════════════════════════════╗");
    println!("║  calcular: mock-DOM keypad walkthrough   ║");
    println!("╚══════════════════════════════════════════╝");
    println!();

    let mut driver = DomDriver::new();

    println!("Keypad layout:");
    let (rows, cols) = driver.keypad().dimensions();
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..cols {
            let label = driver
                .keypad()
                .button_at(row, col)
                .map_or_else(String::new, |b| b.action.label());
            line.push_str(&format!("[{label:^3}]"));
        }
        println!("  {line}");
    }
    println!();

    println!("Step 1: 9 + 5 =");
    click_and_report(&mut driver, "btn-9");
    click_and_report(&mut driver, "btn-plus");
    click_and_report(&mut driver, "btn-5");
    click_and_report(&mut driver, "btn-equals");
    println!();

    println!("Step 2: divide by zero, then recover");
    click_and_report(&mut driver, "btn-8");
    click_and_report(&mut driver, "btn-divide");
    click_and_report(&mut driver, "btn-0");
    click_and_report(&mut driver, "btn-equals");
    println!("  error flag: {}", driver.has_error());
    click_and_report(&mut driver, "btn-clear");
    println!();

    println!("Step 3: shared specification on every driver");
    let mut core = CoreDriver::new();
    run_full_specification(&mut core);
    println!("  {} driver: specification passed", core.name());
    let mut dom = DomDriver::new();
    run_full_specification(&mut dom);
    println!("  {} driver: specification passed", dom.name());
    println!();

    println!("Session snapshot: {}", driver.calculator().session().to_json().unwrap_or_default());
    println!("Done: {} buttons, {} clicks dispatched",
        driver.keypad().button_count(),
        driver.dom().event_history().len()
    );
}
