//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT sleep. The TUI waits on terminal
//! events and task completion with `tokio::select!`, never on a timer.
//! **Exceptions**: Test code.

use architectural_enforcement::{scan_production_code, Violation};

/// Test that production code does not contain sleep() calls
#[test]
fn test_no_sleep_in_production_code() {
    let violations = find_sleep_violations();

    if !violations.is_empty() {
        eprintln!("\nSleep calls found in production code:\n");

        for violation in &violations {
            eprintln!("  {violation}");
        }

        eprintln!("\nFORBIDDEN:");
        eprintln!("  - Sleep in polling loops");
        eprintln!("  - Sleep as poor man's synchronization");
        eprintln!("\nUse tokio::select! on the event stream and task handles instead.");

        panic!(
            "\nFound {} sleep violation(s) in production code.",
            violations.len()
        );
    }
}

fn find_sleep_violations() -> Vec<Violation> {
    scan_production_code(|code, _| {
        if code.contains("thread::sleep") {
            Some("Thread sleep")
        } else if code.contains("time::sleep(") {
            Some("Async sleep")
        } else {
            None
        }
    })
}
