//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Async production code in the core and the TUI MUST NOT use
//! blocking I/O.
//! **Required**: Use `reqwest` async APIs and `tokio::fs` / `tokio::net` inside
//! async functions.

use architectural_enforcement::{scan_production_code, Violation};

/// Test that production code does not use blocking I/O
#[test]
fn test_no_blocking_io_in_production_code() {
    let violations = find_blocking_io_violations();

    if !violations.is_empty() {
        eprintln!("\nBlocking I/O calls found in production code:\n");

        for violation in &violations {
            eprintln!("  {violation}");
        }

        eprintln!("\nFORBIDDEN:");
        eprintln!("  - reqwest::blocking::* anywhere");
        eprintln!("  - std::net::TcpStream, std::net::TcpListener");
        eprintln!("  - std::fs::* or std::process::Command inside async functions");
        eprintln!("\nACCEPTABLE:");
        eprintln!("  - Non-async functions (config loading, log file setup)");
        eprintln!("  - Test code");

        panic!(
            "\nFound {} blocking I/O violation(s) in production code.",
            violations.len()
        );
    }
}

fn find_blocking_io_violations() -> Vec<Violation> {
    scan_production_code(|code, in_async| {
        if code.contains("reqwest::blocking") {
            return Some("Blocking HTTP client");
        }
        if code.contains("std::net::") || code.contains("use std::net") {
            return Some("Blocking network I/O");
        }
        if in_async && code.contains("std::fs::") {
            return Some("Blocking file I/O in async");
        }
        if in_async && code.contains("std::process::Command") {
            return Some("Blocking process I/O in async");
        }
        None
    })
}
