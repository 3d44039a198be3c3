//! Architectural Enforcement Integration Tests
//!
//! This package holds source-scanning tests that keep the production code of
//! the workspace honest:
//! - No blocking I/O inside async functions
//! - No thread sleeps anywhere outside tests
//!
//! The scanner is line based. It strips `//` comments, stops at the first
//! `#[cfg(test)]` of a file (test modules sit at the bottom by convention)
//! and finds the enclosing function by scanning upwards for its signature.

use std::fs;
use std::path::{Path, PathBuf};

/// Production source directories, relative to the workspace root
pub const PRODUCTION_DIRS: &[&str] = &["notes/core/src", "tui/src"];

/// A single offending source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line_number: usize,
    pub reason: &'static str,
    pub line: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} - {}: {}",
            self.path.display(),
            self.line_number,
            self.reason,
            self.line
        )
    }
}

/// The workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

/// Every `.rs` file under the production directories
pub fn production_sources() -> Vec<PathBuf> {
    let root = workspace_root();
    let mut files = Vec::new();

    for dir in PRODUCTION_DIRS {
        let path = root.join(dir);
        assert!(path.exists(), "production directory missing: {}", path.display());

        for entry in walkdir::WalkDir::new(path)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files
}

/// Scan all production sources with `check`
///
/// `check` receives the code part of a line (comment stripped) and whether
/// the line sits inside an async function, and returns a reason when the
/// line is a violation.
pub fn scan_production_code<F>(check: F) -> Vec<Violation>
where
    F: Fn(&str, bool) -> Option<&'static str>,
{
    let mut violations = Vec::new();
    for path in production_sources() {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (line_number, reason, line) in scan_source(&content, &check) {
            violations.push(Violation {
                path: path.clone(),
                line_number,
                reason,
                line,
            });
        }
    }
    violations
}

/// Scan one file's content, returning `(line_number, reason, line)` triples
pub fn scan_source<F>(content: &str, check: F) -> Vec<(usize, &'static str, String)>
where
    F: Fn(&str, bool) -> Option<&'static str>,
{
    let lines: Vec<&str> = content.lines().collect();
    let mut found = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if line.trim().starts_with("#[cfg(test)]") {
            break;
        }

        let code_part = code_part(line);
        if code_part.trim().is_empty() {
            continue;
        }

        if let Some(reason) = check(code_part, is_in_async_function(&lines, idx)) {
            found.push((idx + 1, reason, line.trim().to_string()));
        }
    }

    found
}

/// Strip a trailing `//` comment
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Is this line a function signature?
fn is_fn_signature(line: &str) -> bool {
    let line = line.trim_start();
    let line = line
        .strip_prefix("pub(crate) ")
        .or_else(|| line.strip_prefix("pub "))
        .unwrap_or(line);
    line.starts_with("fn ") || line.starts_with("async fn ")
}

/// Check if line is inside an async function
///
/// Scans upwards to the nearest function signature. Lines outside any
/// function (imports, items) count as not async.
pub fn is_in_async_function(lines: &[&str], current_idx: usize) -> bool {
    for i in (0..=current_idx).rev() {
        let line = code_part(lines[i]);
        if is_fn_signature(line) {
            return line.contains("async fn ");
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_function_detection() {
        let code = ["pub async fn load() {", "    let x = read();", "}"];
        assert!(is_in_async_function(&code, 1));
    }

    #[test]
    fn test_sync_function_detection() {
        let code = [
            "async fn outer() {}",
            "fn load_config() {",
            "    let x = std::fs::read_to_string(path);",
            "}",
        ];
        assert!(!is_in_async_function(&code, 2));
    }

    #[test]
    fn test_top_level_lines_are_not_async() {
        let code = ["use std::fs::OpenOptions;"];
        assert!(!is_in_async_function(&code, 0));
    }

    #[test]
    fn test_scan_stops_at_test_module() {
        let content = "fn a() { bad(); }\n#[cfg(test)]\nmod tests { fn b() { bad(); } }\n";
        let found = scan_source(content, |code, _| code.contains("bad()").then_some("bad"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 1);
    }

    #[test]
    fn test_comments_are_ignored() {
        let content = "fn a() {\n    // bad() is forbidden\n}\n";
        let found = scan_source(content, |code, _| code.contains("bad()").then_some("bad"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_production_sources_are_found() {
        let files = production_sources();
        assert!(files.iter().any(|p| p.ends_with("client/http.rs")));
        assert!(files.iter().any(|p| p.ends_with("app.rs")));
    }
}
