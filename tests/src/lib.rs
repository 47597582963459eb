#![forbid(unsafe_code)]
//! Helpers for observing fatal logging from outside the dying process.
use std::process::{Command, Output};
use tierlog_core::Severity;

/// Environment variable the helper binaries read their level from.
pub const LEVEL_VAR: &str = "TIERLOG_TEST_LEVEL";

/// Level for a helper binary, falling back to the logger default.
pub fn level_from_env() -> Severity {
    std::env::var(LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or_default()
}

/// Run a helper binary at `level` and collect everything it wrote.
pub fn run_helper(bin: &str, level: Severity) -> std::io::Result<Output> {
    Command::new(bin)
        .env(LEVEL_VAR, level.to_string())
        .output()
}
