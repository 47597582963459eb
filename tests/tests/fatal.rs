use regex::Regex;
use tests::run_helper;
use tierlog_core::logger::FATAL_EXIT_CODE;
use tierlog_core::Severity;

fn stderr_lines(stderr: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stderr)
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn fatal_writes_then_exits_nonzero() {
    let output = run_helper(env!("CARGO_BIN_EXE_fatal_exit"), Severity::Info).unwrap();
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let lines = stderr_lines(&output.stderr);
    assert_eq!(lines.len(), 2, "{:?}", lines);
    assert!(lines[0].starts_with("[ERROR]\t"));
    assert!(lines[0].ends_with(" pump2stalled"));
    let fatal = Regex::new(r"^\[FATAL\]\t\S+ \S+ \S*fatal_exit\.rs:\d+: disk full$").unwrap();
    assert!(fatal.is_match(&lines[1]), "{}", lines[1]);
}

#[test]
fn fatal_is_never_suppressed() {
    let output = run_helper(env!("CARGO_BIN_EXE_fatal_exit"), Severity::Fatal).unwrap();
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let lines = stderr_lines(&output.stderr);
    assert_eq!(lines.len(), 1, "{:?}", lines);
    assert!(lines[0].starts_with("[FATAL]\t"));
    assert!(lines[0].ends_with(" disk full"));
}

#[test]
fn fatalf_flushes_buffered_sink_before_exit() {
    let output = run_helper(env!("CARGO_BIN_EXE_fatalf_exit"), Severity::Trace).unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(FATAL_EXIT_CODE));
    let lines = stderr_lines(&output.stderr);
    assert_eq!(lines.len(), 1, "{:?}", lines);
    assert!(lines[0].starts_with("[FATAL]\t"));
    assert!(lines[0].contains("fatalf_exit.rs:"));
    assert!(lines[0].ends_with(" free blocks=0"));
}
