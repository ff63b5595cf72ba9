//! `FatalMode::Abort` ends the process, so it is exercised in a child copy of this test binary.

use must::config::ENV_FATAL;
use std::process::Command;

const CHILD_ENV: &str = "MUST_ABORT_CHILD";
const HANDLER_MARKER: &str = "handler ran before abort";

/// Is a no-op unless this binary was launched by `abort_mode_prints_payload_then_aborts`.
#[test]
fn abort_mode_child() {
    if std::env::var_os(CHILD_ENV).is_none() {
        return;
    }

    must::register_failure_handler(|_, _| eprintln!("{HANDLER_MARKER}"));
    must::is_true(false, "child invariant");
    eprintln!("unreachable: is_true returned");
}

#[test]
fn abort_mode_prints_payload_then_aborts() {
    let exe = std::env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["abort_mode_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(ENV_FATAL, "abort")
        .env(CHILD_ENV, "1")
        .output()
        .expect("spawn child test binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "child exited cleanly; stderr:\n{stderr}");
    assert!(!stderr.contains("unreachable"), "stderr:\n{stderr}");

    let payload = stderr
        .find("child invariant: expected true, got false")
        .unwrap_or_else(|| panic!("payload missing from stderr:\n{stderr}"));
    let handler = stderr
        .find(HANDLER_MARKER)
        .unwrap_or_else(|| panic!("handler marker missing from stderr:\n{stderr}"));
    assert!(handler < payload, "handler must run before the fatal signal");
}

#[cfg(unix)]
#[test]
fn abort_mode_dies_by_sigabrt() {
    use std::os::unix::process::ExitStatusExt;

    let exe = std::env::current_exe().expect("test binary path");
    let status = Command::new(exe)
        .args(["abort_mode_child", "--exact", "--test-threads=1"])
        .env(ENV_FATAL, "abort")
        .env(CHILD_ENV, "1")
        .status()
        .expect("spawn child test binary");

    assert_eq!(status.signal(), Some(6));
}
