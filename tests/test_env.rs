use std::env;
use std::sync::Mutex;

use gamecode_log::{LogLevel, SharedBuffer};

// Environment variables are process-wide; keep these tests from overlapping.
static SERIAL: Mutex<()> = Mutex::new(());

fn set_markers(debug: bool, error: bool) {
    // SAFETY: every test in this binary holds SERIAL while touching the environment.
    unsafe {
        if debug {
            env::set_var("DEBUG", "1");
        } else {
            env::remove_var("DEBUG");
        }
        if error {
            env::set_var("ERROR", "");
        } else {
            env::remove_var("ERROR");
        }
    }
}

#[test]
fn test_from_env_precedence() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());

    set_markers(true, true);
    assert_eq!(LogLevel::from_env(), LogLevel::Debug);

    // presence counts, an empty value still selects ERROR
    set_markers(false, true);
    assert_eq!(LogLevel::from_env(), LogLevel::Error);

    set_markers(false, false);
    assert_eq!(LogLevel::from_env(), LogLevel::Info);
}

#[test]
fn test_reset_reads_environment() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());

    set_markers(false, true);
    gamecode_log::reset();
    assert_eq!(gamecode_log::level(), LogLevel::Error);

    let buf = SharedBuffer::new();
    gamecode_log::set_output(buf.clone());
    gamecode_log::info("dropped");
    gamecode_log::error("kept");
    assert_eq!(buf.contents().lines().count(), 1);

    set_markers(true, true);
    gamecode_log::reset();
    assert_eq!(gamecode_log::level(), LogLevel::Debug);

    set_markers(false, false);
    gamecode_log::reset();
    assert_eq!(gamecode_log::level(), LogLevel::Info);
}
