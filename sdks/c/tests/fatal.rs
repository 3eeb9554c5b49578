//! Native failures abort the process. Each case re-runs this test binary
//! with a marker variable set so the abort happens in a child process.

use std::process::Command;

use symbridge::ex::{Symbolic_Ex_div, Symbolic_Ex_ofInt, Symbolic_Ex_ofFrac};
use symbridge_ffi::host;

const CHILD_ENV: &str = "SYMBRIDGE_FATAL_CHILD";

fn run_child(test: &str) -> std::process::Output {
    Command::new(std::env::current_exe().unwrap())
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test)
        .output()
        .unwrap()
}

fn in_child(test: &str) -> bool {
    std::env::var(CHILD_ENV).as_deref() == Ok(test)
}

#[test]
fn test_division_by_zero_aborts() {
    if in_child("test_division_by_zero_aborts") {
        let (one, zero) = (host::box_int(1), host::box_int(0));
        unsafe {
            let a = Symbolic_Ex_ofInt(one);
            let b = Symbolic_Ex_ofInt(zero);
            Symbolic_Ex_div(a, b);
        }
        unreachable!("division by zero returned");
    }

    let output = run_child("test_division_by_zero_aborts");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("division by zero"), "stderr: {}", stderr);
    assert!(!stderr.contains("returned"));
}

#[test]
fn test_zero_denominator_aborts() {
    if in_child("test_zero_denominator_aborts") {
        let (num, den) = (host::box_int(1), host::box_int(0));
        unsafe { Symbolic_Ex_ofFrac(num, den) };
        unreachable!("fraction with zero denominator returned");
    }

    let output = run_child("test_zero_denominator_aborts");
    assert!(!output.status.success());
}
