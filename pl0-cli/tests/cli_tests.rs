//! Integration tests for the PL/0 CLI.
//!
//! These tests invoke the `pl0` binary as a subprocess and check
//! exit codes, stdout, and stderr.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(deprecated)]
fn pl0() -> Command {
    Command::cargo_bin("pl0").unwrap()
}

/// Return the workspace root (parent of pl0-cli/).
fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Return the absolute path to a sample program.
fn test_program(name: &str) -> PathBuf {
    workspace_root().join("tests/programs").join(name)
}

/// Write source text to a temporary program file.
fn write_temp(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("prog.pl0");
    fs::write(&path, source).unwrap();
    path
}

// ---- No-args / help / version ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    pl0()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: pl0"));
}

#[test]
fn help_flag_exits_0() {
    pl0()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_flag_prints_version() {
    pl0()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pl0 "));
}

#[test]
fn unknown_command_exits_1() {
    pl0().arg("frobnicate").assert().failure().code(1);
}

#[test]
fn run_without_file_exits_1() {
    pl0().arg("run").assert().failure().code(1);
}

// ---- Run ----

#[test]
fn run_sum_prints_eight() {
    pl0()
        .args(["run", test_program("sum.pl0").to_str().unwrap()])
        .assert()
        .success()
        .stdout("8");
}

#[test]
fn run_loop() {
    pl0()
        .args(["run", test_program("loop.pl0").to_str().unwrap()])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn run_recursive_factorial() {
    pl0()
        .args(["run", test_program("factorial.pl0").to_str().unwrap()])
        .assert()
        .success()
        .stdout("120\n");
}

#[test]
fn run_missing_file_exits_1() {
    pl0()
        .args(["run", "/nonexistent/prog.pl0"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn run_division_by_zero_dumps_state() {
    pl0()
        .args(["run", test_program("divzero.pl0").to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stdout("")
        .stderr(predicate::str::contains(
            "runtime error: division by zero at line 4",
        ))
        .stderr(predicate::str::contains("--- machine state at line 4 ---"))
        .stderr(predicate::str::contains("A=10 B=0 C=0"))
        .stderr(predicate::str::contains("[999] 10  <- SP"));
}

#[test]
fn run_syntax_error_on_reached_line() {
    pl0()
        .args(["run", test_program("bad.pl0").to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains(
            "syntax error at line 3: unknown opcode 'HALT'",
        ));
}

#[test]
fn run_debug_goes_to_stderr() {
    pl0()
        .args(["run", test_program("debug.pl0").to_str().unwrap()])
        .assert()
        .success()
        .stdout("7")
        .stderr(predicate::str::contains("--- machine state at line 3 ---"));
}

#[test]
fn run_falls_off_end() {
    let dir = TempDir::new().unwrap();
    let path = write_temp(&dir, "PRINT 4\n");
    pl0()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stdout("4")
        .stderr(predicate::str::contains("unexpected end of program at line 2"))
        .stderr(predicate::str::contains("line 2: <end of program>"));
}

#[test]
fn run_address_out_of_range() {
    let dir = TempDir::new().unwrap();
    let path = write_temp(&dir, "LOAD A,#(5)\nEND\n");
    pl0()
        .args(["run", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("address 5 out of range"));
}

// ---- Timing ----

#[test]
fn run_timed_prints_banners() {
    pl0()
        .args(["run", test_program("sum.pl0").to_str().unwrap(), "-t"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- program start ---\n8"))
        .stdout(predicate::str::contains("--- program end ---"))
        .stdout(predicate::str::contains("elapsed: "));
}

#[test]
fn run_timed_with_flag_before_file() {
    pl0()
        .args(["run", "-t", test_program("sum.pl0").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("--- program start ---\n8"))
        .stdout(predicate::str::contains("--- program end ---"));
}

#[test]
fn run_rejects_non_numeric_timeout() {
    pl0()
        .args(["run", "-t", "soon", test_program("sum.pl0").to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid timeout 'soon'"));
}

#[test]
fn run_untimed_has_no_banners() {
    pl0()
        .args(["run", test_program("sum.pl0").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("program start").not());
}

#[test]
fn run_infinite_loop_times_out() {
    pl0()
        .args(["run", "-t", "50", test_program("forever.pl0").to_str().unwrap()])
        .assert()
        .failure()
        .code(3)
        .stdout("--- program start ---\n1")
        .stderr(predicate::str::contains("timeout of 50 ms exceeded at line 2"));
}

// ---- Memory window ----

#[test]
fn run_custom_memory_window() {
    let dir = TempDir::new().unwrap();
    let path = write_temp(&dir, "PUSH 9\nLOAD A,#(15)\nPRINT A\nEND\n");
    pl0()
        .args([
            "run",
            "--base",
            "10",
            "--max-address",
            "16",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("9");
}

#[test]
fn run_empty_memory_window_exits_1() {
    pl0()
        .args([
            "run",
            "--base",
            "1000",
            test_program("sum.pl0").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty memory window"));
}

#[test]
fn run_oversized_memory_window_exits_1() {
    pl0()
        .args([
            "run",
            "--base=-2147483648",
            "--max-address=2147483647",
            test_program("sum.pl0").to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exceeds the limit"));
}

// ---- Check ----

#[test]
fn check_valid_program() {
    pl0()
        .args(["check", test_program("factorial.pl0").to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:"))
        .stdout(predicate::str::contains("(25 instructions)"));
}

#[test]
fn check_reports_every_error() {
    pl0()
        .args(["check", test_program("bad.pl0").to_str().unwrap()])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("line 3: unknown opcode 'HALT'"))
        .stderr(predicate::str::contains("line 4: POP expects 1 operand(s), found 0"))
        .stderr(predicate::str::contains("line 5: jump target 42 is outside the program"));
}

#[test]
fn check_missing_file_exits_1() {
    pl0()
        .args(["check", "/nonexistent/prog.pl0"])
        .assert()
        .failure()
        .code(1);
}
