//! CLI tests for the interactive shelter binary.
//!
//! Spawns the binary with a scripted stdin and verifies stdout and exit codes.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use shelter::exit_codes;
use shelter::test_support::run_script;

fn run_binary(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_shelter"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn shelter");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");
    child.wait_with_output().expect("shelter output")
}

#[test]
fn add_lookup_exit_scenario() {
    let output = run_binary(b"add\nparrot\n15\nfee\nparrot\nexit\n");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout.starts_with("Welcome to the Pet Shelter System\n"));
    assert!(stdout.contains("parrot added with a fee of $15.00.\n"));
    assert!(stdout.contains("parrot's adoption fee is $15.00.\n"));
    assert!(stdout.ends_with("Goodbye!\n"));
}

#[test]
fn binary_transcript_matches_in_memory_session() {
    let script: &[u8] = b"fee\ncat\nadd\n \n3\nfee\nCat\nbogus\n\nexit\n";
    let output = run_binary(script);
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");

    assert_eq!(stdout, run_script(script).transcript);
}

#[test]
fn closed_stdin_exits_cleanly_without_farewell() {
    let output = run_binary(b"fee\ndog\n");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout.contains("dog's adoption fee is $35.00.\n"));
    assert!(!stdout.contains("Goodbye!"));
}

#[test]
fn diagnostics_stay_off_stdout() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_shelter"))
        .env("RUST_LOG", "shelter=debug")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn shelter");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"fee\nhamster\nexit\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("shelter output");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");

    assert_eq!(stdout, run_script(b"fee\nhamster\nexit\n").transcript);
    assert!(!output.stderr.is_empty());
}
