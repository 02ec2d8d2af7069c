use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lcdchars"))
        .args(args)
        .output()
        .expect("spawning lcdchars")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr is UTF-8")
}

#[test]
fn missing_argument_is_fatal() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Usage:"));
    assert!(!stdout(&output).contains("byte custom"));
}

#[test]
fn single_letter_listing() {
    let output = run(&["A"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains(
        "byte custom0[8] = { 0b01110, 0b10001, 0b11111, 0b10001, 0b10001, 0b00000, 0b00000, 0b00000 };"
    ));
    assert!(!stdout.contains("byte custom1"));
}

#[test]
fn warnings_do_not_fail_the_run() {
    let output = run(&["{}"]);
    assert!(output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("'{'"));
    assert!(stderr.contains("'}'"));
    // both substituted slots still get declarations
    let stdout = stdout(&output);
    assert!(stdout.contains("byte custom0"));
    assert!(stdout.contains("byte custom1"));
}

#[test]
fn input_is_truncated_to_eight_slots() {
    let output = run(&["ABCDEFGHIJ"]);
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("byte custom7"));
    assert!(!stdout.contains("byte custom8"));
    assert!(stderr(&output).contains("'I'"));
}

#[test]
fn lowercase_matches_uppercase() {
    let lower = run(&["hello"]);
    let upper = run(&["HELLO"]);
    assert!(lower.status.success() && upper.status.success());
    assert_eq!(stdout(&lower), stdout(&upper));
}
