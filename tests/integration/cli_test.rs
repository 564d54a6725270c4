use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shortre"))
}

fn run(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute shortre")
}

fn temp_input(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("shortre_{}_{}", std::process::id(), name));
    fs::write(&path, contents).expect("Failed to write temp input");
    path
}

fn first_line(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn test_synth_prints_pattern() {
    let output = run(&["synth", "walking", "talking"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(first_line(&output), "(?:t|w)alking");
}

#[test]
fn test_synth_no_values_never_matches() {
    let output = run(&["synth"]);
    assert!(output.status.success());
    assert_eq!(first_line(&output), "$.^");
}

#[test]
fn test_synth_anchored() {
    let output = run(&["synth", "--anchored", "abc", "abcd"]);
    assert!(output.status.success());
    assert_eq!(first_line(&output), "^(?:abcd?)$");
}

#[test]
fn test_synth_capturing_groups() {
    let output = run(&["synth", "--group", "capturing", "foo", "foobar"]);
    assert!(output.status.success());
    assert_eq!(first_line(&output), "foo(bar)?");
}

#[test]
fn test_synth_with_verify() {
    let output = run(&[
        "synth",
        "--verify",
        "--seed",
        "5",
        "api.example.com",
        "www.example.com",
        "example.com",
    ]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Verified: 3 values matched"),
        "Should report verification: {}",
        stdout
    );
}

#[test]
fn test_synth_stats() {
    let output = run(&["synth", "--stats", "cat", "hat", "walking", "talking"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Synthesis Statistics:"));
    assert!(stdout.contains("Candidates:"));
    assert!(stdout.contains("naive"));
}

#[test]
fn test_synth_verbose_goes_to_stderr() {
    let output = run(&["synth", "-v", "walking", "talking"]);
    assert!(output.status.success());
    assert_eq!(first_line(&output), "(?:t|w)alking");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("accepted"), "stderr: {}", stderr);
}

#[test]
fn test_synth_reads_file() {
    let path = temp_input("synth_file", "abc\nabcd\n");
    let output = run(&["synth", "--file", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());
    assert_eq!(first_line(&output), "abcd?");
}

#[test]
fn test_synth_missing_file_fails() {
    let output = run(&["synth", "--file", "/nonexistent/shortre/values.txt"]);
    assert!(!output.status.success(), "Command should fail without input");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"), "stderr: {}", stderr);
}

#[test]
fn test_verify_accepts_exact_pattern() {
    let output = run(&["verify", "--seed", "1", "x|y|z", "x", "y", "z"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Verified: 3 values matched"));
}

#[test]
fn test_verify_rejects_missed_member() {
    let output = run(&["verify", "--seed", "1", "x|y", "x", "y", "z"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not match member \"z\""), "stderr: {}", stderr);
}

#[test]
fn test_verify_rejects_invalid_pattern() {
    let output = run(&["verify", "(x", "x"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not compile"));
}

#[test]
fn test_batch_one_pattern_per_set() {
    let path = temp_input("batch", "walking\ntalking\n\nx\ny\nz\n\n\nabc\nabcd\n");
    let output = run(&["batch", "-j", "2", path.to_str().unwrap()]);
    let _ = fs::remove_file(&path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["(?:t|w)alking", "x|y|z", "abcd?"]);
}

#[test]
fn test_requires_subcommand() {
    let output = run(&[]);
    assert!(!output.status.success());
}
