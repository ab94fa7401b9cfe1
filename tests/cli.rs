//! End-to-end runs of the built binaries

use std::process::{Command, Output};

fn pwbench(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pwbench"))
        .args(args)
        .output()
        .expect("failed to run pwbench")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Split `<cost>, <ms> ms` into its two numbers
fn parse_line(line: &str) -> (u32, u64) {
    let (cost, rest) = line.split_once(", ").expect("missing separator");
    let ms = rest.strip_suffix(" ms").expect("missing unit");
    (cost.parse().unwrap(), ms.parse().unwrap())
}

#[test]
fn test_bcrypt_single_cost() {
    let output = pwbench(&["bcrypt", "4"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(parse_line(&lines[0]).0, 4);
}

#[test]
fn test_pbkdf2_costs_in_order() {
    let output = pwbench(&["pbkdf2-256", "1000", "5000"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    let (first_cost, first_ms) = parse_line(&lines[0]);
    let (second_cost, second_ms) = parse_line(&lines[1]);
    assert_eq!(first_cost, 1000);
    assert_eq!(second_cost, 5000);
    // Loose monotonicity, allowing for scheduling noise
    assert!(second_ms + 5 >= first_ms);
}

#[test]
fn test_pbkdf2_zero_cost() {
    let output = pwbench(&["pbkdf2-256", "0"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("0, "));
    assert_eq!(parse_line(&lines[0]).0, 0);
}

#[test]
fn test_unsorted_costs_keep_order() {
    let output = pwbench(&["pbkdf2-512", "30", "10", "20"]);
    assert!(output.status.success());

    let costs: Vec<u32> = stdout_lines(&output).iter().map(|l| parse_line(l).0).collect();
    assert_eq!(costs, vec![30, 10, 20]);
}

#[test]
fn test_unknown_algorithm_fails() {
    let output = pwbench(&["foo", "10"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown algorithm `foo`"));
}

#[test]
fn test_missing_algorithm_fails() {
    let output = pwbench(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_costs_fails() {
    let output = pwbench(&["bcrypt"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_cost_stops_run() {
    let output = pwbench(&["pbkdf2-256", "10", "abc", "20"]);
    assert!(!output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(parse_line(&lines[0]).0, 10);
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid cost `abc`"));
}

#[test]
fn test_bcrypt_cost_out_of_range_fails() {
    let output = pwbench(&["bcrypt", "3"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_recommend_prints_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_pwbench-recommend"))
        .args(["pbkdf2-256", "50"])
        .output()
        .expect("failed to run pwbench-recommend");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["algorithm"], "pbkdf2-256");
    assert_eq!(value["budget_ms"], 50);
    assert_eq!(value["baseline_cost"], 10_000);
    assert!(value["rounds"].as_u64().unwrap() >= 10_000);
}
