//! CLI contract tests: exit codes, text lines and JSON shape of the
//! non-interactive subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn linquiz() -> Command {
    Command::cargo_bin("linquiz").expect("binary builds")
}

fn parse_json(bytes: &[u8]) -> Value {
    let s = String::from_utf8_lossy(bytes);
    serde_json::from_str(&s).unwrap_or_else(|_| panic!("Failed to parse JSON: {}", s))
}

// =============================================================================
// solve
// =============================================================================

#[test]
fn solve_prints_numbered_steps_with_exact_fraction() {
    linquiz()
        .args(["solve", "3x + 1 = 8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: Original equation: 3x + 1 = 8"))
        .stdout(predicate::str::contains("3x = 7"))
        .stdout(predicate::str::contains("Step 4: Solution: x = 7/3"));
}

#[test]
fn solve_accepts_leading_minus() {
    linquiz()
        .args(["solve", "--", "-x = 4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Solution: x = -4"));
}

#[test]
fn solve_latex_mode() {
    linquiz()
        .args(["solve", "--latex", "3x + 1 = 8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$x = \\frac{7}{3}$"));
}

#[test]
fn solve_json_contradiction() {
    let output = linquiz()
        .args(["solve", "--json", "2x + 3 = 2x + 5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["ok"], true);
    assert_eq!(json["outcome"]["kind"], "empty");
    let steps = json["steps"].as_array().unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last["kind"], "contradiction");
    assert_eq!(last["equation"], "0 = 2");
    assert_eq!(steps[0]["index"], 1);
}

#[test]
fn solve_json_unique_value_is_a_string() {
    let output = linquiz()
        .args(["solve", "--json", "3x + 1 = 8"])
        .output()
        .unwrap();
    let json = parse_json(&output.stdout);
    assert_eq!(json["outcome"]["kind"], "unique");
    assert_eq!(json["outcome"]["value"], "7/3");
    assert_eq!(json["equation"]["lhs"]["coef"], 3);
}

#[test]
fn solve_rejects_nonlinear_input() {
    linquiz()
        .args(["solve", "x^2 = 4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported equation form"));
}

#[test]
fn solve_json_error_has_input() {
    let output = linquiz()
        .args(["solve", "--json", "3x + 1"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["ok"], false);
    assert_eq!(json["input"], "3x + 1");
    assert!(json["error"].as_str().unwrap().contains("Missing '='"));
}

// =============================================================================
// generate
// =============================================================================

#[test]
fn generate_json_problems_are_consistent() {
    let output = linquiz()
        .args(["generate", "--seed", "42", "--count", "5", "--json", "--show-answer"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["ok"], true);
    assert_eq!(json["seed"], 42);
    let problems = json["problems"].as_array().unwrap();
    assert_eq!(problems.len(), 5);

    for p in problems {
        let a = p["a"].as_i64().unwrap();
        let b = p["b"].as_i64().unwrap();
        let c = p["c"].as_i64().unwrap();
        let d = p["d"].as_i64().unwrap();
        let x = p["solution"].as_i64().unwrap();
        assert_ne!(a, 0);
        assert_ne!(a, c);
        assert_eq!(a * x + b, c * x + d);
    }
}

#[test]
fn generate_hides_answer_by_default() {
    let output = linquiz()
        .args(["generate", "--seed", "1", "--json"])
        .output()
        .unwrap();
    let json = parse_json(&output.stdout);
    assert!(json["problems"][0].get("solution").is_none());
}

#[test]
fn generate_is_reproducible_with_seed() {
    let first = linquiz().args(["generate", "--seed", "9"]).output().unwrap();
    let second = linquiz().args(["generate", "--seed", "9"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert!(String::from_utf8_lossy(&first.stdout).contains(" = "));
}

// =============================================================================
// config
// =============================================================================

#[test]
fn config_reset_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linquiz.toml");

    linquiz()
        .args(["config", "--reset", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[generator]"))
        .stdout(predicate::str::contains("max_attempts = 100"));

    assert!(path.exists());
}

#[test]
fn invalid_generator_config_fails_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linquiz.toml");
    std::fs::write(&path, "[generator]\ncoefficient_range = [0, 0]\nmax_attempts = 3\n").unwrap();

    linquiz()
        .args(["generate", "--seed", "1", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid generation constraint"));
}
