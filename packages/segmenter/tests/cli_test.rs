//! Tests for the `advisory-segmenter` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// The binary with segmenter environment variables cleared.
fn segmenter() -> Command {
    let mut cmd = Command::cargo_bin("advisory-segmenter").unwrap();
    cmd.env_remove("SEGMENTER_PREAMBLE")
        .env_remove("SEGMENTER_BOLD_HEADINGS")
        .env_remove("SEGMENTER_WRAP_WIDTH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_segment_file_as_text() {
    segmenter()
        .arg("segment")
        .arg(fixture("headers_numbered.md"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Health\n======\n- Attend your mid-pregnancy scan this week.\n",
        ))
        .stdout(predicate::str::contains(
            "Physical Activity\n=================\n- Walk for 30 minutes on most days.\n",
        ));
}

#[test]
fn test_segment_as_json() {
    let output = segmenter()
        .args(["segment", "--format", "json"])
        .arg(fixture("fenced.md"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["health"], "Book your glucose screening.");
    assert_eq!(value["nutrition"], "Limit caffeine to 200 mg per day.");
    assert_eq!(value["activity"], "");
    assert_eq!(value["fetalDevelopment"], "");
}

#[test]
fn test_segment_stdin_with_stage() {
    segmenter()
        .args(["segment", "-", "--stage"])
        .write_stdin("Take walks daily. Drink water.")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health\n======\nTake walks daily. Drink water.\n"))
        .stderr(predicate::str::contains("whole_text"));
}

#[test]
fn test_segment_empty_stdin() {
    segmenter()
        .arg("segment")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("(no guidance)").count(4));
}

#[test]
fn test_segment_preamble_flag() {
    segmenter()
        .args(["segment", "--format", "yaml", "--preamble", "health"])
        .arg(fixture("headers_numbered.md"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("Congratulations on your pregnancy!"));
}

#[test]
fn test_segment_preamble_from_environment() {
    segmenter()
        .env("SEGMENTER_PREAMBLE", "health")
        .args(["segment", "--format", "json"])
        .arg(fixture("headers_numbered.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations on your pregnancy!"));
}

#[test]
fn test_segment_flag_overrides_environment() {
    segmenter()
        .env("SEGMENTER_PREAMBLE", "health")
        .args(["segment", "--format", "json", "--preamble", "discard"])
        .arg(fixture("headers_numbered.md"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations").not());
}

#[test]
fn test_segment_no_bold_headings() {
    segmenter()
        .args(["segment", "--no-bold-headings", "--stage"])
        .arg(fixture("bold_headings.md"))
        .assert()
        .success()
        .stderr(predicate::str::contains("line_scan"));
}

#[test]
fn test_segment_rejects_narrow_wrap() {
    segmenter()
        .args(["segment", "--wrap", "5"])
        .write_stdin("Rest.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid configuration"));
}

#[test]
fn test_segment_rejects_bad_environment() {
    segmenter()
        .env("SEGMENTER_BOLD_HEADINGS", "maybe")
        .arg("segment")
        .write_stdin("Rest.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SEGMENTER_BOLD_HEADINGS"));
}

#[test]
fn test_segment_missing_file() {
    segmenter()
        .args(["segment", "/nonexistent/report.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_record_to_stdout() {
    let output = segmenter()
        .args(["record", "--param", "age=29", "--param", "diet=vegetarian"])
        .arg(fixture("keyword_prose.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["params"]["age"], 29);
    assert_eq!(value["params"]["diet"], "vegetarian");
    assert_eq!(value["stage"], "line_scan");
    assert_eq!(
        value["sections"]["activity"],
        "Gentle exercise such as walking improves circulation."
    );
}

#[test]
fn test_record_to_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("record.yaml");

    segmenter()
        .args(["record", "--format", "yaml", "--output"])
        .arg(&path)
        .arg(fixture("bold_headings.md"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Saved to:"));

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("---\n"));
    assert!(content.contains("stage: headers"));
}

#[test]
fn test_record_missing_output_directory() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing").join("record.json");

    segmenter()
        .args(["record", "--output"])
        .arg(&path)
        .write_stdin("Rest.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_record_rejects_text_format() {
    segmenter()
        .args(["record", "--format", "text"])
        .write_stdin("Rest.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_record_rejects_malformed_param() {
    segmenter()
        .args(["record", "--param", "age"])
        .write_stdin("Rest.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid parameter 'age'"));
}
