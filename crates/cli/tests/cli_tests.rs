//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const RESULTS: &str = r#"[
  {
    "language": "Go",
    "version": "1.17",
    "source": "queen.go",
    "chessboard-width": 12,
    "durations": {"300": 2.5, "100": 1.5, "200": 2.0}
  },
  {
    "language": "Go",
    "version": "1.17",
    "source": "queen.go",
    "chessboard-width": 14,
    "durations": {"100": 8.0}
  },
  {
    "language": "Rust",
    "version": "1.56",
    "source": "queen.rs",
    "chessboard-width": 14,
    "durations": {"100": 4.0}
  }
]"#;

const LOG: &str = "SOURCE=Queen.py
VERSION=Python 3.10
TIMESTAMP=1637080462000
Queen raster (12x12)
...took 4.712011 seconds.
...14200 solutions found.
";

const OPTIONS: &str = r#"{
  "descriptors": [
    {"key": "python_3.10", "language": "Python",
     "distribution": "docker.io/python:3.10", "url": "https://www.python.org"}
  ]
}"#;

// Workspace with a results file; commands run inside it.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join("results")).expect("Failed to create results dir");
    fs::write(dir.path().join("results/results.json"), RESULTS).expect("Failed to write results");
    dir
}

fn report_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("queens-report").expect("Failed to find queens-report binary");
    cmd.current_dir(dir.path())
        .env_remove("QUEENS_REPORT_RESULTS_FILE")
        .env_remove("QUEENS_REPORT_MIN_BOARD_WIDTH")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_output() {
    let dir = workspace();
    report_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_no_subcommand_fails() {
    let dir = workspace();
    report_cmd(&dir).assert().failure();
}

#[test]
fn test_summary_markdown() {
    let dir = workspace();
    report_cmd(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Languages: 2"))
        .stdout(predicate::str::contains("| 1 | Rust | 1.56 | queen.rs | 14x14 | 1 |"))
        .stdout(predicate::str::contains("| 3 | Go | 1.17 | queen.go | 12x12 | 3 | 2.000000 |"));
}

#[test]
fn test_summary_json() {
    let dir = workspace();
    let output = report_cmd(&dir)
        .args(["summary", "--format", "json"])
        .output()
        .expect("Failed to run command");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["languages"], 2);
    assert_eq!(value["rows"][1]["language"], "Go");
    assert_eq!(value["rows"][1]["board_width"], 14);
}

#[test]
fn test_summary_tie_break_and_empty_version() {
    let dir = workspace();
    fs::write(
        dir.path().join("results/results.json"),
        r#"[
          {"language": "Zig", "version": "", "source": "queen.zig",
           "chessboard-width": 12, "durations": {"1": 1.0}},
          {"language": "Ada", "version": "12", "source": "queen.adb",
           "chessboard-width": 12, "durations": {"1": 1.0}}
        ]"#,
    )
    .unwrap();
    let output = report_cmd(&dir)
        .args(["summary", "--format", "json", "--tie-break", "language"])
        .output()
        .expect("Failed to run command");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["rows"][0]["language"], "Ada");
    assert_eq!(value["rows"][1]["version"], "");
}

#[test]
fn test_series() {
    let dir = workspace();
    report_cmd(&dir)
        .args([
            "series",
            "--language",
            "Go",
            "--lang-version",
            "1.17",
            "--source",
            "queen.go",
            "--width",
            "12",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Timestamps: 100,200,300"))
        .stdout(predicate::str::contains("- Durations: 1.5,2,2.5"))
        .stdout(predicate::str::contains("- Board widths: 12,14"))
        .stdout(predicate::str::contains("- Averages: 2,8"));
}

#[test]
fn test_series_min_board_width_flag() {
    let dir = workspace();
    report_cmd(&dir)
        .args([
            "series",
            "--language",
            "Go",
            "--lang-version",
            "1.17",
            "--source",
            "queen.go",
            "--width",
            "12",
            "--min-board-width",
            "13",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Board widths: 14\n"));
}

#[test]
fn test_series_unknown_record_fails() {
    let dir = workspace();
    report_cmd(&dir)
        .args([
            "series",
            "--language",
            "Cobol",
            "--lang-version",
            "1",
            "--source",
            "queen.cob",
            "--width",
            "12",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no record for Cobol"));
}

#[test]
fn test_languages() {
    let dir = workspace();
    report_cmd(&dir)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 languages"))
        .stdout(predicate::str::contains("- Rust"));
}

#[test]
fn test_malformed_results_fail() {
    let dir = workspace();
    fs::write(dir.path().join("results/results.json"), "[{\"language\": 1}]").unwrap();
    report_cmd(&dir)
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load results"));
}

#[test]
fn test_results_flag_overrides_default() {
    let dir = workspace();
    fs::write(dir.path().join("other.json"), "[]").unwrap();
    report_cmd(&dir)
        .args(["languages", "--results", "other.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 languages"));
}

#[test]
fn test_settings_file() {
    let dir = workspace();
    fs::write(dir.path().join("queens-report.toml"), "min_board_width = 9\n").unwrap();
    report_cmd(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Minimum board width: 9"));
}

#[test]
fn test_analyse_merges_logs() {
    let dir = workspace();
    fs::write(dir.path().join("results/python_3.10_1637080462000.py.log"), LOG).unwrap();
    fs::write(dir.path().join("analyse.json"), OPTIONS).unwrap();

    report_cmd(&dir)
        .arg("analyse")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 logs merged (0 skipped), 4 records"));

    report_cmd(&dir)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 languages"))
        .stdout(predicate::str::contains("- Python"));
}
