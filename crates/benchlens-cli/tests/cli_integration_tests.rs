// Dweve Benchlens - Benchmark run analysis toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI integration tests

use assert_cmd::Command;
use benchlens_test::fixtures::{protocol_run_csv, MINIMAL_CSV, PRODUCER_HEADER, PRODUCER_JSON};
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn benchlens_cmd() -> Command {
    Command::cargo_bin("benchlens").expect("Failed to find benchlens binary")
}

/// A results directory as the benchmark producer leaves it.
fn results_dir() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("benchmark_results.csv"), protocol_run_csv())
        .expect("Failed to write run file");
    dir
}

// ===== Help and Version =====

#[test]
fn test_help_output() {
    benchlens_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Benchmark run analysis toolkit"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("charts"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn test_no_subcommand_fails() {
    benchlens_cmd().assert().failure();
}

// ===== Analyze =====

#[test]
fn test_analyze_directory_prints_report() {
    let dir = results_dir();

    benchlens_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("MEAN EXECUTION TIME COMPARISON (MS)"))
        .stdout(predicate::str::contains("PERFORMANCE RANKING BY OPERATION"))
        .stdout(predicate::str::contains("SUCCESS RATE BY OPERATION"))
        .stdout(predicate::str::contains("MEAN MEMORY ALLOCATION COMPARISON (KIB)"));
}

#[test]
fn test_analyze_without_memory_omits_memory_sections() {
    let dir = tempdir().unwrap();
    let run = dir.path().join("run.csv");
    fs::write(&run, MINIMAL_CSV).unwrap();

    benchlens_cmd()
        .arg("analyze")
        .arg(&run)
        .assert()
        .success()
        .stdout(predicate::str::contains("PERFORMANCE RANKING BY OPERATION"))
        .stdout(predicate::str::contains("MEMORY").not());
}

#[test]
fn test_analyze_json_run_file() {
    let dir = tempdir().unwrap();
    let run = dir.path().join("benchmark_results.json");
    fs::write(&run, PRODUCER_JSON).unwrap();

    let output = benchlens_cmd()
        .args(["analyze", "--format", "json"])
        .arg(&run)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["analysis"]["record_count"], 2);
    assert_eq!(value["analysis"]["clients"], serde_json::json!(["json", "proto"]));
}

#[test]
fn test_analyze_writes_output_file() {
    let dir = results_dir();
    let out = dir.path().join("report.html");

    benchlens_cmd()
        .args(["analyze", "-f", "html", "-o"])
        .arg(&out)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("<svg"));
}

#[test]
fn test_analyze_empty_run() {
    let dir = tempdir().unwrap();
    let run = dir.path().join("run.csv");
    fs::write(&run, format!("{}\n", PRODUCER_HEADER)).unwrap();

    benchlens_cmd()
        .arg("analyze")
        .arg(&run)
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to analyze."));
}

#[test]
fn test_analyze_missing_input_fails() {
    let dir = tempdir().unwrap();

    benchlens_cmd()
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: No benchmark results found"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_analyze_malformed_run_fails() {
    let dir = tempdir().unwrap();
    let run = dir.path().join("run.csv");
    fs::write(&run, "Client,Operation,Success\njson,login,true\n").unwrap();

    benchlens_cmd()
        .arg("analyze")
        .arg(&run)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: CSV error"))
        .stderr(predicate::str::contains("DurationMs"));
}

#[test]
fn test_analyze_respects_size_limit() {
    let dir = results_dir();

    benchlens_cmd()
        .env("BENCHLENS_MAX_FILE_SIZE", "16")
        .arg("analyze")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_invalid_format_rejected() {
    let dir = results_dir();

    benchlens_cmd()
        .args(["analyze", "--format", "yaml"])
        .arg(dir.path())
        .assert()
        .failure();
}

// ===== Charts =====

#[test]
fn test_charts_default_to_input_directory() {
    let dir = results_dir();

    benchlens_cmd()
        .arg("charts")
        .arg(dir.path())
        .assert()
        .success();

    for name in [
        "comparison_by_operation.svg",
        "success_rate.svg",
        "time_vs_memory.svg",
        "report.txt",
    ] {
        assert!(dir.path().join(name).is_file(), "{} missing", name);
    }
}

#[test]
fn test_charts_into_output_directory() {
    let dir = results_dir();
    let out = dir.path().join("charts");

    benchlens_cmd()
        .arg("charts")
        .arg(dir.path().join("benchmark_results.csv"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("report.txt"));

    let svgs = fs::read_dir(&out)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .count();
    assert_eq!(svgs, 8);
}

// ===== Convert =====

#[test]
fn test_convert_csv_to_json() {
    let dir = results_dir();
    let out = dir.path().join("run.json");

    benchlens_cmd()
        .arg("convert")
        .arg(dir.path())
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let run: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(run["iterations"], 3);
    assert_eq!(run["results"].as_array().unwrap().len(), 27);
    assert_eq!(run["results"][0]["Client"], "json");
}

#[test]
fn test_convert_json_to_csv() {
    let dir = tempdir().unwrap();
    let run = dir.path().join("benchmark_results.json");
    let out = dir.path().join("run.csv");
    fs::write(&run, PRODUCER_JSON).unwrap();

    benchlens_cmd()
        .arg("convert")
        .arg(&run)
        .arg("-o")
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with(PRODUCER_HEADER));
    assert!(csv.contains("deadline exceeded"));
}

#[test]
fn test_convert_requires_output() {
    let dir = results_dir();

    benchlens_cmd()
        .arg("convert")
        .arg(dir.path())
        .assert()
        .failure();
}
