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

//! Integration tests rendering the shared protocol run.

use benchlens_core::Analysis;
use benchlens_report::{
    charts, export_html, export_markdown, render_analysis, render_charts, render_text_report,
    write_charts, ReportConfig,
};
use benchlens_test::{protocol_run, protocol_run_without_memory};
use std::fs;
use tempfile::TempDir;

fn config() -> ReportConfig {
    ReportConfig::builder().title("Protocol Benchmark").build()
}

#[test]
fn test_console_report_for_protocol_run() {
    let text = render_analysis(&Analysis::from_records(&protocol_run()), &config());

    assert!(text.contains("PROTOCOL BENCHMARK"));
    assert!(text.contains("Records: 27  Clients: 3  Operations: 3"));
    assert!(text.contains("1st  PROTO"));
    assert!(text
        .lines()
        .any(|l| l.trim_start().starts_with("LOGOUT") && l.contains("2/3") && l.ends_with("66.67%")));
    assert!(text.contains("MEAN MEMORY ALLOCATION COMPARISON (KIB)"));
}

#[test]
fn test_text_report_rows() {
    let text = render_text_report(&Analysis::from_records(&protocol_run()), &config());

    assert_eq!(text.matches("CLIENT ---").count(), 3);
    let rows = text
        .lines()
        .filter(|l| ["ECHO", "LOGOUT", "SUM"].iter().any(|op| l.starts_with(op)))
        .count();
    assert_eq!(rows, 9);
}

#[test]
fn test_chart_directory_with_memory() {
    let dir = TempDir::new().unwrap();
    let paths = write_charts(&Analysis::from_records(&protocol_run()), &config(), dir.path()).unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    for expected in [
        charts::COMPARISON_BY_OPERATION,
        charts::CLIENT_COMPARISON,
        charts::DISTRIBUTION,
        charts::SUCCESS_RATE,
        charts::MEMORY_BY_OPERATION,
        charts::MEMORY_CLIENT_COMPARISON,
        charts::TIME_VS_MEMORY,
        charts::MEMORY_DISTRIBUTION,
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {}", expected);
    }
}

#[test]
fn test_no_memory_charts_without_measurements() {
    let charts = render_charts(&Analysis::from_records(&protocol_run_without_memory()), &config()).unwrap();
    assert_eq!(charts.len(), 4);
    assert!(charts.iter().all(|c| !c.file_name.starts_with("memory")));
}

#[test]
fn test_file_exports() {
    let dir = TempDir::new().unwrap();
    let analysis = Analysis::from_records(&protocol_run());

    let md = dir.path().join("report.md");
    export_markdown(&analysis, &config(), &md).unwrap();
    assert!(fs::read_to_string(&md).unwrap().contains("## Mean Execution Time Comparison (ms)"));

    let html = dir.path().join("report.html");
    export_html(&analysis, &config(), &html).unwrap();
    assert_eq!(fs::read_to_string(&html).unwrap().matches("<figure>").count(), 8);
}
