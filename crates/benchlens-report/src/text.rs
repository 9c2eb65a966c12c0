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

//! Plain-text summary report (`report.txt`).

use crate::config::ReportConfig;
use benchlens_core::Analysis;
use std::fs;
use std::io;
use std::path::Path;

/// File name used for the text report inside a chart directory.
pub const REPORT_FILE: &str = "report.txt";

/// Renders one latency table per client: average, minimum, maximum, standard
/// deviation and success percentage of every operation.
pub fn render_text_report(analysis: &Analysis, config: &ReportConfig) -> String {
    let mut lines = vec![
        "=".repeat(100),
        config.title.to_uppercase(),
        "=".repeat(100),
    ];
    if let Some(ts) = config.timestamp() {
        lines.push(format!("Generated: {}", ts));
    }
    lines.push(String::new());

    let mut current: Option<&str> = None;
    for group in &analysis.duration.groups {
        if current != Some(group.client.as_str()) {
            lines.push(format!("\n--- {} CLIENT ---", config.label(&group.client)));
            lines.push("-".repeat(95));
            lines.push(format!(
                "{:<20} {:<15} {:<15} {:<15} {:<15} {:<15}",
                "Operation", "Avg (ms)", "Min (ms)", "Max (ms)", "StdDev", "Success %"
            ));
            lines.push("-".repeat(95));
            current = Some(group.client.as_str());
        }

        let s = &group.summary;
        let success = analysis
            .success_rate(&group.client, &group.operation)
            .map(|r| format!("{:.2}", r.rate_pct))
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!(
            "{:<20} {:<15} {:<15} {:<15} {:<15} {:<15}",
            config.label(&group.operation),
            config.value(s.mean),
            config.value(s.min),
            config.value(s.max),
            config.value(s.stdev),
            success
        ));
    }

    lines.push(format!("\n{}", "=".repeat(100)));
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Writes the text report to `path`.
pub fn export_text(analysis: &Analysis, config: &ReportConfig, path: &Path) -> io::Result<()> {
    fs::write(path, render_text_report(analysis, config))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlens_core::Record;
    use tempfile::NamedTempFile;

    fn analysis() -> Analysis {
        Analysis::from_records(&[
            Record::new("json", "login", 1.0),
            Record::new("json", "login", 3.0).failed("timeout"),
            Record::new("proto", "login", 0.5),
        ])
    }

    #[test]
    fn test_one_block_per_client() {
        let text = render_text_report(&analysis(), &ReportConfig::default());

        assert!(text.contains("--- JSON CLIENT ---"));
        assert!(text.contains("--- PROTO CLIENT ---"));
        assert!(text.contains("Success %"));

        let login = text.lines().find(|l| l.starts_with("LOGIN")).unwrap();
        assert!(login.contains("2.0000"));
        assert!(login.contains("50.00"));
    }

    #[test]
    fn test_labels_follow_config() {
        let config = ReportConfig::builder().uppercase_labels(false).build();
        let text = render_text_report(&analysis(), &config);

        assert!(text.contains("--- json CLIENT ---"));
        assert!(text.lines().any(|l| l.starts_with("login ")));
        assert!(!text.contains("LOGIN"));
    }

    #[test]
    fn test_export_text() {
        let temp = NamedTempFile::new().unwrap();
        export_text(&analysis(), &ReportConfig::default(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.starts_with(&"=".repeat(100)));
        assert!(content.contains("BENCHMARK REPORT"));
    }
}
