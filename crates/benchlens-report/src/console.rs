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

//! Console reporter for analyses.
//!
//! Builds the full terminal report as a string so callers can print it,
//! log it or compare it in tests.

use crate::config::ReportConfig;
use crate::sections::{comparison_title, detail_title, overall_title, ranking_title, SUCCESS_TITLE};
use benchlens_core::{Analysis, MetricViews};

const WIDTH: usize = 80;

/// Prints the full analysis report to stdout.
pub fn print_analysis(analysis: &Analysis, config: &ReportConfig) {
    print!("{}", render_analysis(analysis, config));
}

/// Renders the full analysis report.
///
/// Sections, in order: comparison table, ranking per operation, overall
/// summary per client, success rates and detailed per-group statistics,
/// followed by the memory comparison, ranking and summary when the run
/// carried memory measurements.
///
/// # Examples
///
/// ```
/// use benchlens_core::{Analysis, Record};
/// use benchlens_report::{render_analysis, ReportConfig};
///
/// let analysis = Analysis::from_records(&[
///     Record::new("json", "login", 4.0),
///     Record::new("proto", "login", 2.0),
/// ]);
/// let text = render_analysis(&analysis, &ReportConfig::default());
///
/// assert!(text.contains("MEAN EXECUTION TIME COMPARISON (MS)"));
/// assert!(text.contains("1st  PROTO"));
/// ```
pub fn render_analysis(analysis: &Analysis, config: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", "=".repeat(WIDTH)));
    out.push_str(&format!("{}\n", config.title.to_uppercase()));
    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
    if let Some(ts) = config.timestamp() {
        out.push_str(&format!("Generated: {}\n", ts));
    }
    out.push_str(&format!(
        "Records: {}  Clients: {}  Operations: {}\n",
        analysis.record_count,
        analysis.clients.len(),
        analysis.operations.len()
    ));

    if analysis.is_empty() {
        out.push_str("\nNo records to analyze.\n");
    } else {
        push_comparison(&mut out, &analysis.duration, config);
        push_ranking(&mut out, &analysis.duration, config);
        push_overall(&mut out, &analysis.duration, config);
        push_success(&mut out, analysis, config);
        push_detail(&mut out, &analysis.duration, config);

        if let Some(memory) = &analysis.memory {
            push_comparison(&mut out, memory, config);
            push_ranking(&mut out, memory, config);
            push_overall(&mut out, memory, config);
        }
    }

    out.push_str(&format!("{}\n", "=".repeat(WIDTH)));
    out
}

fn push_section(out: &mut String, title: &str) {
    out.push_str(&format!("\n{}\n", "-".repeat(WIDTH)));
    out.push_str(&format!("{}\n", title.to_uppercase()));
    out.push_str(&format!("{}\n", "-".repeat(WIDTH)));
}

fn push_comparison(out: &mut String, views: &MetricViews, config: &ReportConfig) {
    push_section(out, &comparison_title(views.metric));

    let table = &views.comparison;
    let labels: Vec<String> = table.clients.iter().map(|c| config.label(c)).collect();
    let rows: Vec<(String, Vec<String>)> = table
        .rows
        .iter()
        .map(|row| {
            (
                config.label(&row.operation),
                row.cells.iter().map(|&cell| config.cell(cell)).collect(),
            )
        })
        .collect();

    let first = rows
        .iter()
        .map(|(op, _)| op.len())
        .chain(std::iter::once("Operation".len()))
        .max()
        .unwrap_or(0)
        .max(20);
    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(col, label)| {
            rows.iter()
                .map(|(_, cells)| cells[col].len())
                .chain(std::iter::once(label.len()))
                .max()
                .unwrap_or(0)
                .max(12)
        })
        .collect();

    let mut header = format!("{:<w$}", "Operation", w = first);
    for (label, w) in labels.iter().zip(&widths) {
        header.push_str(&format!(" | {:>w$}", label, w = *w));
    }
    out.push_str(&format!("{}\n", header));
    out.push_str(&format!("{}\n", "-".repeat(header.chars().count())));

    for (op, cells) in &rows {
        let mut line = format!("{:<w$}", op, w = first);
        for (cell, w) in cells.iter().zip(&widths) {
            line.push_str(&format!(" | {:>w$}", cell, w = *w));
        }
        out.push_str(&format!("{}\n", line));
    }
}

fn push_ranking(out: &mut String, views: &MetricViews, config: &ReportConfig) {
    push_section(out, ranking_title(views.metric));
    let unit = views.metric.unit();

    for ranking in &views.rankings {
        out.push_str(&format!("\n  {}\n", config.label(&ranking.operation)));
        for entry in &ranking.entries {
            out.push_str(&format!(
                "    {:<5}{:<12} {:>12} {}\n",
                entry.label,
                config.label(&entry.client),
                config.value(entry.mean),
                unit
            ));
        }
    }
}

fn push_overall(out: &mut String, views: &MetricViews, config: &ReportConfig) {
    push_section(out, overall_title(views.metric));
    let unit = views.metric.unit();

    for client in &views.overall {
        let s = &client.summary;
        out.push_str(&format!("\n  {}\n", config.label(&client.client)));
        out.push_str(&format!("    Total Operations:  {}\n", s.count));
        out.push_str(&format!("    Overall Mean:      {} {}\n", config.value(s.mean), unit));
        out.push_str(&format!("    Overall Std Dev:   {} {}\n", config.value(s.stdev), unit));
        out.push_str(&format!("    Overall Min:       {} {}\n", config.value(s.min), unit));
        out.push_str(&format!("    Overall Max:       {} {}\n", config.value(s.max), unit));
    }
}

fn push_success(out: &mut String, analysis: &Analysis, config: &ReportConfig) {
    push_section(out, SUCCESS_TITLE);

    let mut current: Option<&str> = None;
    for rate in &analysis.success_rates {
        if current != Some(rate.client.as_str()) {
            out.push_str(&format!("\n  {}\n", config.label(&rate.client)));
            current = Some(rate.client.as_str());
        }
        out.push_str(&format!(
            "    {:<20} {:>4}/{:<4} {:>7.2}%\n",
            config.label(&rate.operation),
            rate.successes,
            rate.total,
            rate.rate_pct
        ));
    }
}

fn push_detail(out: &mut String, views: &MetricViews, config: &ReportConfig) {
    push_section(out, detail_title(views.metric));
    let unit = views.metric.unit();

    let mut current: Option<&str> = None;
    for group in &views.groups {
        if current != Some(group.client.as_str()) {
            out.push_str(&format!("\n┌─ {} CLIENT\n", config.label(&group.client)));
            current = Some(group.client.as_str());
        }

        let s = &group.summary;
        let v = |x: f64| format!("{} {}", config.value(x), unit);
        out.push_str(&format!("\n  {}\n", config.label(&group.operation)));
        out.push_str(&format!("  ├─ Iterations:  {}\n", s.count));
        out.push_str(&format!("  ├─ Mean:        {}\n", v(s.mean)));
        out.push_str(&format!("  ├─ Median:      {}\n", v(s.median)));
        out.push_str(&format!("  ├─ Std Dev:     {}\n", v(s.stdev)));
        out.push_str(&format!("  ├─ Min:         {}\n", v(s.min)));
        out.push_str(&format!("  ├─ Max:         {}\n", v(s.max)));
        out.push_str(&format!("  ├─ Q1 (25%):    {}\n", v(s.q1)));
        out.push_str(&format!("  ├─ Q3 (75%):    {}\n", v(s.q3)));
        out.push_str(&format!("  └─ IQR:         {}\n", v(s.iqr)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlens_core::Record;

    fn records() -> Vec<Record> {
        vec![
            Record::new("json", "login", 4.0).with_mem_alloc_delta(2048),
            Record::new("json", "login", 6.0).with_mem_alloc_delta(1024),
            Record::new("proto", "login", 2.0).with_mem_alloc_delta(512),
            Record::new("proto", "upload", 8.0).failed("io"),
        ]
    }

    #[test]
    fn test_sections_in_order() {
        let text = render_analysis(&Analysis::from_records(&records()), &ReportConfig::default());

        let order = [
            "MEAN EXECUTION TIME COMPARISON (MS)",
            "PERFORMANCE RANKING BY OPERATION",
            "SUMMARY STATISTICS",
            "SUCCESS RATE BY OPERATION",
            "DETAILED ANALYSIS",
            "MEAN MEMORY ALLOCATION COMPARISON (KIB)",
            "MEMORY RANKING BY OPERATION",
            "MEMORY SUMMARY STATISTICS",
        ];
        let positions: Vec<usize> = order.iter().map(|s| text.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_missing_cell_reads_na() {
        let text = render_analysis(&Analysis::from_records(&records()), &ReportConfig::default());
        let upload = text.lines().find(|l| l.starts_with("UPLOAD")).unwrap();
        assert!(upload.contains("N/A"));
        assert!(upload.contains("8.0000"));
    }

    #[test]
    fn test_no_memory_sections_without_measurements() {
        let analysis = Analysis::from_records(&[Record::new("json", "login", 1.0)]);
        let text = render_analysis(&analysis, &ReportConfig::default());
        assert!(!text.contains("MEMORY"));
    }

    #[test]
    fn test_lowercase_labels() {
        let config = ReportConfig::builder().uppercase_labels(false).build();
        let text = render_analysis(&Analysis::from_records(&records()), &config);
        assert!(text.contains("┌─ json CLIENT"));
        assert!(!text.contains("PROTO"));
    }

    #[test]
    fn test_empty_analysis() {
        let text = render_analysis(&Analysis::from_records(&[]), &ReportConfig::default());
        assert!(text.contains("No records to analyze."));
        assert!(!text.contains("RANKING"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let analysis = Analysis::from_records(&records());
        let config = ReportConfig::default();
        assert_eq!(render_analysis(&analysis, &config), render_analysis(&analysis, &config));
    }
}
