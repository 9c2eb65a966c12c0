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

//! HTML export for analyses.
//!
//! Produces a single self-contained page: the comparison tables, rankings
//! and success rates followed by every chart as inline SVG.

use crate::charts::render_charts;
use crate::config::ReportConfig;
use crate::sections::{comparison_title, overall_title, ranking_title, SUCCESS_TITLE};
use benchlens_core::{Analysis, MetricViews};
use std::fs;
use std::io;
use std::path::Path;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em auto; max-width: 1100px; color: #222; }
table { border-collapse: collapse; margin-bottom: 1.5em; }
th, td { border: 1px solid #ccc; padding: 4px 10px; }
th { background: #f0f0f0; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
td.na { text-align: right; color: #999; }
figure { margin: 1.5em 0; }
";

/// Renders the analysis as an HTML page.
///
/// Fails only when a chart cannot be drawn.
pub fn render_html(analysis: &Analysis, config: &ReportConfig) -> io::Result<String> {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&config.title)));
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape(&config.title)));
    if let Some(ts) = config.timestamp() {
        html.push_str(&format!("<p>Generated: {}</p>\n", ts));
    }
    html.push_str(&format!(
        "<p>Records: {} &middot; Clients: {} &middot; Operations: {}</p>\n",
        analysis.record_count,
        analysis.clients.len(),
        analysis.operations.len()
    ));

    if analysis.is_empty() {
        html.push_str("<p>No records to analyze.</p>\n");
    } else {
        push_metric(&mut html, &analysis.duration, config);
        push_success(&mut html, analysis, config);
        if let Some(memory) = &analysis.memory {
            push_metric(&mut html, memory, config);
        }

        html.push_str("<h2>Charts</h2>\n");
        for chart in render_charts(analysis, config)? {
            html.push_str("<figure>\n");
            html.push_str(&chart.svg);
            html.push_str(&format!("<figcaption>{}</figcaption>\n", escape(&chart.title)));
            html.push_str("</figure>\n");
        }
    }

    html.push_str("</body>\n</html>\n");
    Ok(html)
}

/// Exports the analysis as HTML.
///
/// # Arguments
///
/// * `analysis` - The analysis to export
/// * `config` - Labels, precision and title
/// * `path` - Output file path
pub fn export_html(analysis: &Analysis, config: &ReportConfig, path: &Path) -> io::Result<()> {
    fs::write(path, render_html(analysis, config)?)?;
    Ok(())
}

/// Escapes text for HTML content and attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_metric(html: &mut String, views: &MetricViews, config: &ReportConfig) {
    let unit = views.metric.unit();
    let table = &views.comparison;

    html.push_str(&format!("<h2>{}</h2>\n", comparison_title(views.metric)));
    html.push_str("<table>\n<tr><th>Operation</th>");
    for client in &table.clients {
        html.push_str(&format!("<th>{}</th>", escape(&config.label(client))));
    }
    html.push_str("</tr>\n");
    for row in &table.rows {
        html.push_str(&format!("<tr><td>{}</td>", escape(&config.label(&row.operation))));
        for &cell in &row.cells {
            let class = if cell.is_some() { "num" } else { "na" };
            html.push_str(&format!("<td class=\"{}\">{}</td>", class, config.cell(cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");

    html.push_str(&format!("<h2>{}</h2>\n", ranking_title(views.metric)));
    html.push_str("<table>\n<tr><th>Operation</th><th>Rank</th><th>Client</th>");
    html.push_str(&format!("<th>Mean ({})</th></tr>\n", unit));
    for ranking in &views.rankings {
        for entry in &ranking.entries {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>\n",
                escape(&config.label(&ranking.operation)),
                entry.label,
                escape(&config.label(&entry.client)),
                config.value(entry.mean)
            ));
        }
    }
    html.push_str("</table>\n");

    html.push_str(&format!("<h2>{}</h2>\n", overall_title(views.metric)));
    html.push_str(&format!(
        "<table>\n<tr><th>Client</th><th>Count</th><th>Mean ({u})</th><th>Std Dev ({u})</th><th>Min ({u})</th><th>Max ({u})</th></tr>\n",
        u = unit
    ));
    for client in &views.overall {
        let s = &client.summary;
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            escape(&config.label(&client.client)),
            s.count,
            config.value(s.mean),
            config.value(s.stdev),
            config.value(s.min),
            config.value(s.max)
        ));
    }
    html.push_str("</table>\n");
}

fn push_success(html: &mut String, analysis: &Analysis, config: &ReportConfig) {
    html.push_str(&format!("<h2>{}</h2>\n", SUCCESS_TITLE));
    html.push_str("<table>\n<tr><th>Client</th><th>Operation</th><th>Succeeded</th><th>Total</th><th>Success %</th></tr>\n");
    for rate in &analysis.success_rates {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num\">{:.2}</td></tr>\n",
            escape(&config.label(&rate.client)),
            escape(&config.label(&rate.operation)),
            rate.successes,
            rate.total,
            rate.rate_pct
        ));
    }
    html.push_str("</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlens_core::Record;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_html() {
        let analysis = Analysis::from_records(&[
            Record::new("json", "login", 4.0),
            Record::new("proto", "upload", 2.0),
        ]);
        let temp = NamedTempFile::new().unwrap();

        export_html(&analysis, &ReportConfig::default(), temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("<h1>Benchmark Report</h1>"));
        assert!(content.contains("<td class=\"na\">N/A</td>"));
        assert_eq!(content.matches("<svg").count(), 4);
    }

    #[test]
    fn test_names_are_escaped() {
        let analysis = Analysis::from_records(&[Record::new("<json>", "a&b", 1.0)]);
        let html = render_html(&analysis, &ReportConfig::default()).unwrap();
        assert!(html.contains("&lt;JSON&gt;"));
        assert!(!html.contains("<JSON>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
