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

//! Markdown export for analyses.

use crate::config::ReportConfig;
use crate::sections::{comparison_title, detail_title, overall_title, ranking_title, SUCCESS_TITLE};
use benchlens_core::{Analysis, MetricViews};
use std::fs;
use std::io;
use std::path::Path;

/// Renders the analysis as a Markdown document.
pub fn render_markdown(analysis: &Analysis, config: &ReportConfig) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", config.title));
    if let Some(ts) = config.timestamp() {
        md.push_str(&format!("**Generated:** {}\n\n", ts));
    }
    md.push_str(&format!(
        "**Records:** {} | **Clients:** {} | **Operations:** {}\n\n",
        analysis.record_count,
        analysis.clients.len(),
        analysis.operations.len()
    ));

    if analysis.is_empty() {
        md.push_str("No records to analyze.\n");
        return md;
    }

    push_metric(&mut md, &analysis.duration, config);

    md.push_str(&format!("## {}\n\n", SUCCESS_TITLE));
    md.push_str("| Client | Operation | Succeeded | Total | Success % |\n");
    md.push_str("|--------|-----------|-----------|-------|-----------|\n");
    for rate in &analysis.success_rates {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {:.2} |\n",
            config.label(&rate.client),
            config.label(&rate.operation),
            rate.successes,
            rate.total,
            rate.rate_pct
        ));
    }
    md.push('\n');

    push_detail(&mut md, &analysis.duration, config);

    if let Some(memory) = &analysis.memory {
        push_metric(&mut md, memory, config);
    }

    md
}

/// Exports the analysis as Markdown.
///
/// # Arguments
///
/// * `analysis` - The analysis to export
/// * `config` - Labels, precision and title
/// * `path` - Output file path
pub fn export_markdown(analysis: &Analysis, config: &ReportConfig, path: &Path) -> io::Result<()> {
    fs::write(path, render_markdown(analysis, config))?;
    Ok(())
}

fn push_metric(md: &mut String, views: &MetricViews, config: &ReportConfig) {
    let unit = views.metric.unit();
    let table = &views.comparison;

    md.push_str(&format!("## {}\n\n", comparison_title(views.metric)));
    md.push_str("| Operation |");
    for client in &table.clients {
        md.push_str(&format!(" {} |", config.label(client)));
    }
    md.push_str("\n|-----------|");
    for _ in &table.clients {
        md.push_str("------:|");
    }
    md.push('\n');
    for row in &table.rows {
        md.push_str(&format!("| {} |", config.label(&row.operation)));
        for &cell in &row.cells {
            md.push_str(&format!(" {} |", config.cell(cell)));
        }
        md.push('\n');
    }
    md.push('\n');

    md.push_str(&format!("## {}\n\n", ranking_title(views.metric)));
    for ranking in &views.rankings {
        md.push_str(&format!("### {}\n\n", config.label(&ranking.operation)));
        for entry in &ranking.entries {
            md.push_str(&format!(
                "- **{}** {}: {} {}\n",
                entry.label,
                config.label(&entry.client),
                config.value(entry.mean),
                unit
            ));
        }
        md.push('\n');
    }

    md.push_str(&format!("## {}\n\n", overall_title(views.metric)));
    md.push_str(&format!(
        "| Client | Count | Mean ({u}) | Std Dev ({u}) | Min ({u}) | Max ({u}) |\n",
        u = unit
    ));
    md.push_str("|--------|------:|------:|------:|------:|------:|\n");
    for client in &views.overall {
        let s = &client.summary;
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            config.label(&client.client),
            s.count,
            config.value(s.mean),
            config.value(s.stdev),
            config.value(s.min),
            config.value(s.max)
        ));
    }
    md.push('\n');
}

fn push_detail(md: &mut String, views: &MetricViews, config: &ReportConfig) {
    md.push_str(&format!("## {}\n\n", detail_title(views.metric)));
    md.push_str("| Client | Operation | Count | Mean | Median | Std Dev | Min | Max | Q1 | Q3 | IQR |\n");
    md.push_str("|--------|-----------|------:|-----:|-------:|--------:|----:|----:|---:|---:|----:|\n");
    for group in &views.groups {
        let s = &group.summary;
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            config.label(&group.client),
            config.label(&group.operation),
            s.count,
            config.value(s.mean),
            config.value(s.median),
            config.value(s.stdev),
            config.value(s.min),
            config.value(s.max),
            config.value(s.q1),
            config.value(s.q3),
            config.value(s.iqr)
        ));
    }
    md.push('\n');
}
