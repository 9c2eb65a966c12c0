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

//! SVG charts built from analysis views with `plotters`.
//!
//! Every chart is derived from an [`Analysis`] only, never from raw
//! records. Memory charts are produced only when the run carried memory
//! measurements.
//!
//! | File | Content |
//! |------|---------|
//! | `comparison_by_operation.svg` | mean latency per client, one panel per operation |
//! | `client_comparison.svg` | mean latency grouped by operation |
//! | `distribution.svg` | latency box plots, one panel per client |
//! | `success_rate.svg` | success percentage grouped by operation |
//! | `memory_by_operation.svg` | mean allocation per client, one panel per operation |
//! | `memory_client_comparison.svg` | mean allocation grouped by operation |
//! | `time_vs_memory.svg` | latency against allocation for every record |
//! | `memory_distribution.svg` | allocation box plots, one panel per client |

mod bar;
mod boxplot;
mod canvas;
mod scatter;

use crate::config::ReportConfig;
use bar::{grouped_bars, panel_bars, Bar, GroupedBars, Panel, Series};
use benchlens_core::{Analysis, Metric, MetricViews};
use boxplot::{box_panels, BoxEntry, BoxPanel};
use scatter::{scatter, PointSeries};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const COMPARISON_BY_OPERATION: &str = "comparison_by_operation.svg";
pub const CLIENT_COMPARISON: &str = "client_comparison.svg";
pub const DISTRIBUTION: &str = "distribution.svg";
pub const SUCCESS_RATE: &str = "success_rate.svg";
pub const MEMORY_BY_OPERATION: &str = "memory_by_operation.svg";
pub const MEMORY_CLIENT_COMPARISON: &str = "memory_client_comparison.svg";
pub const TIME_VS_MEMORY: &str = "time_vs_memory.svg";
pub const MEMORY_DISTRIBUTION: &str = "memory_distribution.svg";

/// A rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// Chart heading.
    pub title: String,
    /// Complete SVG document.
    pub svg: String,
}

/// Renders every applicable chart, duration charts first.
pub fn render_charts(analysis: &Analysis, config: &ReportConfig) -> io::Result<Vec<Chart>> {
    let mut charts = vec![
        by_operation(&analysis.duration, config)?,
        client_comparison(&analysis.duration, config)?,
        distribution(&analysis.duration, config)?,
        success_rate(analysis, config)?,
    ];

    if let Some(memory) = &analysis.memory {
        charts.push(by_operation(memory, config)?);
        charts.push(client_comparison(memory, config)?);
        charts.push(time_vs_memory(analysis, config)?);
        charts.push(distribution(memory, config)?);
    }

    Ok(charts)
}

/// Writes every chart into `dir`, creating it if needed.
///
/// Returns the written paths in render order.
pub fn write_charts(analysis: &Analysis, config: &ReportConfig, dir: &Path) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    render_charts(analysis, config)?
        .into_iter()
        .map(|chart| {
            let path = dir.join(chart.file_name);
            fs::write(&path, chart.svg)?;
            tracing::debug!(path = %path.display(), "chart written");
            Ok(path)
        })
        .collect()
}

fn ms_label(value: f64) -> String {
    format!("{:.2}ms", value)
}

fn kib_label(value: f64) -> String {
    format!("{:.2}KiB", value)
}

fn pct_label(value: f64) -> String {
    format!("{:.0}%", value)
}

fn axis_label(metric: Metric) -> String {
    match metric {
        Metric::Duration => format!("Time ({})", metric.unit()),
        Metric::Memory => format!("Memory ({})", metric.unit()),
    }
}

fn value_label(metric: Metric) -> fn(f64) -> String {
    match metric {
        Metric::Duration => ms_label,
        Metric::Memory => kib_label,
    }
}

fn by_operation(views: &MetricViews, config: &ReportConfig) -> io::Result<Chart> {
    let (file_name, title) = match views.metric {
        Metric::Duration => (
            COMPARISON_BY_OPERATION,
            "Average Execution Time by Operation".to_string(),
        ),
        Metric::Memory => (
            MEMORY_BY_OPERATION,
            format!("Memory Allocation by Operation ({})", views.metric.unit()),
        ),
    };

    let table = &views.comparison;
    let panels: Vec<Panel> = table
        .rows
        .iter()
        .map(|row| Panel {
            title: config.label(&row.operation),
            bars: row
                .cells
                .iter()
                .enumerate()
                .filter_map(|(col, cell)| {
                    cell.map(|value| Bar {
                        label: config.label(&table.clients[col]),
                        value,
                        color: col,
                    })
                })
                .collect(),
        })
        .collect();

    let svg = panel_bars(&title, &axis_label(views.metric), &panels, value_label(views.metric))?;
    Ok(Chart { file_name, title, svg })
}

fn client_comparison(views: &MetricViews, config: &ReportConfig) -> io::Result<Chart> {
    let (file_name, title) = match views.metric {
        Metric::Duration => (
            CLIENT_COMPARISON,
            "Performance Comparison: All Operations Across Clients",
        ),
        Metric::Memory => (
            MEMORY_CLIENT_COMPARISON,
            "Memory Comparison: All Operations Across Clients",
        ),
    };

    let table = &views.comparison;
    let chart = GroupedBars {
        title: title.to_string(),
        y_label: axis_label(views.metric),
        categories: table.rows.iter().map(|r| config.label(&r.operation)).collect(),
        series: table
            .clients
            .iter()
            .enumerate()
            .map(|(col, client)| Series {
                name: config.label(client),
                values: table.rows.iter().map(|r| r.cells[col]).collect(),
            })
            .collect(),
        y_range: None,
        value_label: value_label(views.metric),
    };

    Ok(Chart {
        file_name,
        title: chart.title.clone(),
        svg: grouped_bars(&chart)?,
    })
}

fn distribution(views: &MetricViews, config: &ReportConfig) -> io::Result<Chart> {
    let (file_name, title) = match views.metric {
        Metric::Duration => (DISTRIBUTION, "Distribution of Execution Times by Operation"),
        Metric::Memory => (MEMORY_DISTRIBUTION, "Distribution of Memory Allocation by Operation"),
    };

    let mut panels: Vec<BoxPanel> = Vec::new();
    let mut current: Option<&str> = None;
    for group in &views.groups {
        if current != Some(group.client.as_str()) {
            panels.push(BoxPanel {
                title: format!("{} Client", config.label(&group.client)),
                boxes: Vec::new(),
            });
            current = Some(group.client.as_str());
        }
        if let Some(panel) = panels.last_mut() {
            panel.boxes.push(BoxEntry {
                label: config.label(&group.operation),
                summary: group.summary,
            });
        }
    }

    Ok(Chart {
        file_name,
        title: title.to_string(),
        svg: box_panels(title, &axis_label(views.metric), &panels)?,
    })
}

fn success_rate(analysis: &Analysis, config: &ReportConfig) -> io::Result<Chart> {
    let title = "Success Rate by Operation and Client";
    let chart = GroupedBars {
        title: title.to_string(),
        y_label: "Success Rate (%)".to_string(),
        categories: analysis.operations.iter().map(|op| config.label(op)).collect(),
        series: analysis
            .clients
            .iter()
            .map(|client| Series {
                name: config.label(client),
                values: analysis
                    .operations
                    .iter()
                    .map(|op| analysis.success_rate(client, op).map(|r| r.rate_pct))
                    .collect(),
            })
            .collect(),
        y_range: Some((0.0, 100.0)),
        value_label: pct_label,
    };

    Ok(Chart {
        file_name: SUCCESS_RATE,
        title: title.to_string(),
        svg: grouped_bars(&chart)?,
    })
}

fn time_vs_memory(analysis: &Analysis, config: &ReportConfig) -> io::Result<Chart> {
    let title = "Execution Time vs Memory Allocation";
    let series: Vec<PointSeries> = analysis
        .time_vs_memory
        .iter()
        .map(|cp| PointSeries {
            name: config.label(&cp.client),
            points: cp.points.iter().map(|p| (p.duration_ms, p.memory_kib)).collect(),
        })
        .collect();

    Ok(Chart {
        file_name: TIME_VS_MEMORY,
        title: title.to_string(),
        svg: scatter(
            title,
            &axis_label(Metric::Duration),
            &axis_label(Metric::Memory),
            &series,
        )?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlens_core::Record;
    use tempfile::TempDir;

    fn with_memory() -> Analysis {
        Analysis::from_records(&[
            Record::new("json", "login", 4.0).with_mem_alloc_delta(2048),
            Record::new("json", "login", 6.0).with_mem_alloc_delta(1024),
            Record::new("proto", "login", 2.0).with_mem_alloc_delta(512),
            Record::new("proto", "upload", 8.0).failed("io"),
        ])
    }

    #[test]
    fn test_duration_charts_only_without_memory() {
        let analysis = Analysis::from_records(&[Record::new("json", "login", 1.0)]);
        let names: Vec<&str> = render_charts(&analysis, &ReportConfig::default())
            .unwrap()
            .iter()
            .map(|c| c.file_name)
            .collect();
        assert_eq!(names, vec![COMPARISON_BY_OPERATION, CLIENT_COMPARISON, DISTRIBUTION, SUCCESS_RATE]);
    }

    #[test]
    fn test_memory_charts_when_measured() {
        let charts = render_charts(&with_memory(), &ReportConfig::default()).unwrap();
        assert_eq!(charts.len(), 8);
        assert_eq!(charts[6].file_name, TIME_VS_MEMORY);
        assert!(charts[4].svg.contains(">1.50KiB</text>"));
    }

    #[test]
    fn test_missing_cell_not_drawn() {
        let charts = render_charts(&with_memory(), &ReportConfig::default()).unwrap();
        let upload_bars = charts[0].svg.matches(">8.00ms</text>").count();
        assert_eq!(upload_bars, 1);
        assert!(!charts[1].svg.contains(">0.00ms</text>"));
    }

    #[test]
    fn test_write_charts() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("charts");

        let paths = write_charts(&with_memory(), &ReportConfig::default(), &out).unwrap();

        assert_eq!(paths.len(), 8);
        for path in &paths {
            let content = fs::read_to_string(path).unwrap();
            assert!(content.starts_with("<svg"));
        }
    }

    #[test]
    fn test_charts_are_deterministic() {
        let analysis = with_memory();
        let config = ReportConfig::default();
        assert_eq!(render_charts(&analysis, &config).unwrap(), render_charts(&analysis, &config).unwrap());
    }
}
