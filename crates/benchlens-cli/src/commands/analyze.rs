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

//! Analyze command - render every view of a run in one report format

use super::{load_records, write_output};
use crate::error::{CliError, Result};
use benchlens_core::Analysis;
use benchlens_report::{
    render_analysis, render_html, render_json, render_markdown, ReportConfig,
};
use chrono::Utc;
use clap::ValueEnum;
use std::path::Path;

/// Report format for `analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Console tables
    Text,
    /// Analysis as a JSON document
    Json,
    /// Markdown tables
    Markdown,
    /// Self-contained HTML page with inline charts
    Html,
}

/// Analyzes the run at `input` and writes the report to `output`, or to
/// stdout when `output` is `None`.
///
/// # Errors
///
/// Returns `Err` if the run cannot be loaded or the report cannot be written.
pub fn analyze(input: &Path, format: ReportFormat, output: Option<&Path>) -> Result<()> {
    let records = load_records(input)?;
    let analysis = Analysis::from_records(&records);
    let config = ReportConfig::builder().generated_at(Utc::now()).build();

    let report = render(&analysis, &config, format)?;
    write_output(&report, output)?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), ?format, "report written");
    }
    Ok(())
}

fn render(analysis: &Analysis, config: &ReportConfig, format: ReportFormat) -> Result<String> {
    Ok(match format {
        ReportFormat::Text => render_analysis(analysis, config),
        ReportFormat::Json => {
            let mut json = render_json(analysis, config)
                .map_err(|e| CliError::report(e.to_string()))?;
            json.push('\n');
            json
        }
        ReportFormat::Markdown => render_markdown(analysis, config),
        ReportFormat::Html => {
            render_html(analysis, config).map_err(|e| CliError::report(e.to_string()))?
        }
    })
}
