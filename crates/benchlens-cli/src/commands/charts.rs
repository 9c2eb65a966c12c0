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

//! Charts command - write SVG charts and the text report for a run

use super::{load_records, resolve_input};
use crate::error::{CliError, Result};
use benchlens_core::Analysis;
use benchlens_report::{export_text, write_charts, ReportConfig, REPORT_FILE};
use chrono::Utc;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes every chart and [`REPORT_FILE`] for the run at `input` into
/// `output`, or next to the run file when `output` is `None`.
///
/// Returns the paths written, report last.
///
/// # Errors
///
/// Returns `Err` if the run cannot be loaded or a file cannot be written.
pub fn charts(input: &Path, output: Option<&Path>) -> Result<Vec<PathBuf>> {
    let run_file = resolve_input(input)?;
    let dir = match output {
        Some(dir) => dir.to_path_buf(),
        None => default_output_dir(input, &run_file),
    };

    let records = load_records(&run_file)?;
    let analysis = Analysis::from_records(&records);
    let config = ReportConfig::builder().generated_at(Utc::now()).build();

    fs::create_dir_all(&dir).map_err(|e| CliError::io_error(&dir, e))?;
    let mut written =
        write_charts(&analysis, &config, &dir).map_err(|e| CliError::io_error(&dir, e))?;

    let report = dir.join(REPORT_FILE);
    export_text(&analysis, &config, &report).map_err(|e| CliError::io_error(&report, e))?;
    written.push(report);

    for path in &written {
        eprintln!("{} {}", "✓".green().bold(), path.display());
    }
    tracing::info!(dir = %dir.display(), files = written.len(), "charts written");

    Ok(written)
}

fn default_output_dir(input: &Path, run_file: &Path) -> PathBuf {
    if input.is_dir() {
        return input.to_path_buf();
    }
    match run_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
