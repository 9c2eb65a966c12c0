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

//! CLI command implementations

mod analyze;
mod charts;
mod convert;

pub use analyze::{analyze, ReportFormat};
pub use charts::charts;
pub use convert::convert;

use crate::error::{CliError, Result};
use benchlens_core::Record;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default maximum input file size (1 GB).
/// Can be overridden via the `BENCHLENS_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Run file the benchmark producer writes as CSV.
pub const RESULTS_CSV: &str = "benchmark_results.csv";

/// Run file the benchmark producer writes as JSON.
pub const RESULTS_JSON: &str = "benchmark_results.json";

fn get_max_file_size() -> u64 {
    std::env::var("BENCHLENS_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Serialization of a run file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunFormat {
    Csv,
    Json,
}

impl RunFormat {
    /// Format for `path`, matched case-insensitively on its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(RunFormat::Csv),
            Some("json") => Ok(RunFormat::Json),
            _ => Err(CliError::unsupported_format(path)),
        }
    }
}

/// Read a file from disk with size validation.
///
/// Files larger than `BENCHLENS_MAX_FILE_SIZE` bytes (default
/// [`DEFAULT_MAX_FILE_SIZE`]) are rejected before any allocation.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// its content is not valid UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Resolves `input` to a run file.
///
/// A directory resolves to its [`RESULTS_CSV`], or to [`RESULTS_JSON`] when
/// no CSV exists.
pub fn resolve_input(input: &Path) -> Result<PathBuf> {
    if input.is_dir() {
        return [RESULTS_CSV, RESULTS_JSON]
            .iter()
            .map(|name| input.join(name))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| CliError::InputNotFound(input.to_path_buf()));
    }
    if input.is_file() {
        Ok(input.to_path_buf())
    } else {
        Err(CliError::InputNotFound(input.to_path_buf()))
    }
}

/// Loads the records of the run at `input`.
pub fn load_records(input: &Path) -> Result<Vec<Record>> {
    let path = resolve_input(input)?;
    let format = RunFormat::from_path(&path)?;
    let content = read_file(&path)?;

    let records = match format {
        RunFormat::Csv => benchlens_csv::from_csv(&content)?,
        RunFormat::Json => benchlens_json::from_json(&content)?.into_records()?,
    };

    tracing::info!(path = %path.display(), records = records.len(), "loaded run");
    Ok(records)
}
