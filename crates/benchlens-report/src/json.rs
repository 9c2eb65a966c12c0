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

//! JSON export for analyses.

use crate::config::ReportConfig;
use benchlens_core::Analysis;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    analysis: &'a Analysis,
}

/// Renders the analysis as pretty-printed JSON.
pub fn render_json(analysis: &Analysis, config: &ReportConfig) -> io::Result<String> {
    let report = JsonReport {
        title: &config.title,
        generated_at: config.timestamp(),
        analysis,
    };
    serde_json::to_string_pretty(&report).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Exports the analysis as JSON.
///
/// # Arguments
///
/// * `analysis` - The analysis to export
/// * `config` - Supplies the title and generation time
/// * `path` - Output file path
pub fn export_json(analysis: &Analysis, config: &ReportConfig, path: &Path) -> io::Result<()> {
    fs::write(path, render_json(analysis, config)?)?;
    Ok(())
}
