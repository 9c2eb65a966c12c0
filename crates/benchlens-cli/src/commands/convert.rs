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

//! Convert command - rewrite a run as CSV or JSON

use super::{read_file, resolve_input, write_output, RunFormat};
use crate::error::Result;
use std::path::Path;

/// Converts the run at `input` to the format implied by `output`'s
/// extension.
///
/// Iteration counts survive the round trip: a JSON run file keeps its
/// `iterations` field, and a CSV run gets the highest iteration it records.
///
/// # Errors
///
/// Returns `Err` if either extension is unsupported, the run cannot be
/// parsed, or `output` cannot be written.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
    let source = resolve_input(input)?;
    let target_format = RunFormat::from_path(output)?;
    let content = read_file(&source)?;

    let (records, iterations) = match RunFormat::from_path(&source)? {
        RunFormat::Csv => {
            let records = benchlens_csv::from_csv(&content)?;
            let iterations = records.iter().filter_map(|r| r.iteration).max();
            (records, iterations)
        }
        RunFormat::Json => {
            let run = benchlens_json::from_json(&content)?;
            let iterations = run.iterations;
            (run.into_records()?, iterations)
        }
    };

    let converted = match target_format {
        RunFormat::Csv => benchlens_csv::to_csv(&records)?,
        RunFormat::Json => {
            let mut json = benchlens_json::to_json(&records, iterations)?;
            json.push('\n');
            json
        }
    };
    write_output(&converted, Some(output))?;

    tracing::info!(
        from = %source.display(),
        to = %output.display(),
        records = records.len(),
        "run converted"
    );
    Ok(())
}
