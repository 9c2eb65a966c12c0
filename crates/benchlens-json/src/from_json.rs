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

//! Parse run files.

use crate::error::Result;
use crate::run_file::RunFile;
use std::io::Read;

/// Parse a run file from a JSON string.
///
/// Only the document shape is checked here; call
/// [`RunFile::into_records`] to obtain records.
///
/// # Examples
///
/// ```
/// use benchlens_json::from_json;
///
/// let json = r#"{
///   "timestamp": "2025-06-01T12:00:00Z",
///   "iterations": 1,
///   "results": [
///     {"Client": "json", "Operation": "echo", "DurationMs": 1.5, "Success": true, "Error": ""}
///   ]
/// }"#;
///
/// let run = from_json(json).unwrap();
/// assert_eq!(run.iterations, Some(1));
///
/// let records = run.into_records().unwrap();
/// assert_eq!(records[0].duration_ms, 1.5);
/// ```
///
/// # Errors
///
/// [`crate::JsonError::Parse`] for malformed JSON and for missing or
/// mistyped required fields (`results`, `Client`, `Operation`,
/// `DurationMs`, `Success`).
pub fn from_json(json: &str) -> Result<RunFile> {
    let run: RunFile = serde_json::from_str(json)?;
    tracing::debug!(results = run.results.len(), "JSON run file parsed");
    Ok(run)
}

/// Parse a run file from any reader.
pub fn from_json_reader<R: Read>(reader: R) -> Result<RunFile> {
    let run: RunFile = serde_json::from_reader(reader)?;
    tracing::debug!(results = run.results.len(), "JSON run file parsed");
    Ok(run)
}
