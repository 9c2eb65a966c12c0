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

//! Write run files.

use crate::error::Result;
use crate::run_file::RunFile;
use benchlens_core::Record;
use chrono::Utc;
use std::io::Write;

/// Serialize records as a pretty-printed run file stamped with the current
/// time.
///
/// # Examples
///
/// ```
/// use benchlens_core::Record;
/// use benchlens_json::{from_json, to_json};
///
/// let records = vec![Record::new("json", "echo", 1.5).with_mem_alloc_delta(2048)];
/// let json = to_json(&records, Some(1)).unwrap();
///
/// let run = from_json(&json).unwrap();
/// assert!(run.timestamp.is_some());
/// assert_eq!(run.into_records().unwrap(), records);
/// ```
pub fn to_json(records: &[Record], iterations: Option<u32>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&stamped(records, iterations))?)
}

/// Write a run file to any writer.
pub fn to_json_writer<W: Write>(records: &[Record], iterations: Option<u32>, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, &stamped(records, iterations))?;
    tracing::debug!(results = records.len(), "JSON run file written");
    Ok(())
}

fn stamped(records: &[Record], iterations: Option<u32>) -> RunFile {
    RunFile::from_records(records, iterations).with_timestamp(Utc::now().into())
}
