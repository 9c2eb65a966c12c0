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

//! Write records in the producer's CSV layout.

use crate::error::{CsvError, Result};
use crate::from_csv::columns;
use benchlens_core::Record;
use std::io::Write;

/// Header written by [`to_csv`], in order.
pub const PRODUCER_COLUMNS: [&str; 9] = [
    columns::CLIENT,
    columns::OPERATION,
    columns::ITERATION,
    columns::DURATION_MS,
    columns::MEM_ALLOC_BEFORE,
    columns::MEM_ALLOC_AFTER,
    columns::MEM_ALLOC_DELTA,
    columns::SUCCESS,
    columns::ERROR,
];

/// Convert records to a CSV string.
///
/// Durations are written with four decimals. Absent optional values are
/// written as empty fields, which [`crate::from_csv`] reads back as absent.
///
/// # Example
///
/// ```
/// use benchlens_core::Record;
/// use benchlens_csv::to_csv;
///
/// let records = vec![Record::new("json", "login", 1.5).with_iteration(1)];
/// let csv = to_csv(&records).unwrap();
/// assert_eq!(
///     csv,
///     "Client,Operation,Iteration,DurationMs,MemAllocBefore,MemAllocAfter,MemAllocDelta,Success,Error\n\
///      json,login,1,1.5000,,,,true,\n"
/// );
/// ```
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    to_csv_writer(records, &mut buffer)?;

    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV serialization".to_string(),
    })
}

/// Write records as CSV to any writer.
pub fn to_csv_writer<W: Write>(records: &[Record], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    wtr.write_record(PRODUCER_COLUMNS)?;

    for record in records {
        wtr.write_record([
            record.client.clone(),
            record.operation.clone(),
            optional(record.iteration),
            format!("{:.4}", record.duration_ms),
            optional(record.mem_alloc_before),
            optional(record.mem_alloc_after),
            optional(record.mem_alloc_delta),
            record.success.to_string(),
            record.error.clone(),
        ])?;
    }

    wtr.flush()?;
    tracing::debug!(rows = records.len(), "CSV written");
    Ok(())
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
