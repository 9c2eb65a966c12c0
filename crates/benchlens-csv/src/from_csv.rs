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

//! Parse benchmark run CSV into records.

use crate::error::{CsvError, Result};
use benchlens_core::Record;
use csv::StringRecord;
use std::io::Read;

/// Default maximum number of data rows.
///
/// Bounds memory use for oversized or hostile inputs. Raise it through
/// [`FromCsvConfig::max_rows`] for very long runs.
///
/// # Examples
///
/// ```
/// # use benchlens_csv::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.max_rows, 1_000_000);
///
/// let config = FromCsvConfig {
///     max_rows: 10_000_000,
///     ..Default::default()
/// };
/// ```
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Column names understood by the ingester.
pub mod columns {
    /// Client implementation (required).
    pub const CLIENT: &str = "Client";
    /// Operation name (required).
    pub const OPERATION: &str = "Operation";
    /// Latency in milliseconds (required).
    pub const DURATION_MS: &str = "DurationMs";
    /// Outcome, `true` case-insensitively (required).
    pub const SUCCESS: &str = "Success";
    /// Failure message.
    pub const ERROR: &str = "Error";
    /// 1-based iteration counter.
    pub const ITERATION: &str = "Iteration";
    /// Heap allocation counter before the call.
    pub const MEM_ALLOC_BEFORE: &str = "MemAllocBefore";
    /// Heap allocation counter after the call.
    pub const MEM_ALLOC_AFTER: &str = "MemAllocAfter";
    /// Bytes allocated by the call.
    pub const MEM_ALLOC_DELTA: &str = "MemAllocDelta";
}

/// Configuration for CSV parsing.
///
/// # Examples
///
/// ## Tab-separated input
///
/// ```
/// use benchlens_csv::{from_csv_with_config, FromCsvConfig};
///
/// let tsv = "Client\tOperation\tDurationMs\tSuccess\tError\njson\tlogin\t1.5\ttrue\t\n";
/// let config = FromCsvConfig {
///     delimiter: b'\t',
///     ..Default::default()
/// };
/// let records = from_csv_with_config(tsv, config).unwrap();
/// assert_eq!(records[0].duration_ms, 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields and headers
    /// (default: `true`).
    pub trim: bool,

    /// Maximum number of data rows to parse (default: 1,000,000).
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse CSV text into records with default configuration.
///
/// Columns are located by header name, so their order does not matter and
/// unknown columns are ignored. `Client`, `Operation`, `DurationMs` and
/// `Success` are required; `Error`, `Iteration` and the memory columns are
/// optional.
///
/// # Examples
///
/// ```
/// use benchlens_csv::from_csv;
///
/// let csv_data = "\
/// Client,Operation,DurationMs,MemAllocDelta,Success,Error
/// json,login,4.0,2048,true,
/// proto,login,3.0,512,FALSE,timeout
/// ";
///
/// let records = from_csv(csv_data).unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].mem_alloc_delta, Some(2048));
/// assert!(!records[1].success);
/// assert_eq!(records[1].error, "timeout");
/// ```
///
/// # Errors
///
/// The first malformed row aborts ingestion:
/// - [`CsvError::MissingColumn`] when a required header is absent
/// - [`CsvError::MissingField`] when a required field is empty
/// - [`CsvError::TypeMismatch`] when a number does not parse
/// - [`CsvError::ParseError`] for structurally broken rows
/// - [`CsvError::SecurityLimit`] when the row limit is exceeded
pub fn from_csv(csv: &str) -> Result<Vec<Record>> {
    from_csv_with_config(csv, FromCsvConfig::default())
}

/// Parse CSV text into records with custom configuration.
pub fn from_csv_with_config(csv: &str, config: FromCsvConfig) -> Result<Vec<Record>> {
    from_reader(csv.as_bytes(), config)
}

/// Parse CSV from any reader.
///
/// # Examples
///
/// ```no_run
/// use benchlens_csv::{from_reader, FromCsvConfig};
/// use std::fs::File;
///
/// let file = File::open("benchmark_results.csv").unwrap();
/// let records = from_reader(file, FromCsvConfig::default()).unwrap();
/// println!("{} records", records.len());
/// ```
pub fn from_reader<R: Read>(reader: R, config: FromCsvConfig) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let layout = Layout::from_headers(csv_reader.headers()?)?;
    tracing::debug!(
        memory = layout.mem_alloc_delta.is_some(),
        iteration = layout.iteration.is_some(),
        "CSV header resolved"
    );

    let mut records = Vec::new();
    for (record_idx, result) in csv_reader.records().enumerate() {
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let row = result.map_err(|e| CsvError::ParseError {
            line: e
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(record_idx + 2),
            message: e.to_string(),
        })?;

        records.push(layout.parse_row(&row, record_idx + 1)?);
    }

    tracing::debug!(rows = records.len(), "CSV ingested");
    Ok(records)
}

/// Column positions resolved from the header row.
#[derive(Debug)]
struct Layout {
    client: usize,
    operation: usize,
    duration_ms: usize,
    success: usize,
    error: Option<usize>,
    iteration: Option<usize>,
    mem_alloc_before: Option<usize>,
    mem_alloc_after: Option<usize>,
    mem_alloc_delta: Option<usize>,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require =
            |name: &str| find(name).ok_or_else(|| CsvError::MissingColumn(name.to_string()));

        Ok(Self {
            client: require(columns::CLIENT)?,
            operation: require(columns::OPERATION)?,
            duration_ms: require(columns::DURATION_MS)?,
            success: require(columns::SUCCESS)?,
            error: find(columns::ERROR),
            iteration: find(columns::ITERATION),
            mem_alloc_before: find(columns::MEM_ALLOC_BEFORE),
            mem_alloc_after: find(columns::MEM_ALLOC_AFTER),
            mem_alloc_delta: find(columns::MEM_ALLOC_DELTA),
        })
    }

    fn parse_row(&self, row: &StringRecord, row_num: usize) -> Result<Record> {
        let field = |idx: usize| row.get(idx).unwrap_or("");
        let optional = |idx: Option<usize>| idx.map(field).filter(|v| !v.is_empty());

        let client = required_field(row, self.client, row_num, columns::CLIENT)?;
        let operation = required_field(row, self.operation, row_num, columns::OPERATION)?;
        let duration_ms = parse_duration(
            required_field(row, self.duration_ms, row_num, columns::DURATION_MS)?,
            row_num,
        )?;
        let success = required_field(row, self.success, row_num, columns::SUCCESS)?
            .eq_ignore_ascii_case("true");
        let error = optional(self.error).unwrap_or("");

        let mut record = Record::new(client, operation, duration_ms).with_outcome(success, error);

        if let Some(value) = optional(self.iteration) {
            record.iteration = Some(parse_unsigned(value, row_num, columns::ITERATION)?);
        }
        if let Some(value) = optional(self.mem_alloc_before) {
            record.mem_alloc_before = Some(parse_unsigned(value, row_num, columns::MEM_ALLOC_BEFORE)?);
        }
        if let Some(value) = optional(self.mem_alloc_after) {
            record.mem_alloc_after = Some(parse_unsigned(value, row_num, columns::MEM_ALLOC_AFTER)?);
        }
        if let Some(value) = optional(self.mem_alloc_delta) {
            record.mem_alloc_delta = Some(parse_delta(value, row_num)?);
        }

        Ok(record)
    }
}

fn required_field<'r>(
    row: &'r StringRecord,
    idx: usize,
    row_num: usize,
    column: &str,
) -> Result<&'r str> {
    match row.get(idx) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(CsvError::MissingField {
            row: row_num,
            column: column.to_string(),
        }),
    }
}

fn type_mismatch(row: usize, column: &str, expected: &str, value: &str) -> CsvError {
    CsvError::TypeMismatch {
        row,
        column: column.to_string(),
        expected: expected.to_string(),
        value: value.to_string(),
    }
}

fn parse_duration(value: &str, row: usize) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(ms) if ms.is_finite() => Ok(ms),
        _ => Err(type_mismatch(row, columns::DURATION_MS, "finite number", value)),
    }
}

fn parse_unsigned<T: std::str::FromStr>(value: &str, row: usize, column: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| type_mismatch(row, column, "unsigned integer", value))
}

/// Parses an allocation delta.
///
/// Producers that subtract unsigned counters write negative deltas as
/// wrapped values above `i64::MAX`; those are read back as two's complement.
fn parse_delta(value: &str, row: usize) -> Result<i64> {
    value
        .parse::<i64>()
        .or_else(|_| value.parse::<u64>().map(|wrapped| wrapped as i64))
        .map_err(|_| type_mismatch(row, columns::MEM_ALLOC_DELTA, "integer", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Client,Operation,DurationMs,Success,Error";

    #[test]
    fn test_from_csv_config_default() {
        let config = FromCsvConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(config.trim);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
    }

    #[test]
    fn test_columns_located_by_name() {
        let csv = "Success,DurationMs,Operation,Client\ntrue,2.5,echo,json\n";
        let records = from_csv(csv).unwrap();

        assert_eq!(records[0].client, "json");
        assert_eq!(records[0].operation, "echo");
        assert_eq!(records[0].duration_ms, 2.5);
        assert!(records[0].success);
        assert_eq!(records[0].error, "");
    }

    #[test]
    fn test_success_is_case_insensitive() {
        let csv = format!("{}\na,op,1,TRUE,\na,op,1,True,\na,op,1,yes,\na,op,1,false,\n", HEADER);
        let outcomes: Vec<bool> = from_csv(&csv).unwrap().iter().map(|r| r.success).collect();
        assert_eq!(outcomes, vec![true, true, false, false]);
    }

    #[test]
    fn test_memory_columns_optional() {
        let records = from_csv(&format!("{}\njson,login,1.0,true,\n", HEADER)).unwrap();
        assert_eq!(records[0].mem_alloc_delta, None);
        assert_eq!(records[0].iteration, None);
        assert!(!records[0].has_memory());
    }

    #[test]
    fn test_empty_memory_field_is_absent() {
        let csv = "Client,Operation,DurationMs,MemAllocDelta,Success\njson,login,1.0,,true\n";
        assert_eq!(from_csv(csv).unwrap()[0].mem_alloc_delta, None);
    }

    #[test]
    fn test_negative_and_wrapped_deltas() {
        let csv = format!(
            "Client,Operation,DurationMs,MemAllocDelta,Success\na,op,1,-512,true\na,op,1,{},true\n",
            u64::MAX - 511
        );
        let deltas: Vec<Option<i64>> = from_csv(&csv)
            .unwrap()
            .iter()
            .map(|r| r.mem_alloc_delta)
            .collect();
        assert_eq!(deltas, vec![Some(-512), Some(-512)]);
    }

    #[test]
    fn test_non_finite_duration_rejected() {
        let err = from_csv(&format!("{}\njson,login,NaN,true,\n", HEADER)).unwrap_err();
        assert!(matches!(
            err,
            CsvError::TypeMismatch { row: 1, ref column, .. } if column == "DurationMs"
        ));
    }

    #[test]
    fn test_empty_client_rejected() {
        let err = from_csv(&format!("{}\njson,login,1,true,\n,login,1,true,\n", HEADER))
            .unwrap_err();
        assert!(matches!(
            err,
            CsvError::MissingField { row: 2, ref column } if column == "Client"
        ));
    }

    #[test]
    fn test_empty_success_rejected() {
        let err = from_csv(&format!("{}\njson,login,1,,\n", HEADER)).unwrap_err();
        assert!(matches!(
            err,
            CsvError::MissingField { row: 1, ref column } if column == "Success"
        ));
    }

    #[test]
    fn test_max_rows_limit_enforcement() {
        let mut csv = String::from(HEADER);
        csv.push('\n');
        for _ in 0..=10 {
            csv.push_str("json,login,1.0,true,\n");
        }
        let config = FromCsvConfig {
            max_rows: 10,
            ..Default::default()
        };

        let err = from_csv_with_config(&csv, config).unwrap_err();
        assert!(matches!(
            err,
            CsvError::SecurityLimit {
                limit: 10,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_trim_disabled_keeps_whitespace() {
        let csv = format!("{}\n json ,login,1.0,true,\n", HEADER);
        let config = FromCsvConfig {
            trim: false,
            ..Default::default()
        };
        assert_eq!(from_csv_with_config(&csv, config).unwrap()[0].client, " json ");
        assert_eq!(from_csv(&csv).unwrap()[0].client, "json");
    }

    #[test]
    fn test_header_only_yields_no_records() {
        assert!(from_csv(HEADER).unwrap().is_empty());
    }
}
