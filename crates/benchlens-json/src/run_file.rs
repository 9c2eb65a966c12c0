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

//! Run-file document model.

use crate::error::{JsonError, Result};
use benchlens_core::Record;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// A benchmark run as written by the producer.
///
/// ```json
/// {
///   "timestamp": "2025-06-01T12:00:00Z",
///   "iterations": 3,
///   "results": [ { "Client": "json", "Operation": "echo", ... } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunFile {
    /// When the run was recorded (RFC 3339).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Iterations per (client, operation) the producer was configured with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    /// One entry per operation invocation.
    pub results: Vec<RunResult>,
}

/// One invocation, keyed the way the producer names its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RunResult {
    pub client: String,
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration: Option<u32>,
    /// Latency in nanoseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    pub duration_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_alloc_before: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mem_alloc_after: Option<u64>,
    /// Signed delta; wrapped unsigned values are accepted on input.
    #[serde(
        default,
        deserialize_with = "deserialize_delta",
        skip_serializing_if = "Option::is_none"
    )]
    pub mem_alloc_delta: Option<i64>,
    pub success: bool,
    #[serde(default)]
    pub error: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Delta {
    Signed(i64),
    Wrapped(u64),
}

/// Reads a delta as `i64`, reinterpreting values above `i64::MAX` as two's
/// complement.
fn deserialize_delta<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Delta>::deserialize(deserializer)?.map(|delta| match delta {
        Delta::Signed(value) => value,
        Delta::Wrapped(value) => value as i64,
    }))
}

impl From<&Record> for RunResult {
    fn from(record: &Record) -> Self {
        Self {
            client: record.client.clone(),
            operation: record.operation.clone(),
            iteration: record.iteration,
            duration: Some((record.duration_ms * 1_000_000.0).round() as i64),
            duration_ms: record.duration_ms,
            mem_alloc_before: record.mem_alloc_before,
            mem_alloc_after: record.mem_alloc_after,
            mem_alloc_delta: record.mem_alloc_delta,
            success: record.success,
            error: record.error.clone(),
        }
    }
}

impl RunResult {
    /// Converts to a record, checking required strings are non-empty.
    ///
    /// `DurationMs` is authoritative; the nanosecond `Duration` is ignored.
    pub fn into_record(self, index: usize) -> Result<Record> {
        for (field, value) in [("Client", &self.client), ("Operation", &self.operation)] {
            if value.is_empty() {
                return Err(JsonError::MissingField {
                    index,
                    field: field.to_string(),
                });
            }
        }

        let mut record = Record::new(self.client, self.operation, self.duration_ms)
            .with_outcome(self.success, self.error);
        record.iteration = self.iteration;
        record.mem_alloc_before = self.mem_alloc_before;
        record.mem_alloc_after = self.mem_alloc_after;
        record.mem_alloc_delta = self.mem_alloc_delta;
        Ok(record)
    }
}

impl RunFile {
    /// Wraps records in a run file without timestamp.
    pub fn from_records(records: &[Record], iterations: Option<u32>) -> Self {
        Self {
            timestamp: None,
            iterations,
            results: records.iter().map(RunResult::from).collect(),
        }
    }

    /// Sets the recording time.
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Converts every result to a record, in file order.
    ///
    /// The first invalid result aborts the conversion.
    pub fn into_records(self) -> Result<Vec<Record>> {
        self.results
            .into_iter()
            .enumerate()
            .map(|(idx, result)| result.into_record(idx + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_json(delta: &str) -> String {
        format!(
            r#"{{"Client":"json","Operation":"echo","DurationMs":1.0,"MemAllocDelta":{},"Success":true}}"#,
            delta
        )
    }

    #[test]
    fn test_wrapped_delta_reads_as_negative() {
        let wrapped = (u64::MAX - 1023).to_string();
        let result: RunResult = serde_json::from_str(&result_json(&wrapped)).unwrap();
        assert_eq!(result.mem_alloc_delta, Some(-1024));
    }

    #[test]
    fn test_signed_delta() {
        let result: RunResult = serde_json::from_str(&result_json("-8")).unwrap();
        assert_eq!(result.mem_alloc_delta, Some(-8));
        let result: RunResult = serde_json::from_str(&result_json("4096")).unwrap();
        assert_eq!(result.mem_alloc_delta, Some(4096));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"Client":"json","Operation":"echo","DurationMs":2.5,"Success":false}"#;
        let result: RunResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.iteration, None);
        assert_eq!(result.mem_alloc_delta, None);
        assert_eq!(result.error, "");
        assert!(!result.into_record(1).unwrap().success);
    }

    #[test]
    fn test_empty_operation_rejected() {
        let json = r#"{"Client":"json","Operation":"","DurationMs":2.5,"Success":true}"#;
        let result: RunResult = serde_json::from_str(json).unwrap();
        assert!(matches!(
            result.into_record(4),
            Err(JsonError::MissingField { index: 4, ref field }) if field == "Operation"
        ));
    }

    #[test]
    fn test_from_record_fills_nanoseconds() {
        let record = Record::new("proto", "sum", 0.75).with_iteration(2);
        let result = RunResult::from(&record);

        assert_eq!(result.duration, Some(750_000));
        assert_eq!(result.iteration, Some(2));
        assert_eq!(result.into_record(1).unwrap(), record);
    }
}
