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

//! Integration tests for benchlens-csv against shared fixtures.

use benchlens_core::Analysis;
use benchlens_csv::{from_csv, to_csv, CsvError};
use benchlens_test::fixtures::{self, errors::malformed_csv_samples, MINIMAL_CSV};
use benchlens_test::{assert_close, protocol_run};

#[test]
fn test_producer_csv_ingests_every_row() {
    let records = from_csv(&fixtures::protocol_run_csv()).unwrap();

    assert_eq!(records.len(), 27);
    assert_eq!(records, protocol_run());
}

#[test]
fn test_minimal_csv_without_memory() {
    let records = from_csv(MINIMAL_CSV).unwrap();

    assert_eq!(records.len(), 4);
    assert!(records[..3].iter().all(|r| r.success));
    assert!(!records[3].success);
    assert_eq!(records[3].error, "timeout");
    assert!(records.iter().all(|r| !r.has_memory()));

    let analysis = Analysis::from_records(&records);
    assert!(!analysis.has_memory);
    assert_close(analysis.duration.comparison.cell("login", "json").unwrap(), 5.0);
    assert_close(analysis.success_rate("proto", "login").unwrap().rate_pct, 50.0);
}

#[test]
fn test_every_malformed_sample_aborts() {
    for (name, csv) in malformed_csv_samples() {
        assert!(from_csv(csv).is_err(), "sample '{}' should fail", name);
    }
}

#[test]
fn test_malformed_sample_error_kinds() {
    let samples: std::collections::HashMap<_, _> = malformed_csv_samples().into_iter().collect();

    assert!(matches!(
        from_csv(samples["missing_duration_column"]),
        Err(CsvError::MissingColumn(ref c)) if c == "DurationMs"
    ));
    assert!(matches!(
        from_csv(samples["missing_client_column"]),
        Err(CsvError::MissingColumn(ref c)) if c == "Client"
    ));
    assert!(matches!(
        from_csv(samples["empty_duration"]),
        Err(CsvError::MissingField { row: 1, .. })
    ));
    assert!(matches!(
        from_csv(samples["empty_success"]),
        Err(CsvError::MissingField { row: 1, ref column }) if column == "Success"
    ));
    assert!(matches!(
        from_csv(samples["non_numeric_duration"]),
        Err(CsvError::TypeMismatch { row: 1, .. })
    ));
    assert!(matches!(
        from_csv(samples["non_integer_memory"]),
        Err(CsvError::TypeMismatch { ref column, .. }) if column == "MemAllocDelta"
    ));
    assert!(matches!(
        from_csv(samples["short_row"]),
        Err(CsvError::ParseError { .. })
    ));
    assert!(matches!(
        from_csv(samples["malformed_after_valid_rows"]),
        Err(CsvError::TypeMismatch { row: 2, .. })
    ));
}

#[test]
fn test_export_then_ingest_preserves_analysis() {
    let records = protocol_run();
    let reread = from_csv(&to_csv(&records).unwrap()).unwrap();

    assert_eq!(Analysis::from_records(&reread), Analysis::from_records(&records));
}

#[test]
fn test_export_matches_producer_text() {
    assert_eq!(to_csv(&protocol_run()).unwrap(), fixtures::protocol_run_csv());
}
