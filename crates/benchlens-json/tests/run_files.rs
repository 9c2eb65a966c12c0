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

//! Integration tests for benchlens-json against shared fixtures.

use benchlens_core::Analysis;
use benchlens_json::{from_json, to_json, JsonError};
use benchlens_test::fixtures::{errors::malformed_json_samples, PRODUCER_JSON};
use benchlens_test::{assert_close, protocol_run};

#[test]
fn test_producer_run_file() {
    let run = from_json(PRODUCER_JSON).unwrap();
    assert_eq!(run.iterations, Some(1));
    assert_eq!(run.results[0].duration, Some(1_500_000));

    let records = run.into_records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].client, "json");
    assert_eq!(records[0].mem_alloc_delta, Some(2048));
    assert_eq!(records[1].error, "deadline exceeded");
    assert!(!records[1].success);

    let analysis = Analysis::from_records(&records);
    assert!(analysis.has_memory);
    assert_close(
        analysis
            .memory
            .as_ref()
            .unwrap()
            .comparison
            .cell("echo", "json")
            .unwrap(),
        2.0,
    );
    assert_eq!(analysis.success_rate("proto", "echo").unwrap().rate_pct, 0.0);
}

#[test]
fn test_every_malformed_sample_aborts() {
    for (name, json) in malformed_json_samples() {
        let outcome = from_json(json).and_then(|run| run.into_records());
        assert!(
            matches!(outcome, Err(JsonError::Parse(_))),
            "sample '{}' should fail to parse",
            name
        );
    }
}

#[test]
fn test_export_then_ingest_preserves_records() {
    let records = protocol_run();
    let json = to_json(&records, Some(3)).unwrap();
    let reread = from_json(&json).unwrap().into_records().unwrap();

    assert_eq!(reread, records);
}
