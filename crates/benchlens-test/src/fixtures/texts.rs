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

//! Serialized runs as a benchmark producer writes them.

use super::runs::protocol_run;

/// Column layout written by the benchmark producer.
pub const PRODUCER_HEADER: &str =
    "Client,Operation,Iteration,DurationMs,MemAllocBefore,MemAllocAfter,MemAllocDelta,Success,Error";

/// [`protocol_run`] as producer CSV.
pub fn protocol_run_csv() -> String {
    let mut out = String::from(PRODUCER_HEADER);
    out.push('\n');
    for r in protocol_run() {
        out.push_str(&format!(
            "{},{},{},{:.4},{},{},{},{},{}\n",
            r.client,
            r.operation,
            r.iteration.unwrap_or(0),
            r.duration_ms,
            r.mem_alloc_before.unwrap_or(0),
            r.mem_alloc_after.unwrap_or(0),
            r.mem_alloc_delta.unwrap_or(0),
            r.success,
            r.error
        ));
    }
    out
}

/// A run with only the required columns (no iteration or memory data).
pub const MINIMAL_CSV: &str = "\
Client,Operation,DurationMs,Success,Error
json,login,4.0,true,
json,login,6.0,TRUE,
proto,login,2.0,True,
proto,login,3.0,false,timeout
";

/// A producer JSON run file with two results.
pub const PRODUCER_JSON: &str = r#"{
  "timestamp": "2025-06-01T12:00:00Z",
  "iterations": 1,
  "results": [
    {
      "Client": "json",
      "Operation": "echo",
      "Iteration": 1,
      "Duration": 1500000,
      "DurationMs": 1.5,
      "MemAllocBefore": 1000,
      "MemAllocAfter": 3048,
      "MemAllocDelta": 2048,
      "Success": true,
      "Error": ""
    },
    {
      "Client": "proto",
      "Operation": "echo",
      "Iteration": 1,
      "Duration": 500000,
      "DurationMs": 0.5,
      "MemAllocBefore": 1000,
      "MemAllocAfter": 1512,
      "MemAllocDelta": 512,
      "Success": false,
      "Error": "deadline exceeded"
    }
  ]
}"#;
