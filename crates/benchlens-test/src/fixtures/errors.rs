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

//! Malformed inputs for ingestion error testing.

/// Malformed CSV samples as `(name, csv_text)`.
///
/// Every sample must abort ingestion.
pub fn malformed_csv_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "missing_duration_column",
            "Client,Operation,Success,Error\njson,login,true,\n",
        ),
        (
            "missing_client_column",
            "Operation,DurationMs,Success,Error\nlogin,1.0,true,\n",
        ),
        (
            "empty_duration",
            "Client,Operation,DurationMs,Success,Error\njson,login,,true,\n",
        ),
        (
            "empty_success",
            "Client,Operation,DurationMs,Success,Error\njson,login,1.0,,\n",
        ),
        (
            "non_numeric_duration",
            "Client,Operation,DurationMs,Success,Error\njson,login,fast,true,\n",
        ),
        (
            "non_integer_memory",
            "Client,Operation,DurationMs,MemAllocDelta,Success,Error\njson,login,1.0,1.5,true,\n",
        ),
        (
            "short_row",
            "Client,Operation,DurationMs,Success,Error\njson,login\n",
        ),
        (
            "malformed_after_valid_rows",
            "Client,Operation,DurationMs,Success,Error\njson,login,1.0,true,\njson,login,oops,true,\n",
        ),
    ]
}

/// Malformed JSON run files as `(name, json_text)`.
pub fn malformed_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("not_json", "Client,Operation"),
        ("missing_results", r#"{"timestamp": "2025-06-01T12:00:00Z"}"#),
        (
            "missing_duration",
            r#"{"results": [{"Client": "json", "Operation": "echo", "Success": true}]}"#,
        ),
        (
            "string_duration",
            r#"{"results": [{"Client": "json", "Operation": "echo", "DurationMs": "1.0", "Success": true}]}"#,
        ),
    ]
}
