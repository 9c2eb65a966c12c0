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

//! In-memory record sets.

use benchlens_core::Record;

/// `(client, operation, [(duration_ms, mem_delta_bytes, error)])` rows of
/// the protocol run. An empty error means success.
type RunTable = [(&'static str, &'static str, [(f64, i64, &'static str); 3]); 9];

static PROTOCOL_RUN: RunTable = [
    ("json", "echo", [(1.5, 4096, ""), (2.5, 4096, ""), (2.0, 4096, "")]),
    ("json", "sum", [(1.0, 2048, ""), (1.0, 2048, ""), (1.0, 2048, "")]),
    ("json", "logout", [(3.0, 1024, ""), (4.0, 1024, ""), (5.0, 1024, "")]),
    ("proto", "echo", [(0.5, 1024, ""), (1.0, 1024, ""), (1.5, 1024, "")]),
    ("proto", "sum", [(0.75, 512, ""), (0.75, 512, ""), (0.75, 512, "")]),
    ("proto", "logout", [(2.0, 512, ""), (2.0, 512, ""), (2.0, 512, "")]),
    ("string", "echo", [(1.0, 2048, ""), (1.0, 2048, ""), (1.0, 2048, "")]),
    ("string", "sum", [(2.0, 3072, ""), (2.0, 3072, ""), (2.0, 3072, "")]),
    (
        "string",
        "logout",
        [(6.0, 256, ""), (6.0, 256, ""), (9.0, 0, "connection reset")],
    ),
];

/// Three clients × three operations × three iterations, with memory deltas
/// and one failed `string/logout` invocation.
///
/// Group means (ms):
///
/// | operation | json | proto | string |
/// |-----------|------|-------|--------|
/// | echo      | 2.0  | 1.0   | 1.0    |
/// | logout    | 4.0  | 2.0   | 7.0    |
/// | sum       | 1.0  | 0.75  | 2.0    |
pub fn protocol_run() -> Vec<Record> {
    PROTOCOL_RUN
        .iter()
        .flat_map(|(client, operation, samples)| {
            samples
                .iter()
                .enumerate()
                .map(move |(i, &(duration_ms, delta, error))| {
                    let before = 10_000u64;
                    Record::new(*client, *operation, duration_ms)
                        .with_iteration(i as u32 + 1)
                        .with_mem_alloc_range(before, (before as i64 + delta) as u64)
                        .with_mem_alloc_delta(delta)
                        .with_outcome(error.is_empty(), error)
                })
        })
        .collect()
}

/// The same run without any memory measurement.
pub fn protocol_run_without_memory() -> Vec<Record> {
    protocol_run()
        .into_iter()
        .map(|mut record| {
            record.mem_alloc_before = None;
            record.mem_alloc_after = None;
            record.mem_alloc_delta = None;
            record
        })
        .collect()
}

/// `(A, op1, 5), (B, op1, 3), (A, op1, 7)`.
pub fn interleaved_groups() -> Vec<Record> {
    vec![
        Record::new("A", "op1", 5.0),
        Record::new("B", "op1", 3.0),
        Record::new("A", "op1", 7.0),
    ]
}

/// Two clients with identical means (10.0) for one operation, `B` listed
/// first.
pub fn tied_means() -> Vec<Record> {
    vec![
        Record::new("B", "op", 9.0),
        Record::new("A", "op", 10.0),
        Record::new("B", "op", 11.0),
    ]
}

/// Three records for one pair, two of them successful.
pub fn two_of_three_succeed() -> Vec<Record> {
    vec![
        Record::new("json", "login", 1.0),
        Record::new("json", "login", 1.2).failed("invalid token"),
        Record::new("json", "login", 0.8),
    ]
}
