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

//! Raw latency/memory pairs for scatter plots.

use crate::aggregate::Aggregation;
use crate::record::BYTES_PER_KIB;
use serde::{Deserialize, Serialize};

/// One record's latency and allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Operation the record belongs to.
    pub operation: String,
    /// Latency in milliseconds.
    pub duration_ms: f64,
    /// Allocation delta in kibibytes.
    pub memory_kib: f64,
}

/// Every sample point of one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPoints {
    /// Client name.
    pub client: String,
    /// Points in input order.
    pub points: Vec<SamplePoint>,
}

/// Pairs each record's duration with its memory delta, per client.
pub fn time_vs_memory(aggregation: &Aggregation) -> Vec<ClientPoints> {
    aggregation
        .clients()
        .map(|client| {
            let points = aggregation
                .records_of(client)
                .filter_map(|(operation, group, index)| {
                    Some(SamplePoint {
                        operation: operation.to_string(),
                        duration_ms: *group.durations.get(index)?,
                        memory_kib: *group.memory_deltas.get(index)? as f64 / BYTES_PER_KIB,
                    })
                })
                .collect();

            ClientPoints {
                client: client.to_string(),
                points,
            }
        })
        .filter(|cp: &ClientPoints| !cp.points.is_empty())
        .collect()
}
