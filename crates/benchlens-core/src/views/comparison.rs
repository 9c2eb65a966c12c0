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

//! Operation × client table of group means.

use crate::aggregate::Aggregation;
use crate::metric::Metric;
use crate::stats::summarize;
use serde::{Deserialize, Serialize};

/// Mean of every (operation, client) group, laid out as a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonTable {
    /// Quantity the means are taken over.
    pub metric: Metric,
    /// Column headers, lexicographic.
    pub clients: Vec<String>,
    /// One row per operation, lexicographic.
    pub rows: Vec<ComparisonRow>,
}

/// One operation's means, aligned with [`ComparisonTable::clients`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Operation name.
    pub operation: String,
    /// Mean per client; `None` when the client has no measurements for
    /// this operation.
    pub cells: Vec<Option<f64>>,
}

impl ComparisonTable {
    /// Looks up the cell for `(operation, client)`.
    ///
    /// Returns `None` both for unknown keys and for not-applicable cells.
    pub fn cell(&self, operation: &str, client: &str) -> Option<f64> {
        let column = self.clients.iter().position(|c| c == client)?;
        let row = self.rows.iter().find(|r| r.operation == operation)?;
        row.cells.get(column).copied().flatten()
    }

    /// Returns whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Builds the comparison table for `metric`.
///
/// Clients and operations that only have empty groups are left out, so
/// every row and column carries at least one value.
pub fn comparison_table(aggregation: &Aggregation, metric: Metric) -> ComparisonTable {
    let clients: Vec<String> = aggregation
        .clients()
        .filter(|client| {
            aggregation
                .operations_of(client)
                .any(|(_, group)| !group.is_empty())
        })
        .map(str::to_string)
        .collect();

    let rows = aggregation
        .operations()
        .into_iter()
        .filter_map(|operation| {
            let cells: Vec<Option<f64>> = clients
                .iter()
                .map(|client| {
                    aggregation
                        .group(client, operation)
                        .and_then(|group| summarize(&group.values(metric)))
                        .map(|summary| summary.mean)
                })
                .collect();

            cells.iter().any(Option::is_some).then(|| ComparisonRow {
                operation: operation.to_string(),
                cells,
            })
        })
        .collect();

    ComparisonTable {
        metric,
        clients,
        rows,
    }
}
