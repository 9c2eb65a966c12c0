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

//! Full analysis of one run.
//!
//! [`Analysis`] bundles every view renderers need. Independent views are
//! computed with `rayon::join`; each one is a pure function of the shared
//! aggregation, so scheduling never changes the output.

use crate::aggregate::Aggregation;
use crate::metric::Metric;
use crate::record::Record;
use crate::views::{
    comparison_table, group_summaries, overall_summaries, rankings, success_rates,
    time_vs_memory, ClientPoints, ClientSummary, ComparisonTable, GroupSummary, Ranking,
    SuccessRate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Views derived from a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricViews {
    /// Quantity every view below reduces.
    pub metric: Metric,
    /// Operation × client means.
    pub comparison: ComparisonTable,
    /// Per-operation rankings.
    pub rankings: Vec<Ranking>,
    /// Per-group summaries.
    pub groups: Vec<GroupSummary>,
    /// Per-client summaries over all operations.
    pub overall: Vec<ClientSummary>,
}

impl MetricViews {
    /// Computes every view for `metric`.
    pub fn build(aggregation: &Aggregation, metric: Metric) -> Self {
        let ((comparison, rankings), (groups, overall)) = rayon::join(
            || {
                rayon::join(
                    || comparison_table(aggregation, metric),
                    || rankings(aggregation, metric),
                )
            },
            || {
                rayon::join(
                    || group_summaries(aggregation, metric),
                    || overall_summaries(aggregation, metric),
                )
            },
        );

        Self {
            metric,
            comparison,
            rankings,
            groups,
            overall,
        }
    }

    /// Summary for one group, if it exists and is non-empty.
    pub fn group(&self, client: &str, operation: &str) -> Option<&GroupSummary> {
        self.groups
            .iter()
            .find(|g| g.client == client && g.operation == operation)
    }
}

/// Every derived view of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Number of records analyzed.
    pub record_count: usize,
    /// Clients with at least one record, lexicographic.
    pub clients: Vec<String>,
    /// Operations with at least one record, lexicographic.
    pub operations: Vec<String>,
    /// Whether any record carried a memory delta.
    pub has_memory: bool,
    /// Latency views.
    pub duration: MetricViews,
    /// Memory views; present only when `has_memory` is true.
    pub memory: Option<MetricViews>,
    /// Success rate per pair.
    pub success_rates: Vec<SuccessRate>,
    /// Latency/memory pairs; empty when `has_memory` is false.
    pub time_vs_memory: Vec<ClientPoints>,
}

impl Analysis {
    /// Aggregates `records` and derives every view.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchlens_core::{Analysis, Record};
    ///
    /// let records = vec![
    ///     Record::new("json", "login", 4.0),
    ///     Record::new("proto", "login", 2.0),
    /// ];
    /// let analysis = Analysis::from_records(&records);
    /// assert_eq!(analysis.duration.rankings[0].entries[0].client, "proto");
    /// assert!(analysis.memory.is_none());
    /// ```
    pub fn from_records(records: &[Record]) -> Self {
        Self::from_aggregation(&Aggregation::from_records(records))
    }

    /// Derives every view from an existing aggregation.
    pub fn from_aggregation(aggregation: &Aggregation) -> Self {
        let has_memory = aggregation.has_memory();

        let ((duration, memory), (success_rates, time_vs_memory)) = rayon::join(
            || {
                rayon::join(
                    || MetricViews::build(aggregation, Metric::Duration),
                    || has_memory.then(|| MetricViews::build(aggregation, Metric::Memory)),
                )
            },
            || {
                rayon::join(
                    || success_rates(aggregation),
                    || {
                        if has_memory {
                            time_vs_memory(aggregation)
                        } else {
                            Vec::new()
                        }
                    },
                )
            },
        );

        let clients: Vec<String> = aggregation
            .iter()
            .filter(|(_, _, group)| !group.is_empty())
            .map(|(client, _, _)| client.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let operations: Vec<String> = aggregation
            .iter()
            .filter(|(_, _, group)| !group.is_empty())
            .map(|(_, operation, _)| operation.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        tracing::debug!(
            records = aggregation.record_count(),
            clients = clients.len(),
            operations = operations.len(),
            has_memory,
            "analysis complete"
        );

        Self {
            record_count: aggregation.record_count(),
            clients,
            operations,
            has_memory,
            duration,
            memory,
            success_rates,
            time_vs_memory,
        }
    }

    /// Views for `metric`, if computed.
    pub fn views(&self, metric: Metric) -> Option<&MetricViews> {
        match metric {
            Metric::Duration => Some(&self.duration),
            Metric::Memory => self.memory.as_ref(),
        }
    }

    /// Success rate for one pair.
    pub fn success_rate(&self, client: &str, operation: &str) -> Option<&SuccessRate> {
        self.success_rates
            .iter()
            .find(|r| r.client == client && r.operation == operation)
    }

    /// Returns whether the run had no records.
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
