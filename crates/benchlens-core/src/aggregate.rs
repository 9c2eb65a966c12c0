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

//! Grouping of records by (client, operation).
//!
//! [`Aggregation`] is a two-level ordered map built once per run and shared
//! by reference with every view. Keys enumerate in lexicographic order, so
//! reports are stable regardless of the order groups were populated in.
//! Arrival order is tracked per client for views that concatenate across
//! operations.

use crate::metric::Metric;
use crate::record::{Record, BYTES_PER_KIB};
use std::collections::{BTreeMap, BTreeSet};

/// Measurements collected for one (client, operation) pair.
///
/// `durations` and `memory_deltas` are parallel: index `i` of each belongs to
/// the `i`-th record of the pair, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    /// Latencies in milliseconds.
    pub durations: Vec<f64>,
    /// Allocation deltas in bytes (unmeasured deltas count as zero).
    pub memory_deltas: Vec<i64>,
    /// Number of successful records.
    pub successes: usize,
}

impl Group {
    /// Appends one record's measurements.
    pub fn push(&mut self, record: &Record) {
        self.durations.push(record.duration_ms);
        self.memory_deltas.push(record.mem_alloc_bytes());
        if record.success {
            self.successes += 1;
        }
    }

    /// Number of records observed.
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Returns whether no record has been observed.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Measurement list for `metric`, in input order.
    ///
    /// Memory deltas come back in kibibytes.
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        match metric {
            Metric::Duration => self.durations.clone(),
            Metric::Memory => self
                .memory_deltas
                .iter()
                .map(|&bytes| bytes as f64 / BYTES_PER_KIB)
                .collect(),
        }
    }
}

/// Order in which one client's operations and records arrived.
#[derive(Debug, Clone, Default, PartialEq)]
struct Arrivals {
    /// Operations by first appearance.
    operations: Vec<String>,
    /// `(position in operations, index within the group)` per inserted record.
    records: Vec<(usize, usize)>,
}

impl Arrivals {
    fn position(&mut self, operation: &str) -> usize {
        match self.operations.iter().position(|op| op == operation) {
            Some(pos) => pos,
            None => {
                self.operations.push(operation.to_string());
                self.operations.len() - 1
            }
        }
    }
}

/// Records grouped as client → operation → [`Group`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    groups: BTreeMap<String, BTreeMap<String, Group>>,
    arrivals: BTreeMap<String, Arrivals>,
    record_count: usize,
    has_memory: bool,
}

impl Aggregation {
    /// Creates an empty aggregation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups `records` in one pass. No record is dropped, whatever its
    /// outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchlens_core::{Aggregation, Record};
    ///
    /// let records = vec![
    ///     Record::new("A", "op1", 5.0),
    ///     Record::new("B", "op1", 3.0),
    ///     Record::new("A", "op1", 7.0),
    /// ];
    /// let agg = Aggregation::from_records(&records);
    /// assert_eq!(agg.group("A", "op1").unwrap().durations, vec![5.0, 7.0]);
    /// ```
    pub fn from_records(records: &[Record]) -> Self {
        let mut aggregation = Self::new();
        for record in records {
            aggregation.insert(record);
        }
        tracing::debug!(
            records = aggregation.record_count,
            clients = aggregation.groups.len(),
            "aggregated records"
        );
        aggregation
    }

    /// Appends one record to its group, creating the group on first use.
    pub fn insert(&mut self, record: &Record) {
        let group = self.group_entry(&record.client, &record.operation);
        let index = group.len();
        group.push(record);

        let arrivals = self.arrivals.entry(record.client.clone()).or_default();
        let position = arrivals.position(&record.operation);
        arrivals.records.push((position, index));

        self.record_count += 1;
        self.has_memory |= record.has_memory();
    }

    /// Returns the group for `(client, operation)`, inserting an empty one if
    /// the pair has not been seen yet.
    pub fn group_entry(&mut self, client: &str, operation: &str) -> &mut Group {
        self.arrivals
            .entry(client.to_string())
            .or_default()
            .position(operation);
        self.groups
            .entry(client.to_string())
            .or_default()
            .entry(operation.to_string())
            .or_default()
    }

    /// Looks up the group for `(client, operation)` without creating it.
    pub fn group(&self, client: &str, operation: &str) -> Option<&Group> {
        self.groups.get(client)?.get(operation)
    }

    /// Clients in lexicographic order.
    pub fn clients(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Union of operations across all clients, in lexicographic order.
    pub fn operations(&self) -> Vec<&str> {
        let operations: BTreeSet<&str> = self
            .groups
            .values()
            .flat_map(|ops| ops.keys().map(String::as_str))
            .collect();
        operations.into_iter().collect()
    }

    /// Operations recorded for one client, with their groups, in
    /// lexicographic order.
    pub fn operations_of(&self, client: &str) -> impl Iterator<Item = (&str, &Group)> {
        self.groups
            .get(client)
            .into_iter()
            .flat_map(|ops| ops.iter().map(|(op, group)| (op.as_str(), group)))
    }

    /// Operations recorded for one client, with their groups, in the order
    /// each operation first appeared.
    pub fn operations_by_arrival(&self, client: &str) -> impl Iterator<Item = (&str, &Group)> {
        let ops = self.groups.get(client);
        self.arrivals
            .get(client)
            .into_iter()
            .flat_map(|arrivals| arrivals.operations.iter())
            .filter_map(move |op| Some((op.as_str(), ops?.get(op)?)))
    }

    /// Records inserted for one client as `(operation, group, index)`, in
    /// input order. `index` addresses the record inside `group`.
    pub fn records_of(&self, client: &str) -> impl Iterator<Item = (&str, &Group, usize)> {
        let ops = self.groups.get(client);
        self.arrivals
            .get(client)
            .into_iter()
            .flat_map(move |arrivals| {
                arrivals.records.iter().filter_map(move |&(position, index)| {
                    let operation = arrivals.operations.get(position)?;
                    Some((operation.as_str(), ops?.get(operation)?, index))
                })
            })
    }

    /// Every group as `(client, operation, group)`, client-major, both keys
    /// lexicographic.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &Group)> {
        self.groups.iter().flat_map(|(client, ops)| {
            ops.iter()
                .map(move |(op, group)| (client.as_str(), op.as_str(), group))
        })
    }

    /// Number of records inserted.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Returns whether any inserted record carried a memory delta.
    pub fn has_memory(&self) -> bool {
        self.has_memory
    }

    /// Returns whether no group exists.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
