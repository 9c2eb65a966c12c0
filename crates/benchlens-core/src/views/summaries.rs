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

//! Per-group and per-client statistical summaries.

use crate::aggregate::Aggregation;
use crate::metric::Metric;
use crate::stats::{summarize, Summary};
use serde::{Deserialize, Serialize};

/// Summary of one (client, operation) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Client name.
    pub client: String,
    /// Operation name.
    pub operation: String,
    /// Statistics over the group's measurements.
    pub summary: Summary,
}

/// Summary over every measurement of one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSummary {
    /// Client name.
    pub client: String,
    /// Statistics over the client's combined measurements.
    pub summary: Summary,
}

/// Summarizes every non-empty group, client-major.
pub fn group_summaries(aggregation: &Aggregation, metric: Metric) -> Vec<GroupSummary> {
    aggregation
        .iter()
        .filter_map(|(client, operation, group)| {
            summarize(&group.values(metric)).map(|summary| GroupSummary {
                client: client.to_string(),
                operation: operation.to_string(),
                summary,
            })
        })
        .collect()
}

/// Summarizes each client over the union of its operations.
///
/// The measurement lists are concatenated (operations in the order they
/// first appeared, each list in input order) and summarized once. This is
/// not an average of per-operation means.
pub fn overall_summaries(aggregation: &Aggregation, metric: Metric) -> Vec<ClientSummary> {
    aggregation
        .clients()
        .filter_map(|client| {
            let combined: Vec<f64> = aggregation
                .operations_by_arrival(client)
                .flat_map(|(_, group)| group.values(metric))
                .collect();

            summarize(&combined).map(|summary| ClientSummary {
                client: client.to_string(),
                summary,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_group_summaries() {
        let records = vec![
            Record::new("A", "op1", 5.0),
            Record::new("B", "op1", 3.0),
            Record::new("A", "op1", 7.0),
        ];
        let summaries = group_summaries(&Aggregation::from_records(&records), Metric::Duration);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].client, "A");
        assert_eq!(summaries[0].summary.count, 2);
        assert_eq!(summaries[0].summary.mean, 6.0);
        assert_eq!(summaries[1].client, "B");
        assert_eq!(summaries[1].summary.stdev, 0.0);
    }

    #[test]
    fn test_overall_is_not_mean_of_means() {
        // op_a mean = 1.0 (one sample), op_b mean = 10.0 (three samples).
        // Mean of means would be 5.5; the union mean is 31 / 4.
        let records = vec![
            Record::new("A", "op_a", 1.0),
            Record::new("A", "op_b", 10.0),
            Record::new("A", "op_b", 10.0),
            Record::new("A", "op_b", 10.0),
        ];
        let overall = overall_summaries(&Aggregation::from_records(&records), Metric::Duration);

        assert_eq!(overall.len(), 1);
        assert_eq!(overall[0].summary.count, 4);
        assert_eq!(overall[0].summary.mean, 31.0 / 4.0);
        assert_eq!(overall[0].summary.min, 1.0);
        assert_eq!(overall[0].summary.max, 10.0);
    }

    #[test]
    fn test_overall_concatenates_in_arrival_order() {
        // Summing b, c, a keeps the 1.0; summing a, b, c absorbs it into 1e16.
        let records = vec![
            Record::new("A", "b", 1e16),
            Record::new("A", "c", -1e16),
            Record::new("A", "a", 1.0),
        ];
        let overall = overall_summaries(&Aggregation::from_records(&records), Metric::Duration);

        let expected = summarize(&[1e16, -1e16, 1.0]).unwrap();
        assert_eq!(overall[0].summary, expected);
        assert_eq!(overall[0].summary.mean, 1.0 / 3.0);
    }

    #[test]
    fn test_empty_groups_skipped() {
        let mut agg = Aggregation::new();
        agg.group_entry("ghost", "op");

        assert!(group_summaries(&agg, Metric::Duration).is_empty());
        assert!(overall_summaries(&agg, Metric::Duration).is_empty());
    }
}
