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

//! Success rate per (client, operation).

use crate::aggregate::Aggregation;
use serde::{Deserialize, Serialize};

/// Share of successful records for one (client, operation) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessRate {
    /// Client name.
    pub client: String,
    /// Operation name.
    pub operation: String,
    /// Records with `success == true`.
    pub successes: usize,
    /// All records observed for the pair.
    pub total: usize,
    /// `successes / total * 100`, in `[0, 100]`.
    pub rate_pct: f64,
}

impl SuccessRate {
    /// Number of failed records.
    pub fn failures(&self) -> usize {
        self.total - self.successes
    }
}

/// Computes success rates, client-major in lexicographic order.
///
/// Pairs with no observed records are omitted rather than reported as 0%.
pub fn success_rates(aggregation: &Aggregation) -> Vec<SuccessRate> {
    aggregation
        .iter()
        .filter(|(_, _, group)| !group.is_empty())
        .map(|(client, operation, group)| SuccessRate {
            client: client.to_string(),
            operation: operation.to_string(),
            successes: group.successes,
            total: group.len(),
            rate_pct: group.successes as f64 / group.len() as f64 * 100.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_two_of_three() {
        let records = vec![
            Record::new("json", "login", 1.0),
            Record::new("json", "login", 1.0).failed("denied"),
            Record::new("json", "login", 1.0),
        ];
        let rates = success_rates(&Aggregation::from_records(&records));

        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].successes, 2);
        assert_eq!(rates[0].total, 3);
        assert_eq!(rates[0].failures(), 1);
        assert!((rates[0].rate_pct - 200.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_record_pairs_are_omitted() {
        let mut agg = Aggregation::from_records(&[Record::new("json", "login", 1.0)]);
        agg.group_entry("proto", "login");

        let rates = success_rates(&agg);
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].client, "json");
        assert_eq!(rates[0].rate_pct, 100.0);
    }

    #[test]
    fn test_all_failed() {
        let records = vec![Record::new("proto", "upload", 1.0).failed("io")];
        let rates = success_rates(&Aggregation::from_records(&records));
        assert_eq!(rates[0].rate_pct, 0.0);
    }
}
