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

//! Per-operation client rankings, fastest (smallest mean) first.

use crate::aggregate::Aggregation;
use crate::metric::Metric;
use crate::stats::summarize;
use serde::{Deserialize, Serialize};

/// Clients ranked for one operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    /// Operation name.
    pub operation: String,
    /// Quantity the ranking is based on.
    pub metric: Metric,
    /// Entries in rank order.
    pub entries: Vec<RankEntry>,
}

/// One client's position in a [`Ranking`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankEntry {
    /// 1-based position.
    pub rank: usize,
    /// Positional label ("1st", "2nd", ...).
    pub label: String,
    /// Client name.
    pub client: String,
    /// Mean of the client's group.
    pub mean: f64,
}

impl Ranking {
    /// The top-ranked client, if any.
    pub fn leader(&self) -> Option<&RankEntry> {
        self.entries.first()
    }
}

/// Positional label for a 1-based rank.
///
/// ```
/// use benchlens_core::views::rank_label;
///
/// assert_eq!(rank_label(1), "1st");
/// assert_eq!(rank_label(4), "4th");
/// assert_eq!(rank_label(12), "12th");
/// assert_eq!(rank_label(22), "22nd");
/// ```
pub fn rank_label(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", rank, suffix)
}

/// Ranks clients per operation by ascending mean of `metric`.
///
/// Candidates are collected in lexicographic client order and then stably
/// sorted, so equal means keep that order and still get distinct ranks.
/// Operations without any non-empty group produce no ranking.
pub fn rankings(aggregation: &Aggregation, metric: Metric) -> Vec<Ranking> {
    aggregation
        .operations()
        .into_iter()
        .filter_map(|operation| {
            let mut candidates: Vec<(&str, f64)> = aggregation
                .clients()
                .filter_map(|client| {
                    let group = aggregation.group(client, operation)?;
                    let summary = summarize(&group.values(metric))?;
                    Some((client, summary.mean))
                })
                .collect();

            if candidates.is_empty() {
                return None;
            }

            candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

            let entries = candidates
                .into_iter()
                .enumerate()
                .map(|(idx, (client, mean))| RankEntry {
                    rank: idx + 1,
                    label: rank_label(idx + 1),
                    client: client.to_string(),
                    mean,
                })
                .collect();

            Some(Ranking {
                operation: operation.to_string(),
                metric,
                entries,
            })
        })
        .collect()
}
