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

//! Cross-group reductions over an [`Aggregation`](crate::Aggregation).
//!
//! Every view is a pure function of a shared aggregation reference and
//! pulls its statistics from [`summarize`](crate::summarize). Empty groups
//! never produce output.
//!
//! # Modules
//!
//! - `comparison`: operation × client table of means
//! - `ranking`: per-operation client rankings
//! - `success`: success rate per pair
//! - `summaries`: per-group and per-client summaries
//! - `points`: latency/memory pairs

pub mod comparison;
pub mod points;
pub mod ranking;
pub mod success;
pub mod summaries;

pub use comparison::{comparison_table, ComparisonRow, ComparisonTable};
pub use points::{time_vs_memory, ClientPoints, SamplePoint};
pub use ranking::{rank_label, rankings, RankEntry, Ranking};
pub use success::{success_rates, SuccessRate};
pub use summaries::{group_summaries, overall_summaries, ClientSummary, GroupSummary};
