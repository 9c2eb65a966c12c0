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

//! Benchlens core: aggregation and statistics for benchmark run records.
//!
//! A run is a flat list of [`Record`]s, one per operation invocation, tagged
//! with the client implementation that performed it. The pipeline is:
//!
//! ```text
//! records → Aggregation → summarize (per group) → views → Analysis
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use benchlens_core::{Analysis, Record};
//!
//! let records = vec![
//!     Record::new("json", "login", 4.0),
//!     Record::new("json", "login", 6.0),
//!     Record::new("proto", "login", 2.0),
//!     Record::new("proto", "login", 3.0).failed("timeout"),
//! ];
//!
//! let analysis = Analysis::from_records(&records);
//!
//! // Fastest client first
//! let ranking = &analysis.duration.rankings[0];
//! assert_eq!(ranking.entries[0].client, "proto");
//!
//! // Failed records still count towards latency, but not success rate
//! let rate = analysis.success_rate("proto", "login").unwrap();
//! assert_eq!(rate.rate_pct, 50.0);
//! ```
//!
//! # Modules
//!
//! - [`record`]: the observation model
//! - [`aggregate`]: grouping by (client, operation)
//! - [`stats`]: descriptive statistics
//! - [`views`]: comparison, ranking, success-rate and summary views
//! - [`analysis`]: every view for one run

pub mod aggregate;
pub mod analysis;
pub mod metric;
pub mod record;
pub mod stats;
pub mod views;

pub use aggregate::{Aggregation, Group};
pub use analysis::{Analysis, MetricViews};
pub use metric::Metric;
pub use record::{Record, BYTES_PER_KIB};
pub use stats::{mean, summarize, Summary};
