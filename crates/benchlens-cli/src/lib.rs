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

//! Benchlens CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **analyze**: render every view of a run as text, JSON, Markdown or HTML
//! - **charts**: write SVG charts and `report.txt`
//! - **convert**: rewrite a run between CSV and JSON
//!
//! # Examples
//!
//! ```no_run
//! use benchlens_cli::commands::{analyze, ReportFormat};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchlens_cli::error::CliError> {
//! // Print the console report for a results directory
//! analyze(Path::new("results/"), ReportFormat::Text, None)?;
//!
//! // Write an HTML report
//! analyze(
//!     Path::new("results/benchmark_results.csv"),
//!     ReportFormat::Html,
//!     Some(Path::new("report.html")),
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input files larger than `BENCHLENS_MAX_FILE_SIZE` bytes (default 1 GB)
//! are rejected before they are read.

pub mod cli;
pub mod commands;
pub mod error;
