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

//! Report renderers for benchmark analyses.
//!
//! Every renderer consumes a finished [`benchlens_core::Analysis`] and never
//! touches raw records, so all outputs of one run agree with each other.
//!
//! # Modules
//!
//! - `console`: full terminal report
//! - `text`: per-client summary table (`report.txt`)
//! - `markdown`: Markdown export
//! - `json`: JSON export
//! - `html`: HTML export with inline charts
//! - [`charts`]: SVG charts
//!
//! # Examples
//!
//! ```rust
//! use benchlens_core::{Analysis, Record};
//! use benchlens_report::{render_charts, render_markdown, ReportConfig};
//!
//! let analysis = Analysis::from_records(&[
//!     Record::new("json", "login", 4.0),
//!     Record::new("proto", "login", 2.0),
//! ]);
//! let config = ReportConfig::builder().title("Login latency").build();
//!
//! let md = render_markdown(&analysis, &config);
//! assert!(md.starts_with("# Login latency"));
//!
//! let charts = render_charts(&analysis, &config).unwrap();
//! assert_eq!(charts.len(), 4);
//! ```

pub mod charts;
mod config;
mod console;
mod html;
mod json;
mod markdown;
mod sections;
mod text;

pub use charts::{render_charts, write_charts, Chart};
pub use config::{ReportConfig, ReportConfigBuilder, DEFAULT_PRECISION};
pub use console::{print_analysis, render_analysis};
pub use html::{export_html, render_html};
pub use json::{export_json, render_json};
pub use markdown::{export_markdown, render_markdown};
pub use text::{export_text, render_text_report, REPORT_FILE};
