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

//! JSON run files for benchmark records.
//!
//! A run file is the JSON document a benchmark producer writes next to its
//! CSV output: a timestamp, the configured iteration count and one result
//! object per operation invocation, with PascalCase field names.
//!
//! # Examples
//!
//! ```rust
//! use benchlens_json::from_json;
//!
//! let json = r#"{"results": [
//!     {"Client": "json", "Operation": "echo", "DurationMs": 1.5, "MemAllocDelta": 2048, "Success": true},
//!     {"Client": "proto", "Operation": "echo", "DurationMs": 0.5, "Success": false, "Error": "timeout"}
//! ]}"#;
//!
//! let records = from_json(json).unwrap().into_records().unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].mem_alloc_delta, Some(2048));
//! assert_eq!(records[1].error, "timeout");
//! ```

mod error;
mod from_json;
mod run_file;
mod to_json;

pub use error::{JsonError, Result};
pub use from_json::{from_json, from_json_reader};
pub use run_file::{RunFile, RunResult};
pub use to_json::{to_json, to_json_writer};
