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

//! CSV ingestion and export for benchmark run records.
//!
//! Reads the delimited-text files benchmark producers write (one row per
//! operation invocation) into [`benchlens_core::Record`]s, and writes records
//! back in the producer's column layout.
//!
//! # Examples
//!
//! ## Reading a run
//!
//! ```
//! use benchlens_csv::from_csv;
//!
//! let csv_data = "\
//! Client,Operation,Iteration,DurationMs,MemAllocBefore,MemAllocAfter,MemAllocDelta,Success,Error
//! json,login,1,4.0000,1000,3048,2048,true,
//! proto,login,1,2.0000,1000,1512,512,false,timeout
//! ";
//!
//! let records = from_csv(csv_data).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].error, "timeout");
//! ```
//!
//! ## Round-trip
//!
//! ```
//! use benchlens_core::Record;
//! use benchlens_csv::{from_csv, to_csv};
//!
//! let records = vec![Record::new("json", "echo", 1.25).with_mem_alloc_delta(-64)];
//! let csv = to_csv(&records).unwrap();
//! assert_eq!(from_csv(&csv).unwrap(), records);
//! ```
//!
//! # Error handling
//!
//! Ingestion is all-or-nothing: the first malformed row aborts with a
//! [`CsvError`] naming the row and column.

mod error;
mod from_csv;
mod to_csv;

pub use error::{CsvError, Result};
pub use from_csv::{columns, from_csv, from_csv_with_config, from_reader, FromCsvConfig, DEFAULT_MAX_ROWS};
pub use to_csv::{to_csv, to_csv_writer, PRODUCER_COLUMNS};
