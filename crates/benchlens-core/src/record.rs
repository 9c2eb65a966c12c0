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

//! Benchmark record model.
//!
//! A [`Record`] is one observation: a single invocation of an operation by a
//! client implementation, with its latency, optional memory delta, and
//! outcome. Records are built once at ingestion and never mutated by the
//! engine.

use serde::{Deserialize, Serialize};

/// Number of bytes in one kibibyte.
pub const BYTES_PER_KIB: f64 = 1024.0;

/// One benchmark observation.
///
/// # Examples
///
/// ```
/// use benchlens_core::Record;
///
/// let ok = Record::new("proto", "encode", 1.25).with_mem_alloc_delta(2048);
/// assert!(ok.success);
/// assert_eq!(ok.mem_alloc_kib(), 2.0);
///
/// let failed = Record::new("json", "login", 3.5).failed("connection refused");
/// assert!(!failed.success);
/// assert_eq!(failed.error, "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Implementation under test (e.g. a protocol or codec variant).
    pub client: String,
    /// Benchmarked action.
    pub operation: String,
    /// Iteration index reported by the producer, if any.
    pub iteration: Option<u32>,
    /// Latency in milliseconds.
    pub duration_ms: f64,
    /// Allocated bytes before the invocation, if measured.
    pub mem_alloc_before: Option<u64>,
    /// Allocated bytes after the invocation, if measured.
    pub mem_alloc_after: Option<u64>,
    /// Allocation delta in bytes, if measured.
    pub mem_alloc_delta: Option<i64>,
    /// Whether the invocation succeeded.
    pub success: bool,
    /// Error message; empty when `success` is true.
    pub error: String,
}

impl Record {
    /// Creates a successful record with no memory measurement.
    pub fn new(client: impl Into<String>, operation: impl Into<String>, duration_ms: f64) -> Self {
        Self {
            client: client.into(),
            operation: operation.into(),
            iteration: None,
            duration_ms,
            mem_alloc_before: None,
            mem_alloc_after: None,
            mem_alloc_delta: None,
            success: true,
            error: String::new(),
        }
    }

    /// Sets the producer's iteration index.
    pub fn with_iteration(mut self, iteration: u32) -> Self {
        self.iteration = Some(iteration);
        self
    }

    /// Sets the allocation delta in bytes.
    pub fn with_mem_alloc_delta(mut self, delta: i64) -> Self {
        self.mem_alloc_delta = Some(delta);
        self
    }

    /// Sets the raw before/after allocation counters.
    pub fn with_mem_alloc_range(mut self, before: u64, after: u64) -> Self {
        self.mem_alloc_before = Some(before);
        self.mem_alloc_after = Some(after);
        self
    }

    /// Marks the record as failed with the given error message.
    pub fn failed(mut self, error: impl Into<String>) -> Self {
        self.success = false;
        self.error = error.into();
        self
    }

    /// Sets the outcome explicitly.
    pub fn with_outcome(mut self, success: bool, error: impl Into<String>) -> Self {
        self.success = success;
        self.error = error.into();
        self
    }

    /// Allocation delta in bytes, counting an unmeasured delta as zero.
    pub fn mem_alloc_bytes(&self) -> i64 {
        self.mem_alloc_delta.unwrap_or(0)
    }

    /// Allocation delta in kibibytes, counting an unmeasured delta as zero.
    pub fn mem_alloc_kib(&self) -> f64 {
        self.mem_alloc_bytes() as f64 / BYTES_PER_KIB
    }

    /// Returns whether a memory delta was recorded.
    pub fn has_memory(&self) -> bool {
        self.mem_alloc_delta.is_some()
    }
}
