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

//! Shared test fixtures for benchlens crates.
//!
//! # Quick Start
//!
//! ```rust
//! use benchlens_test::fixtures;
//!
//! let records = fixtures::protocol_run();
//! assert_eq!(records.len(), 27);
//!
//! let csv_text = fixtures::protocol_run_csv();
//! assert!(csv_text.starts_with(fixtures::PRODUCER_HEADER));
//!
//! for (name, malformed) in fixtures::errors::malformed_csv_samples() {
//!     // feed `malformed` to an ingester and expect an error
//!     let _ = (name, malformed);
//! }
//! ```

/// Canonical runs and malformed samples.
pub mod fixtures;

pub use fixtures::{interleaved_groups, protocol_run, protocol_run_without_memory, tied_means};

/// Asserts two floats are within `1e-9` of each other.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} to be close to {}",
        actual,
        expected
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_run_shape() {
        let records = protocol_run();
        assert_eq!(records.len(), 27);
        assert_eq!(records.iter().filter(|r| !r.success).count(), 1);
        assert!(records.iter().all(|r| r.has_memory()));
    }

    #[test]
    fn test_csv_has_one_line_per_record() {
        let text = fixtures::protocol_run_csv();
        assert_eq!(text.lines().count(), 28);
        assert!(text.contains("string,logout,3,9.0000,10000,10000,0,false,connection reset"));
    }

    #[test]
    fn test_without_memory() {
        assert!(protocol_run_without_memory().iter().all(|r| !r.has_memory()));
    }
}
