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

//! Error types for JSON run files.

use thiserror::Error;

/// Errors raised while reading or writing run files.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Malformed JSON or a field with the wrong shape.
    ///
    /// Includes absent required fields such as `results` or `DurationMs`.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required string field is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchlens_json::JsonError;
    ///
    /// let err = JsonError::MissingField { index: 2, field: "Client".to_string() };
    /// assert_eq!(err.to_string(), "Missing value for required field 'Client' in result 2");
    /// ```
    #[error("Missing value for required field '{field}' in result {index}")]
    MissingField {
        /// Position in `results` (1-based).
        index: usize,
        /// Field name as written in the run file.
        field: String,
    },

    /// I/O error while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result` with `JsonError`.
pub type Result<T> = std::result::Result<T, JsonError>;
