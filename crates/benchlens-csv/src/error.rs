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

//! Error types for CSV ingestion and export.

use thiserror::Error;

/// CSV ingestion error types.
///
/// Every variant aborts ingestion; no row is ever skipped silently.
///
/// # Examples
///
/// ```
/// use benchlens_csv::CsvError;
///
/// let err = CsvError::TypeMismatch {
///     row: 3,
///     column: "DurationMs".to_string(),
///     expected: "number".to_string(),
///     value: "fast".to_string(),
/// };
///
/// assert_eq!(
///     err.to_string(),
///     "Type mismatch in column 'DurationMs' at row 3: expected number, got 'fast'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV parsing error at a specific line.
    ///
    /// Raised for structural problems such as rows with the wrong number of
    /// fields.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: usize,
        /// Detailed error message.
        message: String,
    },

    /// A required column is absent from the header.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchlens_csv::CsvError;
    ///
    /// let err = CsvError::MissingColumn("DurationMs".to_string());
    /// assert_eq!(err.to_string(), "Missing required column: DurationMs");
    /// ```
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A required field is empty.
    #[error("Missing value for required column '{column}' at row {row}")]
    MissingField {
        /// Data row number (1-based, header excluded).
        row: usize,
        /// Column name.
        column: String,
    },

    /// A field could not be converted to the column's type.
    #[error("Type mismatch in column '{column}' at row {row}: expected {expected}, got '{value}'")]
    TypeMismatch {
        /// Data row number (1-based, header excluded).
        row: usize,
        /// Column name where the mismatch occurred.
        column: String,
        /// Expected type description.
        expected: String,
        /// Actual value that failed to convert.
        value: String,
    },

    /// Row count exceeded security limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchlens_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit {
    ///     limit: 1_000_000,
    ///     actual: 1_000_001,
    /// };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Actual row count encountered.
        actual: usize,
    },

    /// I/O error during CSV reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),

    /// Invalid UTF-8 in CSV output.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Context where the invalid UTF-8 was encountered.
        context: String,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;
