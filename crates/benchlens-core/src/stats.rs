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

//! Descriptive statistics over a measurement list.
//!
//! This is the single statistics routine every view goes through.
//!
//! # Conventions
//!
//! - Standard deviation is the sample deviation (divides by `n - 1`), and is
//!   exactly `0.0` for a single measurement.
//! - Quartiles use a nearest-rank index rule on the ascending sort:
//!   `q1 = sorted[n / 4]`, `q3 = sorted[3 * n / 4]`. There is no
//!   interpolation.
//! - Values are not validated. Negative or non-finite measurements flow
//!   through the arithmetic unchanged.

use serde::{Deserialize, Serialize};

/// Statistical summary of a non-empty measurement list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of measurements.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median.
    pub median: f64,
    /// Sample standard deviation.
    pub stdev: f64,
    /// Smallest measurement.
    pub min: f64,
    /// Largest measurement.
    pub max: f64,
    /// First quartile (nearest rank).
    pub q1: f64,
    /// Third quartile (nearest rank).
    pub q3: f64,
    /// Interquartile range, `q3 - q1`.
    pub iqr: f64,
}

/// Computes the summary of `values`.
///
/// Returns `None` for an empty list; callers skip such groups instead of
/// rendering zeros.
///
/// # Examples
///
/// ```
/// use benchlens_core::summarize;
///
/// let summary = summarize(&[10.0, 20.0, 30.0, 40.0]).unwrap();
/// assert_eq!(summary.median, 25.0);
/// assert_eq!(summary.q1, 20.0);
/// assert_eq!(summary.q3, 40.0);
/// assert_eq!(summary.iqr, 20.0);
///
/// assert!(summarize(&[]).is_none());
/// ```
pub fn summarize(values: &[f64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let mut sorted = values.to_vec();
    // `total_cmp` keeps the sort total (and stable) even if a NaN slipped in.
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mean = mean(values);
    let q1 = sorted[count / 4];
    let q3 = sorted[3 * count / 4];

    Some(Summary {
        count,
        mean,
        median: median_of_sorted(&sorted),
        stdev: sample_stdev(values, mean),
        min: sorted[0],
        max: sorted[count - 1],
        q1,
        q3,
        iqr: q3 - q1,
    })
}

/// Arithmetic mean; `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn sample_stdev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();

    (sum_sq / (values.len() - 1) as f64).sqrt()
}
