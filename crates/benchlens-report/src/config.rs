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

//! Report configuration.

use chrono::{DateTime, Utc};

/// Default number of decimals for measurements.
pub const DEFAULT_PRECISION: usize = 4;

/// Options shared by every renderer.
///
/// # Examples
///
/// ```
/// use benchlens_report::ReportConfig;
///
/// let config = ReportConfig::builder()
///     .title("Protocol Benchmark")
///     .precision(2)
///     .build();
///
/// assert_eq!(config.title, "Protocol Benchmark");
/// assert!(config.uppercase_labels);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Report heading (default: "Benchmark Report").
    pub title: String,
    /// Decimals for latency and memory values (default: 4).
    pub precision: usize,
    /// Print client and operation names in upper case (default: true).
    pub uppercase_labels: bool,
    /// Generation time shown in report headers; omitted when `None`.
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Benchmark Report".to_string(),
            precision: DEFAULT_PRECISION,
            uppercase_labels: true,
            generated_at: None,
        }
    }
}

impl ReportConfig {
    /// Create a new builder for ReportConfig
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }

    /// Formats a client or operation name for display.
    pub fn label(&self, name: &str) -> String {
        if self.uppercase_labels {
            name.to_uppercase()
        } else {
            name.to_string()
        }
    }

    /// Formats a measurement with the configured precision.
    pub fn value(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }

    /// Formats a comparison cell; missing cells read `N/A`.
    pub fn cell(&self, value: Option<f64>) -> String {
        value
            .map(|v| self.value(v))
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// Generation time as RFC 3339, if set.
    pub fn timestamp(&self) -> Option<String> {
        self.generated_at.map(|ts| ts.to_rfc3339())
    }
}

/// Builder for ReportConfig
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    /// Set the report title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the number of decimals
    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    /// Print names as given or upper-cased
    pub fn uppercase_labels(mut self, uppercase: bool) -> Self {
        self.config.uppercase_labels = uppercase;
        self
    }

    /// Stamp reports with a generation time
    pub fn generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.config.generated_at = Some(generated_at);
        self
    }

    /// Build the ReportConfig
    pub fn build(self) -> ReportConfig {
        self.config
    }
}
