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

//! Section headings shared by the text renderers.

use benchlens_core::Metric;

pub(crate) fn comparison_title(metric: Metric) -> String {
    match metric {
        Metric::Duration => format!("Mean Execution Time Comparison ({})", metric.unit()),
        Metric::Memory => format!("Mean Memory Allocation Comparison ({})", metric.unit()),
    }
}

pub(crate) fn ranking_title(metric: Metric) -> &'static str {
    match metric {
        Metric::Duration => "Performance Ranking by Operation",
        Metric::Memory => "Memory Ranking by Operation",
    }
}

pub(crate) fn overall_title(metric: Metric) -> &'static str {
    match metric {
        Metric::Duration => "Summary Statistics",
        Metric::Memory => "Memory Summary Statistics",
    }
}

pub(crate) fn detail_title(metric: Metric) -> &'static str {
    match metric {
        Metric::Duration => "Detailed Analysis",
        Metric::Memory => "Detailed Memory Analysis",
    }
}

pub(crate) const SUCCESS_TITLE: &str = "Success Rate by Operation";
