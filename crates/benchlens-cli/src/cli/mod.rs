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

//! CLI command definitions and argument parsing.

use crate::commands::{self, ReportFormat};
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use benchlens_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a benchmark run
    ///
    /// Prints comparison tables, rankings, overall summaries, success rates
    /// and per-pair details. Memory sections appear only when the run
    /// recorded allocations.
    Analyze {
        /// Run file (.csv or .json) or a directory containing benchmark_results.csv
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write SVG charts and report.txt
    Charts {
        /// Run file (.csv or .json) or a directory containing benchmark_results.csv
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory (defaults to the directory of the run)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a run between CSV and JSON
    ///
    /// The target format follows the output file extension.
    Convert {
        /// Run file (.csv or .json) or a directory containing benchmark_results.csv
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (.csv or .json)
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the run cannot be loaded, analyzed, or written.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Analyze {
                input,
                format,
                output,
            } => commands::analyze(&input, format, output.as_deref()),
            Commands::Charts { input, output } => {
                commands::charts(&input, output.as_deref()).map(|_| ())
            }
            Commands::Convert { input, output } => commands::convert(&input, &output),
        }
    }
}
