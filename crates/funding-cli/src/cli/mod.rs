// Dweve Funding Lens - Startup Funding Analytics
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
//!
//! Commands are organized into the following modules:
//!
//! - [`report`]: The three lenses (company, investor, market)
//! - [`catalog`]: Dataset listings and diagnostics (startups, investors, summary)
//! - [`batch`]: Parallel execution of a file of report requests
//! - [`utility`]: Utility commands (completion)

mod batch;
mod catalog;
mod report;
mod utility;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub use batch::BatchCommands;
pub use catalog::CatalogCommands;
pub use report::ReportCommands;
pub use utility::UtilityCommands;

/// Default dataset path, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "startup_cleaned.csv";

/// Funding - startup funding analytics
///
/// Loads a cleaned startup funding table once and answers company, investor
/// and market questions about it.
///
/// # Examples
///
/// ```bash
/// # Funding history of one startup
/// funding --data startup_cleaned.csv company Ola
///
/// # Portfolio of an investor, as JSON
/// funding --format json investor "Sequoia Capital"
///
/// # Market overview with a monthly deal count
/// funding market --mode count
/// ```
#[derive(Parser)]
#[command(name = "funding")]
#[command(author, version, about = "Funding - startup funding analytics", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: DataOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colored headings
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Options shared by every command that reads the dataset.
#[derive(Args, Debug, Clone)]
pub struct DataOptions {
    /// Path to the cleaned funding CSV
    #[arg(long, global = true, env = "FUNDING_DATA", default_value = DEFAULT_DATA_FILE)]
    pub data: String,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// CSV field delimiter
    #[arg(long, global = true, default_value_t = ',')]
    pub delimiter: char,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_FILE.to_string(),
            format: OutputFormat::Text,
            delimiter: ',',
        }
    }
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Report (company, investor, market)
/// ├── Catalog (startups, investors, summary)
/// ├── Batch (batch)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Lens commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(flatten)]
    Batch(BatchCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command with the shared data options.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The dataset cannot be read or loaded
    /// - A report argument names something absent from the dataset
    /// - Any batch request fails
    pub fn execute(self, options: &DataOptions) -> Result<(), String> {
        match self {
            Commands::Report(cmd) => cmd.execute(options),
            Commands::Catalog(cmd) => cmd.execute(options),
            Commands::Batch(cmd) => cmd.execute(options),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
