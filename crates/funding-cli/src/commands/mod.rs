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

//! CLI command implementations

mod batch_commands;
mod catalog;
mod completion;
mod report;

pub use batch_commands::batch;
pub use catalog::{investors, startups, summary};
pub use completion::{generate_completion_for_command, print_installation_instructions};
pub use report::{company, investor, market};

use crate::cli::{DataOptions, OutputFormat};
use crate::error::CliError;
use funding_core::RecordStore;
use funding_csv::{from_csv_with_config, FromCsvConfig};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use tracing::info;

/// Default maximum file size to prevent OOM attacks (1 GB)
/// Can be overridden via FUNDING_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "FUNDING_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before any byte is
/// read. The maximum defaults to 1 GB and can be changed with the
/// `FUNDING_MAX_FILE_SIZE` environment variable.
///
/// # Examples
///
/// ```no_run
/// use funding_cli::commands::read_file;
///
/// # fn main() -> Result<(), funding_cli::error::CliError> {
/// let content = read_file("startup_cleaned.csv")?;
/// assert!(content.starts_with("date,"));
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Loads the funding dataset named by the data options.
pub fn load_store(options: &DataOptions) -> Result<RecordStore, CliError> {
    let content = read_file(&options.data)?;
    let delimiter = u8::try_from(options.delimiter).map_err(|_| {
        CliError::InvalidArgument(format!(
            "delimiter '{}' must be a single-byte character",
            options.delimiter
        ))
    })?;

    let config = FromCsvConfig {
        delimiter,
        ..Default::default()
    };
    let store = from_csv_with_config(&content, config)?;
    info!(path = %options.data, rows = store.len(), "loaded funding dataset");
    Ok(store)
}

/// Write content to stdout.
pub fn write_output(content: &str) -> Result<(), CliError> {
    io::stdout()
        .write_all(content.as_bytes())
        .map_err(|e| CliError::io_error("<stdout>", e))
}

/// Writes `value` as JSON or as the text produced by `text`.
fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<(), CliError> {
    let mut rendered = match format {
        OutputFormat::Json => crate::render::to_json(value)?,
        OutputFormat::Text => text(value),
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    write_output(&rendered)
}
