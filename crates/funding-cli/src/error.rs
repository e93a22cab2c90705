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

//! Structured error types for the funding CLI.
//!
//! Command handlers build `Result<T, CliError>` internally and convert to a
//! message string at the command boundary.

use funding_core::FundingError;
use funding_csv::CsvError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for funding CLI operations.
///
/// Implements `Clone` so batch results can be collected across threads.
///
/// # Examples
///
/// ```rust,no_run
/// use funding_cli::error::CliError;
///
/// fn open(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured maximum.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The funding dataset could not be loaded.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// A report argument names something the dataset does not contain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A line of a batch request file is not a valid request.
    #[error("Invalid request on line {line}: {message}")]
    InvalidRequest {
        /// 1-based line number in the request file
        line: usize,
        message: String,
    },

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// The batch worker pool could not be created.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Some requests of a batch failed.
    #[error("{failed} of {total} requests failed")]
    BatchFailed { failed: usize, total: usize },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use funding_cli::error::CliError;
    ///
    /// const MAX_SIZE: u64 = 100 * 1024 * 1024; // 100 MB
    /// let err = CliError::file_too_large("huge.csv", 200_000_000, MAX_SIZE);
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create an invalid request error for a batch line.
    pub fn invalid_request(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            line,
            message: message.into(),
        }
    }
}

impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        Self::Dataset(source.to_string())
    }
}

impl From<FundingError> for CliError {
    fn from(source: FundingError) -> Self {
        Self::InvalidArgument(source.message)
    }
}

// Automatic conversion from serde_json::Error
impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
