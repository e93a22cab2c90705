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

//! Batch command - run a file of report requests against one loaded dataset

use super::{load_store, read_file, write_output};
use crate::batch::{parse_requests, BatchConfig, BatchProcessor, BatchResults};
use crate::cli::{DataOptions, OutputFormat};
use crate::error::CliError;
use crate::render::render_response;
use colored::Colorize;
use serde_json::json;
use tracing::info;

/// Run every request in `requests_path` and print the reports in file order.
///
/// JSON output is one object per line: `{"line": N, "report": {...}}` for a
/// success and `{"line": N, "error": "..."}` for a failure. Text output
/// prints each report under a header naming its line, followed by a summary
/// with the success count and elapsed time.
///
/// # Errors
///
/// Returns `Err` if the dataset or the request file cannot be read, or if
/// any request failed. Every request is still attempted and printed.
///
/// # Examples
///
/// ```no_run
/// use funding_cli::batch::BatchConfig;
/// use funding_cli::cli::DataOptions;
/// use funding_cli::commands::batch;
///
/// # fn main() -> Result<(), String> {
/// batch(&DataOptions::default(), "requests.jsonl", BatchConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub fn batch(options: &DataOptions, requests_path: &str, config: BatchConfig) -> Result<(), String> {
    run_batch(options, requests_path, config).map_err(|e| e.to_string())
}

fn run_batch(options: &DataOptions, requests_path: &str, config: BatchConfig) -> Result<(), CliError> {
    let store = load_store(options)?;
    let requests = parse_requests(&read_file(requests_path)?);
    let show_progress = config.verbose;

    let results = BatchProcessor::new(config).process(&store, &requests, show_progress)?;
    info!(
        total = results.total(),
        failed = results.failure_count(),
        elapsed_ms = results.elapsed_ms as u64,
        "batch finished"
    );
    write_output(&render_results(options.format, &results)?)?;

    if results.has_failures() {
        return Err(CliError::BatchFailed {
            failed: results.failure_count(),
            total: results.total(),
        });
    }
    Ok(())
}

fn render_results(format: OutputFormat, results: &BatchResults) -> Result<String, CliError> {
    let mut out = String::new();
    for entry in &results.results {
        match format {
            OutputFormat::Json => {
                let value = match &entry.result {
                    Ok(report) => json!({ "line": entry.line, "report": report }),
                    Err(e) => json!({ "line": entry.line, "error": e.to_string() }),
                };
                out.push_str(&serde_json::to_string(&value)?);
                out.push('\n');
            }
            OutputFormat::Text => match &entry.result {
                Ok(report) => {
                    out.push_str(&format!("{} {}\n", "Line".bold(), entry.line));
                    out.push_str(&render_response(report));
                    out.push('\n');
                }
                Err(e) => {
                    out.push_str(&format!("{} {} - {}\n\n", "✗".red().bold(), entry.line, e));
                }
            },
        }
    }
    if format == OutputFormat::Text {
        out.push_str(&format!(
            "{} of {} requests succeeded in {} ms\n",
            results.success_count(),
            results.total(),
            results.elapsed_ms
        ));
    }
    Ok(out)
}
