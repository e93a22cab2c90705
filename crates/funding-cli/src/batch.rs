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

//! Batch execution of report requests.
//!
//! A request file holds one JSON [`ReportRequest`] per line. The dataset is
//! loaded once and every request runs against the same shared
//! [`RecordStore`], serially for small batches and on a rayon pool for
//! larger ones. Failures are collected per request and never stop the batch.
//!
//! # Examples
//!
//! ```rust
//! use funding_cli::batch::{parse_requests, BatchConfig, BatchProcessor};
//! use funding_core::{FundingRecord, RecordStore};
//!
//! let store = RecordStore::from_records(vec![
//!     FundingRecord::builder("Ola").investors("SoftBank").amount(3.0).build(),
//! ]);
//! let requests = parse_requests(
//!     r#"{"lens":"company","startup":"Ola"}
//! {"lens":"company","startup":"Nobody"}"#,
//! );
//!
//! let processor = BatchProcessor::new(BatchConfig::default());
//! let results = processor.process(&store, &requests, false).unwrap();
//! assert_eq!(results.success_count(), 1);
//! assert_eq!(results.failure_count(), 1);
//! ```

use crate::error::CliError;
use colored::Colorize;
use funding_core::RecordStore;
use funding_report::{dispatch, ReportRequest, ReportResponse};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

/// Configuration for batch processing.
///
/// # Examples
///
/// ```rust
/// use funding_cli::batch::BatchConfig;
///
/// let config = BatchConfig {
///     parallel_threshold: 5,
///     max_threads: Some(4),
///     ..Default::default()
/// };
/// assert_eq!(config.progress_interval, 1);
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Minimum number of requests to trigger parallel processing.
    ///
    /// Default: 10
    pub parallel_threshold: usize,

    /// Maximum number of threads for parallel processing.
    ///
    /// None means use Rayon's default (typically number of CPU cores).
    pub max_threads: Option<usize>,

    /// Number of requests between progress updates. Set to 0 to disable.
    ///
    /// Default: 1
    pub progress_interval: usize,

    /// Show line numbers and status for each request.
    pub verbose: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 10,
            max_threads: None,
            progress_interval: 1,
            verbose: false,
        }
    }
}

/// One line of a request file, parsed or not.
#[derive(Debug, Clone)]
pub struct RequestLine {
    /// 1-based line number in the request file
    pub line: usize,
    pub request: Result<ReportRequest, CliError>,
}

/// Outcome of a single request.
#[derive(Debug, Clone)]
pub struct RequestResult {
    pub line: usize,
    pub result: Result<ReportResponse, CliError>,
}

impl RequestResult {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Aggregated results of a batch run, in request file order.
#[derive(Debug, Clone)]
pub struct BatchResults {
    pub results: Vec<RequestResult>,
    pub elapsed_ms: u128,
}

impl BatchResults {
    pub fn new(results: Vec<RequestResult>, elapsed_ms: u128) -> Self {
        Self {
            results,
            elapsed_ms,
        }
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &RequestResult> {
        self.results.iter().filter(|r| r.is_failure())
    }
}

/// Splits request file content into numbered request lines.
///
/// Blank lines and lines starting with `#` are skipped; the remaining lines
/// keep their original 1-based line number.
pub fn parse_requests(content: &str) -> Vec<RequestLine> {
    content
        .lines()
        .enumerate()
        .filter(|(_, text)| {
            let text = text.trim();
            !text.is_empty() && !text.starts_with('#')
        })
        .map(|(index, text)| {
            let line = index + 1;
            let request = serde_json::from_str::<ReportRequest>(text.trim())
                .map_err(|e| CliError::invalid_request(line, e.to_string()));
            RequestLine { line, request }
        })
        .collect()
}

/// Progress tracker for batch operations.
///
/// Uses atomic counters for lock-free concurrent progress tracking.
#[derive(Debug)]
struct ProgressTracker {
    total: usize,
    processed: AtomicUsize,
    succeeded: AtomicUsize,
    failed: AtomicUsize,
    interval: usize,
    verbose: bool,
    start_time: Instant,
}

impl ProgressTracker {
    fn new(total: usize, interval: usize, verbose: bool) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            succeeded: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            interval,
            verbose,
            start_time: Instant::now(),
        }
    }

    fn record(&self, result: &RequestResult) {
        let processed = self.processed.fetch_add(1, Ordering::Relaxed) + 1;
        match &result.result {
            Ok(_) => {
                self.succeeded.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                if self.verbose {
                    eprintln!("{} line {} - {}", "✗".red().bold(), result.line, e);
                }
            }
        }

        if self.interval > 0 && (processed % self.interval == 0 || processed == self.total) {
            self.report_progress(result);
        }
    }

    fn report_progress(&self, current: &RequestResult) {
        let processed = self.processed.load(Ordering::Relaxed);
        let succeeded = self.succeeded.load(Ordering::Relaxed);
        let failed = self.failed.load(Ordering::Relaxed);

        if self.verbose {
            let status = if current.is_success() {
                "✓".green().bold()
            } else {
                "✗".red().bold()
            };
            eprintln!(
                "{} [{}/{}] line {}",
                status, processed, self.total, current.line
            );
        } else {
            eprintln!(
                "Progress: [{}/{}] {} succeeded, {} failed",
                processed, self.total, succeeded, failed
            );
        }
    }

    fn print_summary(&self) {
        let processed = self.processed.load(Ordering::Relaxed);
        let elapsed = self.start_time.elapsed();

        eprintln!("{}", "═".repeat(60).bright_blue());
        eprintln!(
            "  {} {}",
            "Requests:".bright_cyan(),
            processed.to_string().bright_white()
        );
        eprintln!(
            "  {} {}",
            "Succeeded:".green().bold(),
            self.succeeded.load(Ordering::Relaxed).to_string().bright_white()
        );
        eprintln!(
            "  {} {}",
            "Failed:".red().bold(),
            self.failed.load(Ordering::Relaxed).to_string().bright_white()
        );
        eprintln!("  {} {:.2}s", "Elapsed:".bright_cyan(), elapsed.as_secs_f64());
        eprintln!("{}", "═".repeat(60).bright_blue());
    }
}

/// Runs report requests against a shared store.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    /// Runs every request and collects the outcomes in input order.
    ///
    /// A request fails when its line did not parse or when it names a
    /// startup or investor missing from `store`.
    ///
    /// # Errors
    ///
    /// Only fails when the worker pool cannot be created.
    pub fn process(
        &self,
        store: &RecordStore,
        requests: &[RequestLine],
        show_progress: bool,
    ) -> Result<BatchResults, CliError> {
        let start_time = Instant::now();

        if requests.is_empty() {
            return Ok(BatchResults::new(vec![], 0));
        }

        let tracker = show_progress.then(|| {
            ProgressTracker::new(
                requests.len(),
                self.config.progress_interval,
                self.config.verbose,
            )
        });

        let run = |line: &RequestLine| {
            let result = RequestResult {
                line: line.line,
                result: execute_request(store, line),
            };
            if let Some(t) = &tracker {
                t.record(&result);
            }
            result
        };

        let results: Vec<RequestResult> = if requests.len() < self.config.parallel_threshold {
            debug!(requests = requests.len(), "running batch serially");
            requests.iter().map(run).collect()
        } else {
            debug!(
                requests = requests.len(),
                threads = ?self.config.max_threads,
                "running batch in parallel"
            );
            match self.config.max_threads {
                Some(threads) => {
                    let pool = rayon::ThreadPoolBuilder::new()
                        .num_threads(threads)
                        .build()
                        .map_err(|e| CliError::ThreadPool(e.to_string()))?;
                    pool.install(|| requests.par_iter().map(run).collect::<Vec<_>>())
                }
                None => requests.par_iter().map(run).collect(),
            }
        };

        if let Some(tracker) = tracker {
            tracker.print_summary();
        }

        Ok(BatchResults::new(results, start_time.elapsed().as_millis()))
    }
}

fn execute_request(store: &RecordStore, line: &RequestLine) -> Result<ReportResponse, CliError> {
    let request = line.request.clone()?;
    if let Err(e) = request.validate(store) {
        warn!(line = line.line, lens = %request.lens(), "{}", e.message);
        return Err(CliError::invalid_request(line.line, e.message));
    }
    Ok(dispatch(store, &request))
}
