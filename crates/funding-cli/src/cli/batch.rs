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

//! Batch request command.

use super::DataOptions;
use crate::batch::BatchConfig;
use crate::commands;
use clap::Subcommand;

/// Batch processing commands.
///
/// The dataset is loaded once and every request runs against the same
/// in-memory store.
#[derive(Subcommand)]
pub enum BatchCommands {
    /// Run a file of report requests
    ///
    /// Each non-empty line is a JSON request, for example
    /// `{"lens":"company","startup":"Ola"}`. Lines starting with `#` are
    /// ignored. Requests run in parallel once their number reaches the
    /// threshold.
    Batch {
        /// File with one JSON request per line
        #[arg(value_name = "REQUESTS_FILE")]
        requests: String,

        /// Minimum number of requests before running in parallel
        #[arg(long, default_value_t = 10)]
        parallel_threshold: usize,

        /// Maximum worker threads (default: one per CPU)
        #[arg(long)]
        max_threads: Option<usize>,

        /// Print per-request progress to stderr
        #[arg(short, long)]
        verbose: bool,
    },
}

impl BatchCommands {
    pub fn execute(self, options: &DataOptions) -> Result<(), String> {
        match self {
            BatchCommands::Batch {
                requests,
                parallel_threshold,
                max_threads,
                verbose,
            } => {
                let config = BatchConfig {
                    parallel_threshold,
                    max_threads,
                    verbose,
                    ..Default::default()
                };
                commands::batch(options, &requests, config)
            }
        }
    }
}
