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

//! Catalog commands - startup and investor listings, dataset summary

use super::{emit, load_store, write_output};
use crate::cli::{DataOptions, OutputFormat};
use crate::error::CliError;
use crate::render::{render_summary, to_json};

/// Print every distinct startup, one per line.
pub fn startups(options: &DataOptions) -> Result<(), String> {
    run_listing(options, |store| {
        store
            .distinct_startups()
            .into_iter()
            .map(str::to_string)
            .collect()
    })
    .map_err(|e| e.to_string())
}

/// Print every distinct trimmed investor name, one per line.
pub fn investors(options: &DataOptions) -> Result<(), String> {
    run_listing(options, |store| {
        store
            .distinct_investors()
            .into_iter()
            .map(str::to_string)
            .collect()
    })
    .map_err(|e| e.to_string())
}

fn run_listing(
    options: &DataOptions,
    names: impl FnOnce(&funding_core::RecordStore) -> Vec<String>,
) -> Result<(), CliError> {
    let store = load_store(options)?;
    let names = names(&store);
    let output = match options.format {
        OutputFormat::Json => format!("{}\n", to_json(&names)?),
        OutputFormat::Text => names.iter().map(|n| format!("{}\n", n)).collect(),
    };
    write_output(&output)
}

/// Print row counts and the date range of the dataset.
pub fn summary(options: &DataOptions) -> Result<(), String> {
    run_summary(options).map_err(|e| e.to_string())
}

fn run_summary(options: &DataOptions) -> Result<(), CliError> {
    let store = load_store(options)?;
    let summary = store.summary();
    emit(options.format, &summary, |s| render_summary(&options.data, s))
}
