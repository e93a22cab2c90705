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

//! Funding CLI library for command-line parsing and execution.
//!
//! The `funding` binary loads a cleaned startup funding CSV once and renders
//! reports over it as colored text or JSON.
//!
//! # Commands
//!
//! ## Lenses
//!
//! - **company**: Funding history of one startup
//! - **investor**: Portfolio, allocation and co-investors of one investor
//! - **market**: Totals, monthly timeline and top-10 rankings
//!
//! ## Catalog
//!
//! - **startups** / **investors**: Sorted distinct names in the dataset
//! - **summary**: Row counts and date range
//!
//! ## Batch Processing
//!
//! - **batch**: Run a file of JSON report requests in parallel
//!
//! ## Utilities
//!
//! - **completion**: Generate shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use funding_cli::cli::DataOptions;
//! use funding_cli::commands::{company, market};
//!
//! # fn main() -> Result<(), String> {
//! let options = DataOptions {
//!     data: "startup_cleaned.csv".to_string(),
//!     ..Default::default()
//! };
//! company(&options, "Ola")?;
//! market(&options, "count")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! The dataset and request files are size-checked before reading
//! (configurable via `FUNDING_MAX_FILE_SIZE`), and the CSV loader enforces a
//! row limit.
//!
//! # Error Handling
//!
//! All commands return `Result<(), String>`; internally they use
//! [`error::CliError`].

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod render;
