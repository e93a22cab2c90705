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

//! Lens commands.

use super::DataOptions;
use crate::commands;
use clap::Subcommand;

/// The three report lenses.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Funding history of one startup
    ///
    /// Shows total funding, number of rounds, first and last funding year and
    /// every round, most recent first.
    Company {
        /// Startup name, matched exactly
        #[arg(value_name = "STARTUP")]
        startup: String,
    },

    /// Portfolio of one investor
    ///
    /// Shows recent and biggest investments, allocation by sector, stage and
    /// city, year-over-year totals and the investors that most often back the
    /// same startups.
    Investor {
        /// Investor name
        #[arg(value_name = "INVESTOR")]
        investor: String,

        /// Match the name anywhere in the investors column instead of
        /// against individual names
        #[arg(long)]
        substring: bool,
    },

    /// Market-wide overview
    Market {
        /// Monthly timeline measure (amount, count)
        #[arg(long, default_value = "amount")]
        mode: String,
    },
}

impl ReportCommands {
    /// Execute the lens command.
    pub fn execute(self, options: &DataOptions) -> Result<(), String> {
        match self {
            ReportCommands::Company { startup } => commands::company(options, &startup),
            ReportCommands::Investor {
                investor,
                substring,
            } => commands::investor(options, &investor, substring),
            ReportCommands::Market { mode } => commands::market(options, &mode),
        }
    }
}
