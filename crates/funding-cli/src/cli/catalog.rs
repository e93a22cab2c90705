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

//! Dataset listing and diagnostics commands.

use super::DataOptions;
use crate::commands;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List every startup in the dataset, sorted
    Startups,

    /// List every investor in the dataset, sorted
    Investors,

    /// Show row counts and the date range of the dataset
    Summary,
}

impl CatalogCommands {
    pub fn execute(self, options: &DataOptions) -> Result<(), String> {
        match self {
            CatalogCommands::Startups => commands::startups(options),
            CatalogCommands::Investors => commands::investors(options),
            CatalogCommands::Summary => commands::summary(options),
        }
    }
}
