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

//! Lens commands - company, investor and market reports

use super::{emit, load_store};
use crate::cli::DataOptions;
use crate::error::CliError;
use crate::render::{render_company, render_investor, render_market};
use funding_report::{
    company_report, investor_report_with, market_report, InvestorMatch, MonthlyMode,
    ReportLimits, ReportRequest,
};

/// Print the funding history of one startup.
///
/// # Errors
///
/// Returns `Err` if the dataset cannot be loaded or the startup does not
/// appear in it.
pub fn company(options: &DataOptions, startup: &str) -> Result<(), String> {
    run_company(options, startup).map_err(|e| e.to_string())
}

fn run_company(options: &DataOptions, startup: &str) -> Result<(), CliError> {
    let store = load_store(options)?;
    ReportRequest::Company {
        startup: startup.to_string(),
    }
    .validate(&store)?;

    let report = company_report(&store, startup);
    emit(options.format, &report, render_company)
}

/// Print the portfolio of one investor.
///
/// With `substring` the name is matched anywhere in the raw investors
/// column, otherwise against individual trimmed names.
pub fn investor(options: &DataOptions, investor: &str, substring: bool) -> Result<(), String> {
    run_investor(options, investor, substring).map_err(|e| e.to_string())
}

fn run_investor(options: &DataOptions, investor: &str, substring: bool) -> Result<(), CliError> {
    let match_mode = if substring {
        InvestorMatch::Substring
    } else {
        InvestorMatch::Exact
    };

    let store = load_store(options)?;
    ReportRequest::Investor {
        investor: investor.to_string(),
        match_mode,
    }
    .validate(&store)?;

    let report = investor_report_with(&store, investor, match_mode, &ReportLimits::default());
    emit(options.format, &report, render_investor)
}

/// Print the market overview.
///
/// `mode` is `amount` or `count` and selects the monthly timeline measure.
pub fn market(options: &DataOptions, mode: &str) -> Result<(), String> {
    run_market(options, mode).map_err(|e| e.to_string())
}

fn run_market(options: &DataOptions, mode: &str) -> Result<(), CliError> {
    let mode: MonthlyMode = mode.parse()?;
    let store = load_store(options)?;
    let report = market_report(&store, mode);
    emit(options.format, &report, render_market)
}
