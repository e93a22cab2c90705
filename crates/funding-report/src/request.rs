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

//! Report requests and their dispatch to the lens builders.

use crate::company::{company_report, CompanyReport};
use crate::investor::{investor_report_with, investor_rows, InvestorMatch, InvestorReport};
use crate::limits::ReportLimits;
use crate::market::{market_report_with, MarketReport, MonthlyMode};
use funding_core::{FundingError, FundingResult, RecordStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The three analysis perspectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lens {
    Company,
    Investor,
    Market,
}

impl fmt::Display for Lens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lens::Company => write!(f, "company"),
            Lens::Investor => write!(f, "investor"),
            Lens::Market => write!(f, "market"),
        }
    }
}

/// A request for one report, tagged by lens.
///
/// Serialized as a flat JSON object with a `"lens"` discriminator:
///
/// ```
/// use funding_report::{InvestorMatch, ReportRequest};
///
/// let request: ReportRequest =
///     serde_json::from_str(r#"{"lens":"investor","investor":"Sequoia"}"#).unwrap();
/// assert_eq!(
///     request,
///     ReportRequest::Investor {
///         investor: "Sequoia".to_string(),
///         match_mode: InvestorMatch::Exact,
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "lens", rename_all = "lowercase")]
pub enum ReportRequest {
    Company {
        startup: String,
    },
    Investor {
        investor: String,
        #[serde(default)]
        match_mode: InvestorMatch,
    },
    Market {
        #[serde(default)]
        mode: MonthlyMode,
    },
}

/// A built report, tagged the same way as the request that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "lens", rename_all = "lowercase")]
pub enum ReportResponse {
    Company(CompanyReport),
    Investor(InvestorReport),
    Market(MarketReport),
}

impl ReportRequest {
    /// The lens this request is addressed to.
    pub fn lens(&self) -> Lens {
        match self {
            ReportRequest::Company { .. } => Lens::Company,
            ReportRequest::Investor { .. } => Lens::Investor,
            ReportRequest::Market { .. } => Lens::Market,
        }
    }

    /// Checks that the request names something present in `store`.
    ///
    /// Report builders accept any name and return empty views for unknown
    /// ones; callers that want to reject such requests up front validate
    /// first.
    pub fn validate(&self, store: &RecordStore) -> FundingResult<()> {
        match self {
            ReportRequest::Company { startup } => {
                if startup.trim().is_empty() {
                    return Err(FundingError::invalid_argument("startup name is empty"));
                }
                if !store.has_startup(startup) {
                    return Err(FundingError::not_found(format!(
                        "unknown startup '{}'",
                        startup
                    )));
                }
            }
            ReportRequest::Investor {
                investor,
                match_mode,
            } => {
                if investor.trim().is_empty() {
                    return Err(FundingError::invalid_argument("investor name is empty"));
                }
                let known = match match_mode {
                    InvestorMatch::Exact => store.has_investor(investor),
                    InvestorMatch::Substring => {
                        !investor_rows(store, investor, *match_mode).is_empty()
                    }
                };
                if !known {
                    return Err(FundingError::not_found(format!(
                        "unknown investor '{}'",
                        investor
                    )));
                }
            }
            ReportRequest::Market { .. } => {}
        }
        Ok(())
    }
}

impl ReportResponse {
    pub fn lens(&self) -> Lens {
        match self {
            ReportResponse::Company(_) => Lens::Company,
            ReportResponse::Investor(_) => Lens::Investor,
            ReportResponse::Market(_) => Lens::Market,
        }
    }
}

/// Builds the report a request asks for, with default limits.
pub fn dispatch(store: &RecordStore, request: &ReportRequest) -> ReportResponse {
    dispatch_with_limits(store, request, &ReportLimits::default())
}

/// Builds the report a request asks for.
pub fn dispatch_with_limits(
    store: &RecordStore,
    request: &ReportRequest,
    limits: &ReportLimits,
) -> ReportResponse {
    debug!(lens = %request.lens(), "building report");
    match request {
        ReportRequest::Company { startup } => {
            ReportResponse::Company(company_report(store, startup))
        }
        ReportRequest::Investor {
            investor,
            match_mode,
        } => ReportResponse::Investor(investor_report_with(store, investor, *match_mode, limits)),
        ReportRequest::Market { mode } => {
            ReportResponse::Market(market_report_with(store, *mode, limits))
        }
    }
}
