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

//! Company, investor and market reports over a funding [`RecordStore`].
//!
//! Each lens is a pure function of the store and its parameters. Nothing is
//! cached between calls, and every report is freshly built from the
//! aggregation primitives in [`funding_core::aggregate`].
//!
//! | Lens | Input | Builder |
//! |------|-------|---------|
//! | Company | startup name | [`company_report`] |
//! | Investor | investor name, [`InvestorMatch`] | [`investor_report_with`] |
//! | Market | [`MonthlyMode`] | [`market_report_with`] |
//!
//! Callers that receive requests as data use [`ReportRequest`] and
//! [`dispatch`] instead of calling the builders directly.
//!
//! # Examples
//!
//! ```
//! use funding_core::{FundingRecord, RecordStore};
//! use funding_report::{dispatch, ReportRequest, ReportResponse};
//!
//! let store = RecordStore::from_records(vec![
//!     FundingRecord::builder("Ola").investors("SoftBank").amount(300.0).build(),
//!     FundingRecord::builder("Ola").investors("SoftBank").amount(200.0).build(),
//! ]);
//!
//! let request = ReportRequest::Company { startup: "Ola".to_string() };
//! match dispatch(&store, &request) {
//!     ReportResponse::Company(report) => assert_eq!(report.total_funding, 500.0),
//!     other => panic!("unexpected {:?}", other.lens()),
//! }
//! ```
//!
//! [`RecordStore`]: funding_core::RecordStore

mod company;
mod investor;
mod limits;
mod market;
mod request;

pub use company::{company_report, CompanyReport};
pub use investor::{
    investor_report, investor_report_with, investor_rows, InvestorMatch, InvestorReport,
};
pub use limits::ReportLimits;
pub use market::{
    market_report, market_report_with, market_totals, monthly_series, MarketReport, MarketTotals,
    MonthlyMode, MonthlySeries, TimelinePoint,
};
pub use request::{dispatch, dispatch_with_limits, Lens, ReportRequest, ReportResponse};
