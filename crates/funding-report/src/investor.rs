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

//! Investor lens: portfolio, allocation and co-investors of one investor.

use crate::limits::ReportLimits;
use funding_core::aggregate::{
    count_by, explode_multivalued, filter_contains, filter_token, first_n_by_date, sum_by, top_n,
    Distribution, Entry, SortOrder,
};
use funding_core::{Field, FundingRecord, RecordStore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// How an investor name is matched against the `investors` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestorMatch {
    /// One of the trimmed names equals the query.
    #[default]
    Exact,
    /// The raw column contains the query anywhere, so `"Accel"` also
    /// selects rows of `"AccelPartners"`.
    Substring,
}

impl fmt::Display for InvestorMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvestorMatch::Exact => write!(f, "exact"),
            InvestorMatch::Substring => write!(f, "substring"),
        }
    }
}

/// Portfolio view of a single investor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestorReport {
    pub investor: String,
    pub match_mode: InvestorMatch,
    /// Number of rows the investor took part in.
    pub deal_count: usize,
    /// Most recent investments, newest first.
    pub recent: Vec<FundingRecord>,
    /// Startups ranked by total amount across the investor's rows.
    pub top_startups: Vec<Entry<String, f64>>,
    /// Amount per vertical.
    pub sector_distribution: Distribution<String, f64>,
    /// Amount per round.
    pub stage_distribution: Distribution<String, f64>,
    /// Amount per city.
    pub city_distribution: Distribution<String, f64>,
    /// Amount per year, oldest year first.
    pub year_over_year: Vec<Entry<i32, f64>>,
    /// Other investors that backed the same startups, by co-occurrence count.
    pub similar_investors: Vec<Entry<String, usize>>,
}

/// Rows the investor took part in under the given matching mode.
pub fn investor_rows<'a>(
    store: &'a RecordStore,
    investor: &str,
    mode: InvestorMatch,
) -> Vec<&'a FundingRecord> {
    match mode {
        InvestorMatch::Exact => filter_token(
            store.records(),
            Field::Investors,
            store.investor_separator(),
            investor,
        ),
        InvestorMatch::Substring => filter_contains(store.records(), Field::Investors, investor),
    }
}

/// Builds the investor report with exact matching and default limits.
pub fn investor_report(store: &RecordStore, investor: &str) -> InvestorReport {
    investor_report_with(store, investor, InvestorMatch::Exact, &ReportLimits::default())
}

/// Builds the investor report.
///
/// An investor with no rows yields a report with every view empty.
///
/// # Examples
///
/// ```
/// use funding_core::{FundingRecord, RecordStore};
/// use funding_report::{investor_report_with, InvestorMatch, ReportLimits};
///
/// let store = RecordStore::from_records(vec![
///     FundingRecord::builder("X").investors("Accel").amount(5.0).build(),
///     FundingRecord::builder("Y").investors("AccelPartners").amount(7.0).build(),
/// ]);
///
/// let limits = ReportLimits::default();
/// let exact = investor_report_with(&store, "Accel", InvestorMatch::Exact, &limits);
/// let loose = investor_report_with(&store, "Accel", InvestorMatch::Substring, &limits);
/// assert_eq!(exact.deal_count, 1);
/// assert_eq!(loose.deal_count, 2);
/// ```
pub fn investor_report_with(
    store: &RecordStore,
    investor: &str,
    mode: InvestorMatch,
    limits: &ReportLimits,
) -> InvestorReport {
    let rows = investor_rows(store, investor, mode);
    debug!(investor, mode = %mode, rows = rows.len(), "selected investor rows");

    let amount = |r: &FundingRecord| r.amount();
    let by_startup = sum_by(rows.iter().copied(), Field::Startup.owned_key(), amount);

    InvestorReport {
        investor: investor.to_string(),
        match_mode: mode,
        deal_count: rows.len(),
        recent: first_n_by_date(
            rows.iter().copied(),
            limits.recent_investments,
            SortOrder::Descending,
        )
        .into_iter()
        .cloned()
        .collect(),
        top_startups: top_n(&by_startup, limits.top_startups, SortOrder::Descending),
        sector_distribution: sum_by(rows.iter().copied(), Field::Vertical.owned_key(), amount),
        stage_distribution: sum_by(rows.iter().copied(), Field::Round.owned_key(), amount),
        city_distribution: sum_by(rows.iter().copied(), Field::City.owned_key(), amount),
        year_over_year: sum_by(rows.iter().copied(), FundingRecord::year, amount)
            .into_sorted_by_key(),
        similar_investors: similar_investors(store, investor, &rows, limits.similar_investors),
    }
}

/// Co-investors of `investor`: every investor that appears on any row of a
/// startup the investor funded, counted per row, excluding the investor.
fn similar_investors(
    store: &RecordStore,
    investor: &str,
    rows: &[&FundingRecord],
    limit: usize,
) -> Vec<Entry<String, usize>> {
    let funded: HashSet<&str> = rows.iter().map(|r| r.startup()).collect();
    let co_rows = store
        .records()
        .iter()
        .filter(|r| funded.contains(r.startup()));

    let mut counts = count_by(
        explode_multivalued(co_rows, Field::Investors, store.investor_separator()),
        |(_, name): (&FundingRecord, &str)| Some(name.to_string()),
    );
    counts.remove(&investor.to_string());
    top_n(&counts, limit, SortOrder::Descending)
}
