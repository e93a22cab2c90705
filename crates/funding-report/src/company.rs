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

//! Company lens: one startup's funding history.

use funding_core::aggregate::{sort_by_date, sum_values, SortOrder};
use funding_core::{FundingRecord, RecordStore};
use serde::Serialize;

/// Funding history of a single startup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyReport {
    /// The startup the report was built for.
    pub startup: String,
    /// Sum of known amounts across all rounds.
    pub total_funding: f64,
    /// Number of funding records for the startup.
    pub round_count: usize,
    /// Earliest funding year, `None` when no round is dated.
    pub first_year: Option<i32>,
    /// Latest funding year, `None` when no round is dated.
    pub last_year: Option<i32>,
    /// Every round, most recent first; undated rounds last.
    pub detail_rows: Vec<FundingRecord>,
}

/// Builds the company report for `startup`.
///
/// The name is matched exactly. A startup with no records yields an empty
/// report with unknown years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use funding_core::{FundingRecord, RecordStore};
/// use funding_report::company_report;
///
/// let store = RecordStore::from_records(vec![FundingRecord::builder("Ola")
///     .date(NaiveDate::from_ymd_opt(2020, 5, 1))
///     .amount(12.0)
///     .build()]);
///
/// let report = company_report(&store, "Ola");
/// assert_eq!(report.round_count, 1);
/// assert_eq!(report.first_year, Some(2020));
/// assert_eq!(report.last_year, Some(2020));
/// ```
pub fn company_report(store: &RecordStore, startup: &str) -> CompanyReport {
    let rows: Vec<&FundingRecord> = store
        .records()
        .iter()
        .filter(|r| r.startup() == startup)
        .collect();

    let years = rows.iter().filter_map(|r| r.year());

    CompanyReport {
        startup: startup.to_string(),
        total_funding: sum_values(rows.iter().filter_map(|r| r.amount())),
        round_count: rows.len(),
        first_year: years.clone().min(),
        last_year: years.max(),
        detail_rows: sort_by_date(rows.iter().copied(), SortOrder::Descending)
            .into_iter()
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(startup: &str, date: Option<(i32, u32, u32)>, amount: Option<f64>) -> FundingRecord {
        FundingRecord::builder(startup)
            .date(date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)))
            .maybe_amount(amount)
            .build()
    }

    #[test]
    fn test_single_dated_row() {
        let store = RecordStore::from_records(vec![record("A", Some((2020, 1, 1)), Some(5.0))]);
        let report = company_report(&store, "A");
        assert_eq!(report.round_count, 1);
        assert_eq!(report.first_year, Some(2020));
        assert_eq!(report.last_year, Some(2020));
        assert_eq!(report.total_funding, 5.0);
    }

    #[test]
    fn test_undated_rows_give_unknown_years() {
        let store = RecordStore::from_records(vec![record("A", None, Some(5.0)), record("A", None, None)]);
        let report = company_report(&store, "A");
        assert_eq!(report.round_count, 2);
        assert_eq!(report.first_year, None);
        assert_eq!(report.last_year, None);
        assert_eq!(report.total_funding, 5.0);
    }

    #[test]
    fn test_unknown_startup_is_empty() {
        let store = RecordStore::from_records(vec![record("A", Some((2020, 1, 1)), Some(5.0))]);
        let report = company_report(&store, "B");
        assert_eq!(report.round_count, 0);
        assert_eq!(report.total_funding, 0.0);
        assert_eq!(report.first_year, None);
        assert!(report.detail_rows.is_empty());
    }

    #[test]
    fn test_name_match_is_exact() {
        let store = RecordStore::from_records(vec![
            record("Ola", None, Some(1.0)),
            record("Ola Electric", None, Some(2.0)),
            record("ola", None, Some(4.0)),
        ]);
        assert_eq!(company_report(&store, "Ola").total_funding, 1.0);
    }

    #[test]
    fn test_detail_rows_most_recent_first() {
        let store = RecordStore::from_records(vec![
            record("A", Some((2016, 1, 1)), Some(1.0)),
            record("A", None, Some(2.0)),
            record("A", Some((2021, 1, 1)), Some(3.0)),
        ]);
        let report = company_report(&store, "A");
        let amounts: Vec<_> = report.detail_rows.iter().map(|r| r.amount()).collect();
        assert_eq!(amounts, vec![Some(3.0), Some(1.0), Some(2.0)]);
        assert_eq!(report.first_year, Some(2016));
        assert_eq!(report.last_year, Some(2021));
    }
}
