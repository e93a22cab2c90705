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

//! Market lens: totals, monthly timeline and top-N rankings over the whole
//! dataset.

use crate::limits::ReportLimits;
use funding_core::aggregate::{
    count_by, explode_multivalued, max_value, mean_value, sum_by, sum_values, top_n, Entry,
    SortOrder,
};
use funding_core::{Field, FundingError, FundingRecord, RecordStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the monthly timeline measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthlyMode {
    /// Sum of amounts per month.
    #[default]
    Amount,
    /// Number of amount-bearing rows per month.
    Count,
}

impl fmt::Display for MonthlyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthlyMode::Amount => write!(f, "amount"),
            MonthlyMode::Count => write!(f, "count"),
        }
    }
}

impl FromStr for MonthlyMode {
    type Err = FundingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "amount" | "total" => Ok(MonthlyMode::Amount),
            "count" => Ok(MonthlyMode::Count),
            _ => Err(FundingError::invalid_argument(format!(
                "unknown monthly mode '{}', expected 'amount' or 'count'",
                s
            ))),
        }
    }
}

/// Headline numbers of the market.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketTotals {
    /// Sum of all known amounts.
    pub total_funding: f64,
    /// Largest per-startup total.
    pub max_funding: Option<f64>,
    /// Mean of per-startup totals, rounded to the nearest integer.
    pub average_funding: Option<i64>,
    /// Distinct startups in the store, funded amount known or not.
    pub funded_startups: usize,
}

/// One month of the market timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub year: i32,
    pub month: u32,
    /// `"<month>-<year>"` without zero padding, e.g. `"3-2021"`.
    pub label: String,
    pub value: f64,
}

impl TimelinePoint {
    fn new(year: i32, month: u32, value: f64) -> Self {
        Self {
            year,
            month,
            label: format!("{}-{}", month, year),
            value,
        }
    }
}

/// Monthly funding timeline, chronological.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySeries {
    pub mode: MonthlyMode,
    pub points: Vec<TimelinePoint>,
}

/// Market-wide view over the whole store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketReport {
    pub totals: MarketTotals,
    pub monthly: MonthlySeries,
    /// Verticals by number of rows with a known amount.
    pub sectors_by_count: Vec<Entry<String, usize>>,
    /// Verticals by total amount.
    pub sectors_by_amount: Vec<Entry<String, f64>>,
    /// Cities by total amount.
    pub top_cities: Vec<Entry<String, f64>>,
    /// Startups by total amount.
    pub top_startups: Vec<Entry<String, f64>>,
    /// Investors by number of deals, one count per row they appear on.
    pub top_investors: Vec<Entry<String, usize>>,
}

/// Headline totals.
///
/// Maximum and average are taken over per-startup sums, so several rounds of
/// the same startup count as one funded company. Startups without any known
/// amount take no part in them but still count as funded startups.
pub fn market_totals(store: &RecordStore) -> MarketTotals {
    let records = store.records();
    let per_startup = sum_by(records, Field::Startup.key(), FundingRecord::amount);

    MarketTotals {
        total_funding: sum_values(records.iter().filter_map(FundingRecord::amount)),
        max_funding: max_value(per_startup.values().copied()),
        average_funding: mean_value(per_startup.values().copied()).map(|mean| mean.round() as i64),
        funded_startups: store.distinct_startups().len(),
    }
}

/// Monthly timeline over dated rows with a known amount.
///
/// Months without funding are absent rather than zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use funding_core::{FundingRecord, RecordStore};
/// use funding_report::{monthly_series, MonthlyMode};
///
/// let store = RecordStore::from_records(vec![FundingRecord::builder("A")
///     .date(NaiveDate::from_ymd_opt(2021, 3, 9))
///     .amount(4.0)
///     .build()]);
///
/// let series = monthly_series(&store, MonthlyMode::Amount);
/// assert_eq!(series.points[0].label, "3-2021");
/// ```
pub fn monthly_series(store: &RecordStore, mode: MonthlyMode) -> MonthlySeries {
    let month_of = |r: &FundingRecord| r.year().zip(r.month());
    let points = match mode {
        MonthlyMode::Amount => sum_by(store.records(), month_of, FundingRecord::amount)
            .into_sorted_by_key()
            .into_iter()
            .map(|e| TimelinePoint::new(e.key.0, e.key.1, e.value))
            .collect(),
        MonthlyMode::Count => count_by(
            store.records().iter().filter(|r| r.amount().is_some()),
            month_of,
        )
        .into_sorted_by_key()
        .into_iter()
        .map(|e| TimelinePoint::new(e.key.0, e.key.1, e.value as f64))
        .collect(),
    };
    MonthlySeries { mode, points }
}

/// Builds the market report with default limits.
pub fn market_report(store: &RecordStore, mode: MonthlyMode) -> MarketReport {
    market_report_with(store, mode, &ReportLimits::default())
}

/// Builds the market report.
pub fn market_report_with(
    store: &RecordStore,
    mode: MonthlyMode,
    limits: &ReportLimits,
) -> MarketReport {
    let records = store.records();
    let n = limits.market_top;
    let descending = SortOrder::Descending;
    let amount = FundingRecord::amount;

    let investor_deals = count_by(
        explode_multivalued(records, Field::Investors, store.investor_separator()),
        |(_, name): (&FundingRecord, &str)| Some(name.to_string()),
    );

    MarketReport {
        totals: market_totals(store),
        monthly: monthly_series(store, mode),
        sectors_by_count: top_n(
            &count_by(
                records.iter().filter(|r| r.amount().is_some()),
                Field::Vertical.owned_key(),
            ),
            n,
            descending,
        ),
        sectors_by_amount: top_n(
            &sum_by(records, Field::Vertical.owned_key(), amount),
            n,
            descending,
        ),
        top_cities: top_n(&sum_by(records, Field::City.owned_key(), amount), n, descending),
        top_startups: top_n(
            &sum_by(records, Field::Startup.owned_key(), amount),
            n,
            descending,
        ),
        top_investors: top_n(&investor_deals, n, descending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(startup: &str, date: Option<(i32, u32)>, amount: Option<f64>) -> FundingRecord {
        FundingRecord::builder(startup)
            .date(date.and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1)))
            .maybe_amount(amount)
            .build()
    }

    #[test]
    fn test_max_funding_uses_per_startup_sums() {
        let store = RecordStore::from_records(vec![
            row("S1", None, Some(10.0)),
            row("S1", None, Some(10.0)),
            row("S2", None, Some(15.0)),
        ]);
        let totals = market_totals(&store);
        assert_eq!(totals.total_funding, 35.0);
        assert_eq!(totals.max_funding, Some(20.0));
        assert_eq!(totals.average_funding, Some(18));
        assert_eq!(totals.funded_startups, 2);
    }

    #[test]
    fn test_average_rounds_half_away_from_zero() {
        let store = RecordStore::from_records(vec![
            row("S1", None, Some(1.0)),
            row("S2", None, Some(2.0)),
        ]);
        assert_eq!(market_totals(&store).average_funding, Some(2));
    }

    #[test]
    fn test_totals_over_empty_store() {
        let totals = market_totals(&RecordStore::from_records(Vec::new()));
        assert_eq!(totals.total_funding, 0.0);
        assert_eq!(totals.max_funding, None);
        assert_eq!(totals.average_funding, None);
        assert_eq!(totals.funded_startups, 0);
    }

    #[test]
    fn test_startups_without_amount_still_counted() {
        let store = RecordStore::from_records(vec![
            row("S1", None, Some(3.0)),
            row("S2", None, None),
        ]);
        let totals = market_totals(&store);
        assert_eq!(totals.funded_startups, 2);
        assert_eq!(totals.max_funding, Some(3.0));
        assert_eq!(totals.average_funding, Some(3));
    }

    #[test]
    fn test_monthly_amount_chronological() {
        let store = RecordStore::from_records(vec![
            row("A", Some((2021, 3)), Some(4.0)),
            row("B", Some((2020, 12)), Some(1.0)),
            row("C", Some((2021, 3)), Some(2.0)),
            row("D", None, Some(100.0)),
            row("E", Some((2021, 1)), None),
        ]);
        let series = monthly_series(&store, MonthlyMode::Amount);
        let labels: Vec<_> = series.points.iter().map(|p| p.label.as_str()).collect();
        let values: Vec<_> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(labels, vec!["12-2020", "3-2021"]);
        assert_eq!(values, vec![1.0, 6.0]);
    }

    #[test]
    fn test_monthly_count_skips_rows_without_amount() {
        let store = RecordStore::from_records(vec![
            row("A", Some((2021, 3)), Some(4.0)),
            row("C", Some((2021, 3)), Some(2.0)),
            row("E", Some((2021, 1)), None),
        ]);
        let series = monthly_series(&store, MonthlyMode::Count);
        assert_eq!(series.mode, MonthlyMode::Count);
        assert_eq!(series.points, vec![TimelinePoint::new(2021, 3, 2.0)]);
    }

    #[test]
    fn test_monthly_mode_from_str() {
        assert_eq!("amount".parse::<MonthlyMode>().unwrap(), MonthlyMode::Amount);
        assert_eq!("Count".parse::<MonthlyMode>().unwrap(), MonthlyMode::Count);
        let err = "weekly".parse::<MonthlyMode>().unwrap_err();
        assert!(err.message.contains("weekly"));
    }

    #[test]
    fn test_sector_count_skips_rows_without_amount() {
        let vertical = |v: &str, amount: Option<f64>| {
            FundingRecord::builder("S")
                .vertical(v)
                .date(NaiveDate::from_ymd_opt(2021, 3, 1))
                .maybe_amount(amount)
                .build()
        };
        let store = RecordStore::from_records(vec![
            vertical("Fintech", Some(5.0)),
            vertical("Edtech", None),
            vertical("Edtech", None),
        ]);
        let report = market_report(&store, MonthlyMode::Count);
        assert_eq!(
            report.sectors_by_count,
            vec![Entry::new("Fintech".to_string(), 1)]
        );
        assert_eq!(report.monthly.points, vec![TimelinePoint::new(2021, 3, 1.0)]);
    }

    #[test]
    fn test_rankings_limited_to_market_top() {
        let records = (0..15)
            .map(|i| {
                FundingRecord::builder(format!("S{i}"))
                    .vertical(format!("V{i}"))
                    .city(format!("C{i}"))
                    .investors(format!("I{i}"))
                    .amount(i as f64)
                    .build()
            })
            .collect();
        let store = RecordStore::from_records(records);
        let report = market_report(&store, MonthlyMode::Amount);
        assert_eq!(report.sectors_by_count.len(), 10);
        assert_eq!(report.sectors_by_amount.len(), 10);
        assert_eq!(report.top_cities.len(), 10);
        assert_eq!(report.top_startups.len(), 10);
        assert_eq!(report.top_investors.len(), 10);
        assert_eq!(report.top_startups[0], Entry::new("S14".to_string(), 14.0));
    }
}
