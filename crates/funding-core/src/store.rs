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

//! The immutable in-memory table of funding records.

use crate::aggregate::split_tokens;
use crate::record::FundingRecord;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Separator between investor names in the raw `investors` column.
pub const DEFAULT_INVESTOR_SEPARATOR: char = ',';

/// Immutable table of funding records.
///
/// Built once at startup and shared by reference with every report builder.
/// There is no API to add, change or remove records, so a `&RecordStore` can
/// be handed to any number of threads at once.
///
/// # Examples
///
/// ```
/// use funding_core::{FundingRecord, RecordStore};
///
/// let store = RecordStore::from_records(vec![
///     FundingRecord::builder("Zomato").investors("Info Edge, Sequoia").build(),
///     FundingRecord::builder("Ola").investors("SoftBank").build(),
/// ]);
///
/// assert_eq!(store.distinct_startups(), vec!["Ola", "Zomato"]);
/// assert_eq!(store.distinct_investors(), vec!["Info Edge", "Sequoia", "SoftBank"]);
/// ```
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<FundingRecord>,
    investor_separator: char,
}

/// Load diagnostics for a [`RecordStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StoreSummary {
    /// Total number of records.
    pub rows: usize,
    /// Distinct startup names.
    pub startups: usize,
    /// Distinct trimmed investor names.
    pub investors: usize,
    /// Records with a parseable date.
    pub dated_rows: usize,
    /// Records with a known amount.
    pub rows_with_amount: usize,
    /// Earliest funding date, if any record is dated.
    pub first_date: Option<NaiveDate>,
    /// Latest funding date, if any record is dated.
    pub last_date: Option<NaiveDate>,
}

impl RecordStore {
    /// Creates a store with a custom investor separator.
    pub fn new(records: Vec<FundingRecord>, investor_separator: char) -> Self {
        Self {
            records,
            investor_separator,
        }
    }

    /// Creates a store using [`DEFAULT_INVESTOR_SEPARATOR`].
    pub fn from_records(records: Vec<FundingRecord>) -> Self {
        Self::new(records, DEFAULT_INVESTOR_SEPARATOR)
    }

    /// All records in load order.
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Separator used to split the `investors` column.
    pub fn investor_separator(&self) -> char {
        self.investor_separator
    }

    /// Sorted distinct startup names.
    pub fn distinct_startups(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(FundingRecord::startup)
            .filter(|s| !s.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted distinct investor names, split and trimmed.
    pub fn distinct_investors(&self) -> Vec<&str> {
        self.investor_tokens()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Whether any record names `startup` exactly.
    pub fn has_startup(&self, startup: &str) -> bool {
        self.records.iter().any(|r| r.startup() == startup)
    }

    /// Whether any record lists `investor` as one of its trimmed tokens.
    pub fn has_investor(&self, investor: &str) -> bool {
        self.investor_tokens().any(|token| token == investor)
    }

    /// Computes load diagnostics.
    pub fn summary(&self) -> StoreSummary {
        let dates = self.records.iter().filter_map(FundingRecord::date);
        StoreSummary {
            rows: self.records.len(),
            startups: self.distinct_startups().len(),
            investors: self.distinct_investors().len(),
            dated_rows: self.records.iter().filter(|r| r.date().is_some()).count(),
            rows_with_amount: self.records.iter().filter(|r| r.amount().is_some()).count(),
            first_date: dates.clone().min(),
            last_date: dates.max(),
        }
    }

    fn investor_tokens(&self) -> impl Iterator<Item = &str> {
        let separator = self.investor_separator;
        self.records
            .iter()
            .filter_map(FundingRecord::investors)
            .flat_map(move |raw| split_tokens(raw, separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            FundingRecord::builder("Zomato")
                .investors(" Info Edge ,Sequoia")
                .date(NaiveDate::from_ymd_opt(2018, 2, 1))
                .amount(100.0)
                .build(),
            FundingRecord::builder("Ola")
                .investors("SoftBank")
                .date(NaiveDate::from_ymd_opt(2015, 7, 9))
                .build(),
            FundingRecord::builder("Ola").build(),
        ])
    }

    #[test]
    fn test_distinct_startups_sorted_and_unique() {
        assert_eq!(store().distinct_startups(), vec!["Ola", "Zomato"]);
    }

    #[test]
    fn test_distinct_investors_are_trimmed() {
        assert_eq!(
            store().distinct_investors(),
            vec!["Info Edge", "Sequoia", "SoftBank"]
        );
    }

    #[test]
    fn test_membership() {
        let store = store();
        assert!(store.has_startup("Ola"));
        assert!(!store.has_startup("ola"));
        assert!(store.has_investor("Info Edge"));
        assert!(!store.has_investor("Info"));
    }

    #[test]
    fn test_custom_separator() {
        let store = RecordStore::new(
            vec![FundingRecord::builder("X").investors("A; B").build()],
            ';',
        );
        assert_eq!(store.investor_separator(), ';');
        assert_eq!(store.distinct_investors(), vec!["A", "B"]);
    }

    #[test]
    fn test_summary() {
        let summary = store().summary();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.startups, 2);
        assert_eq!(summary.investors, 3);
        assert_eq!(summary.dated_rows, 2);
        assert_eq!(summary.rows_with_amount, 1);
        assert_eq!(summary.first_date, NaiveDate::from_ymd_opt(2015, 7, 9));
        assert_eq!(summary.last_date, NaiveDate::from_ymd_opt(2018, 2, 1));
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::from_records(Vec::new());
        assert!(store.is_empty());
        assert_eq!(store.summary().first_date, None);
    }
}
