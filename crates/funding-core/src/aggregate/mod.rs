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

//! Aggregation engine.
//!
//! Pure functions over any subset of a [`RecordStore`](crate::RecordStore):
//! grouped sums and counts, ranking, multi-valued field explosion, filtering
//! and date ordering. Every function takes its rows as an iterator of
//! `&FundingRecord`, never mutates them, and returns a freshly built value.
//!
//! # Missing values
//!
//! A row whose key or value is missing is skipped by the grouping
//! functions. A group therefore only exists in a [`sum_by`] result if at
//! least one of its rows carries a value, which keeps unknown amounts from
//! showing up as zero-valued entries in ranked lists.
//!
//! Reductions that are undefined over an empty set ([`max_value`],
//! [`mean_value`]) return `None` rather than a default.
//!
//! # Examples
//!
//! ```
//! use funding_core::aggregate::{count_by, explode_multivalued, top_n, SortOrder};
//! use funding_core::{Field, FundingRecord};
//!
//! let rows = vec![
//!     FundingRecord::builder("Ola").investors("SoftBank, Tiger Global").build(),
//!     FundingRecord::builder("Paytm").investors("SoftBank").build(),
//! ];
//!
//! let pieces = explode_multivalued(&rows, Field::Investors, ',');
//! let deals = count_by(pieces.iter().map(|(_, name)| *name), |name| Some(name));
//! let top = top_n(&deals, 1, SortOrder::Descending);
//! assert_eq!(top[0].key, "SoftBank");
//! assert_eq!(top[0].value, 2);
//! ```

mod distribution;

pub use distribution::{Distribution, Entry};

use crate::field::Field;
use crate::record::FundingRecord;
use std::cmp::Ordering;
use std::hash::Hash;

/// Direction of a ranking or date ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Sums `value` per distinct `key`.
///
/// Rows where either the key or the value is missing are excluded.
pub fn sum_by<'a, I, K, KF, VF>(rows: I, key: KF, value: VF) -> Distribution<K, f64>
where
    I: IntoIterator<Item = &'a FundingRecord>,
    K: Eq + Hash + Clone,
    KF: Fn(&'a FundingRecord) -> Option<K>,
    VF: Fn(&'a FundingRecord) -> Option<f64>,
{
    let mut totals = Distribution::new();
    for row in rows {
        if let (Some(k), Some(v)) = (key(row), value(row)) {
            *totals.entry_or_insert_with(k, || 0.0) += v;
        }
    }
    totals
}

/// Counts items per distinct key. Items with a missing key are excluded.
///
/// Works over records as well as over exploded tokens.
pub fn count_by<T, I, K, KF>(items: I, key: KF) -> Distribution<K, usize>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    KF: Fn(T) -> Option<K>,
{
    let mut counts = Distribution::new();
    for item in items {
        if let Some(k) = key(item) {
            *counts.entry_or_insert_with(k, || 0) += 1;
        }
    }
    counts
}

/// Ranks a distribution by value and keeps the first `n` entries.
///
/// The sort is stable on value only: entries with equal values keep their
/// first-encountered order. Values that cannot be compared (NaN) are treated
/// as equal to everything.
pub fn top_n<K, V>(distribution: &Distribution<K, V>, n: usize, order: SortOrder) -> Vec<Entry<K, V>>
where
    K: Clone,
    V: PartialOrd + Clone,
{
    let mut ranked = distribution.entries().to_vec();
    ranked.sort_by(|a, b| {
        let ord = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    ranked.truncate(n);
    ranked
}

/// Splits a multi-valued string and yields its trimmed, non-empty pieces.
pub fn split_tokens(value: &str, separator: char) -> impl Iterator<Item = &str> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
}

/// Explodes a multi-valued field into one `(row, piece)` pair per value.
///
/// Pieces are trimmed and empty pieces dropped; order within a row and
/// across rows is preserved. Rows with a missing field yield nothing.
pub fn explode_multivalued<'a, I>(
    rows: I,
    field: Field,
    separator: char,
) -> Vec<(&'a FundingRecord, &'a str)>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    rows.into_iter()
        .flat_map(|row| {
            field
                .get(row)
                .into_iter()
                .flat_map(move |raw| split_tokens(raw, separator))
                .map(move |piece| (row, piece))
        })
        .collect()
}

/// Rows whose raw (un-split) field contains `substring`, case-sensitive.
///
/// This is a plain substring test: `"Accel"` matches `"AccelPartners"`.
/// Use [`filter_token`] to match one value of a multi-valued field exactly.
pub fn filter_contains<'a, I>(rows: I, field: Field, substring: &str) -> Vec<&'a FundingRecord>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    rows.into_iter()
        .filter(|row| field.get(row).is_some_and(|v| v.contains(substring)))
        .collect()
}

/// Rows where one of the trimmed pieces of a multi-valued field equals
/// `token` exactly.
pub fn filter_token<'a, I>(
    rows: I,
    field: Field,
    separator: char,
    token: &str,
) -> Vec<&'a FundingRecord>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    rows.into_iter()
        .filter(|row| {
            field
                .get(row)
                .is_some_and(|raw| split_tokens(raw, separator).any(|piece| piece == token))
        })
        .collect()
}

/// Orders rows by date. Undated rows go last in either direction and ties
/// keep their original order.
pub fn sort_by_date<'a, I>(rows: I, order: SortOrder) -> Vec<&'a FundingRecord>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    let mut sorted: Vec<&FundingRecord> = rows.into_iter().collect();
    sorted.sort_by(|a, b| match (a.date(), b.date()) {
        (Some(x), Some(y)) => match order {
            SortOrder::Ascending => x.cmp(&y),
            SortOrder::Descending => y.cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// The `n` most recent (descending) or oldest (ascending) rows.
pub fn first_n_by_date<'a, I>(rows: I, n: usize, order: SortOrder) -> Vec<&'a FundingRecord>
where
    I: IntoIterator<Item = &'a FundingRecord>,
{
    let mut sorted = sort_by_date(rows, order);
    sorted.truncate(n);
    sorted
}

/// Sum of the present values; zero for no values.
pub fn sum_values<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().sum()
}

/// Largest value, `None` over an empty set.
pub fn max_value<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    values.into_iter().fold(None, |max, v| match max {
        Some(m) if m >= v => Some(m),
        _ => Some(v),
    })
}

/// Arithmetic mean, `None` over an empty set.
pub fn mean_value<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dated(startup: &str, y: i32, m: u32, d: u32) -> FundingRecord {
        FundingRecord::builder(startup)
            .date(NaiveDate::from_ymd_opt(y, m, d))
            .build()
    }

    #[test]
    fn test_sum_by_excludes_missing_values() {
        let rows = vec![
            FundingRecord::builder("A").vertical("Fintech").amount(10.0).build(),
            FundingRecord::builder("B").vertical("Fintech").build(),
            FundingRecord::builder("C").vertical("Edtech").build(),
            FundingRecord::builder("D").amount(7.0).build(),
        ];
        let totals = sum_by(&rows, Field::Vertical.key(), |r| r.amount());
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get(&"Fintech"), Some(&10.0));
        assert!(!totals.contains_key(&"Edtech"));
    }

    #[test]
    fn test_sum_by_empty_input() {
        let rows: Vec<FundingRecord> = Vec::new();
        let totals = sum_by(&rows, Field::City.key(), |r| r.amount());
        assert!(totals.is_empty());
    }

    #[test]
    fn test_count_by_groups_are_case_sensitive() {
        let rows = vec![
            FundingRecord::builder("A").city("Mumbai").build(),
            FundingRecord::builder("B").city("mumbai").build(),
            FundingRecord::builder("C").city("Mumbai").build(),
        ];
        let counts = count_by(&rows, Field::City.key());
        assert_eq!(counts.get(&"Mumbai"), Some(&2));
        assert_eq!(counts.get(&"mumbai"), Some(&1));
    }

    #[test]
    fn test_top_n_ties_keep_first_encountered_order() {
        let rows = vec![
            FundingRecord::builder("A").amount(5.0).build(),
            FundingRecord::builder("B").amount(9.0).build(),
            FundingRecord::builder("C").amount(5.0).build(),
        ];
        let totals = sum_by(&rows, Field::Startup.key(), |r| r.amount());
        let top = top_n(&totals, 3, SortOrder::Descending);
        let keys: Vec<_> = top.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);

        let bottom = top_n(&totals, 2, SortOrder::Ascending);
        let keys: Vec<_> = bottom.iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["A", "C"]);
    }

    #[test]
    fn test_top_n_larger_than_input_returns_all() {
        let rows = vec![FundingRecord::builder("A").amount(1.0).build()];
        let totals = sum_by(&rows, Field::Startup.key(), |r| r.amount());
        assert_eq!(top_n(&totals, 10, SortOrder::Descending).len(), 1);
    }

    #[test]
    fn test_explode_trims_and_preserves_order() {
        let rows = vec![FundingRecord::builder("X").investors("A, B ,C").build()];
        let pieces: Vec<&str> = explode_multivalued(&rows, Field::Investors, ',')
            .into_iter()
            .map(|(_, p)| p)
            .collect();
        assert_eq!(pieces, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_explode_skips_missing_and_empty_pieces() {
        let rows = vec![
            FundingRecord::builder("X").build(),
            FundingRecord::builder("Y").investors(" , A,,").build(),
        ];
        let exploded = explode_multivalued(&rows, Field::Investors, ',');
        assert_eq!(exploded.len(), 1);
        assert_eq!(exploded[0].0.startup(), "Y");
        assert_eq!(exploded[0].1, "A");
    }

    #[test]
    fn test_filter_contains_versus_filter_token() {
        let rows = vec![
            FundingRecord::builder("X").investors("AccelPartners").build(),
            FundingRecord::builder("Y").investors("Sequoia,  Accel ").build(),
        ];
        let contains = filter_contains(&rows, Field::Investors, "Accel");
        assert_eq!(contains.len(), 2);

        let exact = filter_token(&rows, Field::Investors, ',', "Accel");
        assert_eq!(exact.len(), 1);
        assert_eq!(exact[0].startup(), "Y");
    }

    #[test]
    fn test_filter_contains_is_case_sensitive() {
        let rows = vec![FundingRecord::builder("X").investors("Accel").build()];
        assert!(filter_contains(&rows, Field::Investors, "accel").is_empty());
    }

    #[test]
    fn test_first_n_by_date_descending_with_undated_last() {
        let rows = vec![
            FundingRecord::builder("undated").build(),
            dated("old", 2015, 1, 1),
            dated("new", 2020, 6, 1),
            dated("mid", 2018, 3, 1),
        ];
        let recent = first_n_by_date(&rows, 3, SortOrder::Descending);
        let names: Vec<_> = recent.iter().map(|r| r.startup()).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);

        let oldest = sort_by_date(&rows, SortOrder::Ascending);
        let names: Vec<_> = oldest.iter().map(|r| r.startup()).collect();
        assert_eq!(names, vec!["old", "mid", "new", "undated"]);
    }

    #[test]
    fn test_sort_by_date_is_stable_on_ties() {
        let rows = vec![dated("first", 2020, 1, 1), dated("second", 2020, 1, 1)];
        let sorted = sort_by_date(&rows, SortOrder::Descending);
        assert_eq!(sorted[0].startup(), "first");
        assert_eq!(sorted[1].startup(), "second");
    }

    #[test]
    fn test_reductions_over_empty_set() {
        assert_eq!(max_value(Vec::<f64>::new()), None);
        assert_eq!(mean_value(Vec::<f64>::new()), None);
        assert_eq!(sum_values(Vec::<f64>::new()), 0.0);
    }

    #[test]
    fn test_reductions() {
        assert_eq!(max_value(vec![3.0, 20.0, 15.0]), Some(20.0));
        assert_eq!(mean_value(vec![10.0, 20.0]), Some(15.0));
        assert_eq!(sum_values(vec![1.5, 2.5]), 4.0);
    }
}
