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

//! Builder helpers for creating funding records in tests.

use chrono::NaiveDate;
use funding_core::{FundingRecord, RecordBuilder, RecordStore};

/// Starts a record with the given startup and calendar date.
///
/// # Panics
///
/// Panics if the date is not a valid calendar date.
///
/// # Examples
///
/// ```
/// use funding_test::builders::dated;
///
/// let record = dated("Ola", 2021, 3, 14).amount(5.0).build();
/// assert_eq!(record.year(), Some(2021));
/// ```
pub fn dated(startup: &str, year: i32, month: u32, day: u32) -> RecordBuilder {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid fixture date {year}-{month}-{day}"));
    FundingRecord::builder(startup).date(Some(date))
}

/// Undated records carrying only a startup name and an amount.
///
/// # Examples
///
/// ```
/// use funding_test::builders::amounts;
///
/// let rows = amounts(&[("S1", 10.0), ("S2", 15.0)]);
/// assert_eq!(rows.len(), 2);
/// ```
pub fn amounts(rows: &[(&str, f64)]) -> Vec<FundingRecord> {
    rows.iter()
        .map(|&(startup, amount)| FundingRecord::builder(startup).amount(amount).build())
        .collect()
}

/// Records naming the given investor lists, one per `(startup, investors)`.
pub fn with_investors(rows: &[(&str, &str)]) -> Vec<FundingRecord> {
    rows.iter()
        .map(|&(startup, investors)| FundingRecord::builder(startup).investors(investors).build())
        .collect()
}

/// Wraps records in a store with the default separator.
pub fn store_of(records: Vec<FundingRecord>) -> RecordStore {
    RecordStore::from_records(records)
}
