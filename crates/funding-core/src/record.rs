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

//! The funding record data model.

use chrono::{Datelike, NaiveDate};

/// One funding event.
///
/// `year` and `month` are derived from `date` when the record is built and
/// are absent exactly when the date is absent. Records are never mutated
/// after construction, so the derived fields cannot drift from the date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use funding_core::FundingRecord;
///
/// let record = FundingRecord::builder("Byju's")
///     .date(NaiveDate::from_ymd_opt(2021, 3, 14))
///     .investors("Tiger Global, Sequoia Capital")
///     .round("Series F")
///     .amount(460.0)
///     .build();
///
/// assert_eq!(record.year(), Some(2021));
/// assert_eq!(record.month(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FundingRecord {
    date: Option<NaiveDate>,
    startup: String,
    investors: Option<String>,
    round: String,
    vertical: String,
    subvertical: String,
    city: String,
    amount: Option<f64>,
    year: Option<i32>,
    month: Option<u32>,
}

impl FundingRecord {
    /// Start building a record for the given startup.
    pub fn builder(startup: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(startup)
    }

    /// Funding date, `None` when the source text could not be parsed.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Startup name. Not unique across records.
    pub fn startup(&self) -> &str {
        &self.startup
    }

    /// Raw investor list as it appeared in the source, separator included.
    pub fn investors(&self) -> Option<&str> {
        self.investors.as_deref()
    }

    /// Funding round label (e.g. "Seed", "Series A").
    pub fn round(&self) -> &str {
        &self.round
    }

    /// Sector label.
    pub fn vertical(&self) -> &str {
        &self.vertical
    }

    /// Sub-sector label.
    pub fn subvertical(&self) -> &str {
        &self.subvertical
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Amount raised, `None` when unknown.
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }
}

/// Builder for [`FundingRecord`].
///
/// Every field except the startup name defaults to empty/missing.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    date: Option<NaiveDate>,
    startup: String,
    investors: Option<String>,
    round: String,
    vertical: String,
    subvertical: String,
    city: String,
    amount: Option<f64>,
}

impl RecordBuilder {
    /// Creates a builder for the given startup.
    pub fn new(startup: impl Into<String>) -> Self {
        Self {
            date: None,
            startup: startup.into(),
            investors: None,
            round: String::new(),
            vertical: String::new(),
            subvertical: String::new(),
            city: String::new(),
            amount: None,
        }
    }

    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Sets the raw investor list. An empty string is stored as missing.
    pub fn investors(mut self, investors: impl Into<String>) -> Self {
        let investors = investors.into();
        self.investors = if investors.is_empty() {
            None
        } else {
            Some(investors)
        };
        self
    }

    pub fn round(mut self, round: impl Into<String>) -> Self {
        self.round = round.into();
        self
    }

    pub fn vertical(mut self, vertical: impl Into<String>) -> Self {
        self.vertical = vertical.into();
        self
    }

    pub fn subvertical(mut self, subvertical: impl Into<String>) -> Self {
        self.subvertical = subvertical.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets an amount that may be unknown.
    pub fn maybe_amount(mut self, amount: Option<f64>) -> Self {
        self.amount = amount;
        self
    }

    /// Builds the record, deriving `year` and `month` from the date.
    pub fn build(self) -> FundingRecord {
        FundingRecord {
            year: self.date.map(|d| d.year()),
            month: self.date.map(|d| d.month()),
            date: self.date,
            startup: self.startup,
            investors: self.investors,
            round: self.round,
            vertical: self.vertical,
            subvertical: self.subvertical,
            city: self.city,
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields_follow_date() {
        let record = FundingRecord::builder("Swiggy")
            .date(NaiveDate::from_ymd_opt(2019, 12, 31))
            .build();
        assert_eq!(record.year(), Some(2019));
        assert_eq!(record.month(), Some(12));
    }

    #[test]
    fn test_missing_date_has_no_year_or_month() {
        let record = FundingRecord::builder("Swiggy").build();
        assert_eq!(record.date(), None);
        assert_eq!(record.year(), None);
        assert_eq!(record.month(), None);
    }

    #[test]
    fn test_empty_investors_stored_as_missing() {
        let record = FundingRecord::builder("Swiggy").investors("").build();
        assert_eq!(record.investors(), None);
    }

    #[test]
    fn test_builder_defaults() {
        let record = FundingRecord::builder("Swiggy").build();
        assert_eq!(record.startup(), "Swiggy");
        assert_eq!(record.round(), "");
        assert_eq!(record.city(), "");
        assert_eq!(record.amount(), None);
    }

    #[test]
    fn test_maybe_amount() {
        let record = FundingRecord::builder("Swiggy").maybe_amount(Some(3.5)).build();
        assert_eq!(record.amount(), Some(3.5));
        let record = FundingRecord::builder("Swiggy").maybe_amount(None).build();
        assert_eq!(record.amount(), None);
    }
}
