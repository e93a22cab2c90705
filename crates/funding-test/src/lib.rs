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

//! Shared test fixtures and builders for the funding analytics crates.
//!
//! This crate provides a small canonical funding table, in both record and
//! CSV form, plus builder helpers so the core, CSV, report and CLI crates all
//! test against the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use funding_test::fixtures;
//!
//! let store = fixtures::sample_store();
//! assert_eq!(store.len(), fixtures::SAMPLE_ROWS);
//!
//! // The same table as CSV text, for ingestion tests
//! assert!(fixtures::SAMPLE_CSV.starts_with("date,startup"));
//!
//! // Build custom rows
//! use funding_test::builders::{amounts, dated};
//!
//! let rows = amounts(&[("S1", 10.0), ("S1", 10.0), ("S2", 15.0)]);
//! let row = dated("S3", 2021, 3, 14).amount(5.0).build();
//! ```

/// Canonical sample table.
pub mod fixtures;

/// Record builder helpers.
pub mod builders;

pub use fixtures::{sample_records, sample_store, SAMPLE_CSV, SAMPLE_ROWS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store_matches_row_count() {
        assert_eq!(sample_store().len(), SAMPLE_ROWS);
        assert_eq!(sample_records().len(), SAMPLE_ROWS);
    }

    #[test]
    fn test_sample_csv_has_one_line_per_row() {
        let data_lines = SAMPLE_CSV.lines().skip(1).filter(|l| !l.is_empty()).count();
        assert_eq!(data_lines, SAMPLE_ROWS);
    }

    #[test]
    fn test_sample_contains_undated_row_without_amount() {
        let records = sample_records();
        assert!(records
            .iter()
            .any(|r| r.date().is_none() && r.amount().is_none()));
    }
}
