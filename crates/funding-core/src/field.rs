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

//! Named text columns of a funding record.

use crate::record::FundingRecord;
use std::fmt;

/// A text column that can serve as a grouping key or a filter target.
///
/// Values are opaque: no case folding or normalization is applied. An empty
/// value is reported as missing so it never forms a group of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Startup,
    Investors,
    Round,
    Vertical,
    Subvertical,
    City,
}

impl Field {
    /// Reads this column from a record.
    pub fn get(self, record: &FundingRecord) -> Option<&str> {
        let value = match self {
            Field::Startup => record.startup(),
            Field::Investors => return record.investors().filter(|s| !s.is_empty()),
            Field::Round => record.round(),
            Field::Vertical => record.vertical(),
            Field::Subvertical => record.subvertical(),
            Field::City => record.city(),
        };
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    /// Key extractor borrowing from the record, for use with the
    /// [`aggregate`](crate::aggregate) functions.
    pub fn key(self) -> impl Fn(&FundingRecord) -> Option<&str> {
        move |record| self.get(record)
    }

    /// Key extractor producing owned strings.
    pub fn owned_key(self) -> impl Fn(&FundingRecord) -> Option<String> {
        move |record| self.get(record).map(str::to_owned)
    }

    /// Column name as it appears in the source table.
    pub fn column_name(self) -> &'static str {
        match self {
            Field::Startup => "startup",
            Field::Investors => "investors",
            Field::Round => "round",
            Field::Vertical => "vertical",
            Field::Subvertical => "subvertical",
            Field::City => "city",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_reads_each_column() {
        let record = FundingRecord::builder("Ola")
            .investors("SoftBank")
            .round("Series J")
            .vertical("Transport")
            .subvertical("Cabs")
            .city("Bengaluru")
            .build();
        assert_eq!(Field::Startup.get(&record), Some("Ola"));
        assert_eq!(Field::Investors.get(&record), Some("SoftBank"));
        assert_eq!(Field::Round.get(&record), Some("Series J"));
        assert_eq!(Field::Vertical.get(&record), Some("Transport"));
        assert_eq!(Field::Subvertical.get(&record), Some("Cabs"));
        assert_eq!(Field::City.get(&record), Some("Bengaluru"));
    }

    #[test]
    fn test_empty_value_is_missing() {
        let record = FundingRecord::builder("Ola").build();
        assert_eq!(Field::City.get(&record), None);
        assert_eq!(Field::Investors.get(&record), None);
    }

    #[test]
    fn test_values_are_not_normalized() {
        let record = FundingRecord::builder("Ola").city("bengaluru").build();
        assert_eq!(Field::City.get(&record), Some("bengaluru"));
    }

    #[test]
    fn test_display_uses_column_name() {
        assert_eq!(Field::Vertical.to_string(), "vertical");
    }
}
