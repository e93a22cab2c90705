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

//! CSV ingestion for startup funding tables.
//!
//! This crate turns a cleaned funding dataset into a [`RecordStore`]. It is
//! the only place where raw text is interpreted: dates are parsed, amounts
//! validated, and the header checked against the funding schema.
//!
//! # Features
//!
//! - **Schema check**: required columns located by name, fail fast when absent
//! - **Lenient values**: unparseable dates and amounts load as missing
//! - **Configurable**: delimiter, trimming, investor separator, date formats
//! - **Bounded**: row count limit against memory exhaustion
//!
//! # Expected Columns
//!
//! `date`, `startup`, `vertical`, `city`, `investors`, `round`, `amount` are
//! required; `subvertical` is optional. Any other column is ignored.
//!
//! # Examples
//!
//! ```
//! use funding_csv::from_csv;
//!
//! let csv = "date,startup,vertical,subvertical,city,investors,round,amount\n\
//!            2019-03-15,Ola,Transport,Cabs,Bengaluru,\"SoftBank, Tiger Global\",Series H,300\n";
//!
//! let store = from_csv(csv).unwrap();
//! assert_eq!(store.distinct_investors(), vec!["SoftBank", "Tiger Global"]);
//! ```
//!
//! ## Custom Configuration
//!
//! ```
//! use funding_csv::{from_csv_with_config, FromCsvConfig};
//!
//! let csv = "date\tstartup\tvertical\tcity\tinvestors\tround\tamount\n\
//!            14.03.2021\tAcme\tSaaS\tPune\tA;B\tSeed\t2\n";
//! let config = FromCsvConfig {
//!     delimiter: b'\t',
//!     investor_separator: ';',
//!     ..Default::default()
//! };
//! let store = from_csv_with_config(csv, config).unwrap();
//! assert_eq!(store.records()[0].year(), Some(2021));
//! ```
//!
//! [`RecordStore`]: funding_core::RecordStore

mod error;
mod from_csv;

// Re-export public API
pub use error::{CsvError, Result};
pub use from_csv::{
    from_csv, from_csv_reader, from_csv_reader_with_config, from_csv_with_config, FromCsvConfig,
    DEFAULT_DATE_FORMATS, DEFAULT_MAX_ROWS, REQUIRED_COLUMNS,
};
