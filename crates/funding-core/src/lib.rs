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

//! Record store and aggregation engine for startup funding analytics.
//!
//! This crate owns the data model every report is derived from:
//!
//! - [`FundingRecord`]: one funding event, with `year`/`month` derived once at
//!   construction
//! - [`RecordStore`]: the immutable table of records, built once and shared by
//!   reference
//! - [`aggregate`]: pure grouping, counting, ranking and explosion operations
//!   over any subset of the store
//!
//! Nothing in this crate mutates a record after construction. Every
//! aggregation returns freshly allocated values.
//!
//! # Examples
//!
//! ```
//! use funding_core::aggregate::{sum_by, top_n, SortOrder};
//! use funding_core::{Field, FundingRecord, RecordStore};
//!
//! let store = RecordStore::from_records(vec![
//!     FundingRecord::builder("Ola").amount(10.0).build(),
//!     FundingRecord::builder("Ola").amount(15.0).build(),
//!     FundingRecord::builder("Zomato").amount(20.0).build(),
//! ]);
//!
//! let totals = sum_by(store.records(), Field::Startup.key(), |r| r.amount());
//! let top = top_n(&totals, 1, SortOrder::Descending);
//! assert_eq!(top[0].key, "Ola");
//! assert_eq!(top[0].value, 25.0);
//! ```

pub mod aggregate;
mod error;
mod field;
mod record;
mod store;

pub use aggregate::{Distribution, Entry, SortOrder};
pub use error::{FundingError, FundingErrorKind, FundingResult};
pub use field::Field;
pub use record::{FundingRecord, RecordBuilder};
pub use store::{RecordStore, StoreSummary, DEFAULT_INVESTOR_SEPARATOR};
