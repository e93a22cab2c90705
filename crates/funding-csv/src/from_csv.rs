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

//! Load CSV funding tables into a record store.

use crate::error::{CsvError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use funding_core::{FundingRecord, RecordStore, DEFAULT_INVESTOR_SEPARATOR};
use std::io::Read;
use tracing::{debug, info};

/// Default maximum number of rows to prevent memory exhaustion.
///
/// # Examples
///
/// ```
/// # use funding_csv::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Date formats tried, in order, when no custom list is configured.
///
/// A value matching none of them loads as an undated record.
pub const DEFAULT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y",
    "%d.%m.%Y",
    "%Y/%m/%d",
];

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "date",
    "startup",
    "vertical",
    "city",
    "investors",
    "round",
    "amount",
];

const SUBVERTICAL_COLUMN: &str = "subvertical";

/// Configuration for CSV ingestion.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```
/// # use funding_csv::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.investor_separator, ',');
/// ```
///
/// ## Semicolon-Delimited Export with Pipe-Joined Investors
///
/// ```
/// # use funding_csv::FromCsvConfig;
/// let config = FromCsvConfig {
///     delimiter: b';',
///     investor_separator: '|',
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `true`).
    ///
    /// Investor names are always trimmed individually after splitting,
    /// regardless of this setting.
    pub trim: bool,

    /// Maximum number of rows to load (default: 1,000,000).
    pub max_rows: usize,

    /// Separator between names in the `investors` column (default: `,`).
    pub investor_separator: char,

    /// `chrono` format strings tried in order for the `date` column.
    pub date_formats: Vec<String>,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
            investor_separator: DEFAULT_INVESTOR_SEPARATOR,
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Parse a CSV string into a record store with default configuration.
///
/// The header row is required. Columns are matched by name, in any order;
/// extra columns are ignored and `subvertical` is optional.
///
/// # Errors
///
/// - `MissingColumn`: a required column is absent
/// - `InvalidHeader`: empty or duplicated column name
/// - `ParseError`: malformed CSV (e.g. a row with the wrong number of fields)
/// - `SecurityLimit`: more than `max_rows` rows
///
/// # Examples
///
/// ```
/// use funding_csv::from_csv;
///
/// let csv = "date,startup,vertical,city,investors,round,amount\n\
///            2020-01-09,BYJU'S,EdTech,Bengaluru,Tiger Global,Series F,1600\n\
///            not-a-date,Shuttl,Transport,Gurgaon,,Series C,\n";
///
/// let store = from_csv(csv).unwrap();
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.records()[0].year(), Some(2020));
/// assert_eq!(store.records()[1].date(), None);
/// assert_eq!(store.records()[1].amount(), None);
/// ```
pub fn from_csv(csv: &str) -> Result<RecordStore> {
    from_csv_with_config(csv, FromCsvConfig::default())
}

/// Parse a CSV string with custom configuration.
pub fn from_csv_with_config(csv: &str, config: FromCsvConfig) -> Result<RecordStore> {
    from_csv_reader_with_config(csv.as_bytes(), config)
}

/// Read a CSV table from any `Read` source with default configuration.
///
/// # Examples
///
/// ```no_run
/// use funding_csv::from_csv_reader;
/// use std::fs::File;
///
/// let file = File::open("startup_cleaned.csv").unwrap();
/// let store = from_csv_reader(file).unwrap();
/// ```
pub fn from_csv_reader<R: Read>(reader: R) -> Result<RecordStore> {
    from_csv_reader_with_config(reader, FromCsvConfig::default())
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    date: usize,
    startup: usize,
    vertical: usize,
    subvertical: Option<usize>,
    city: usize,
    investors: usize,
    round: usize,
    amount: usize,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let names: Vec<&str> = headers.iter().map(str::trim).collect();

        for (position, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(CsvError::InvalidHeader {
                    position,
                    reason: "empty column name".to_string(),
                });
            }
            if names[..position].contains(name) {
                return Err(CsvError::InvalidHeader {
                    position,
                    reason: format!("duplicate column '{}'", name),
                });
            }
        }

        let find = |column: &str| names.iter().position(|n| *n == column);
        let require = |column: &str| find(column).ok_or_else(|| CsvError::MissingColumn(column.to_string()));

        Ok(Self {
            date: require("date")?,
            startup: require("startup")?,
            vertical: require("vertical")?,
            subvertical: find(SUBVERTICAL_COLUMN),
            city: require("city")?,
            investors: require("investors")?,
            round: require("round")?,
            amount: require("amount")?,
        })
    }
}

/// Read a CSV table from any `Read` source with custom configuration.
///
/// Rows are loaded in source order. Unparseable dates and amounts load as
/// missing; a summary of how many were dropped is logged at `info` level.
pub fn from_csv_reader_with_config<R: Read>(reader: R, config: FromCsvConfig) -> Result<RecordStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.headers()?)?;
    debug!(?columns, "resolved CSV columns");

    let mut records = Vec::new();
    let mut undated = 0usize;
    let mut without_amount = 0usize;

    for (record_idx, result) in csv_reader.records().enumerate() {
        // Security: Limit row count to prevent memory exhaustion
        if record_idx >= config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: record_idx + 1,
            });
        }

        let row = result.map_err(|e| CsvError::ParseError {
            // Header occupies line 1
            line: e
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(record_idx + 2),
            message: e.to_string(),
        })?;

        if row.is_empty() {
            continue;
        }

        let cell = |idx: usize| row.get(idx).unwrap_or("");

        let raw_date = cell(columns.date);
        let date = parse_date(raw_date, &config.date_formats);
        if date.is_none() {
            undated += 1;
            if !raw_date.trim().is_empty() {
                debug!(line = record_idx + 2, value = raw_date, "unparseable date");
            }
        }

        let amount = parse_amount(cell(columns.amount));
        if amount.is_none() {
            without_amount += 1;
        }

        let record = FundingRecord::builder(cell(columns.startup))
            .date(date)
            .investors(cell(columns.investors))
            .round(cell(columns.round))
            .vertical(cell(columns.vertical))
            .subvertical(columns.subvertical.map(cell).unwrap_or(""))
            .city(cell(columns.city))
            .maybe_amount(amount)
            .build();
        records.push(record);
    }

    info!(
        rows = records.len(),
        undated,
        without_amount,
        "loaded funding records"
    );

    Ok(RecordStore::new(records, config.investor_separator))
}

/// Parse a date cell, trying each format in order.
///
/// Formats with a time component are matched against the full text and the
/// time is discarded.
///
/// # Examples
///
/// ```text
/// parse_date("2020-01-09", &formats) == NaiveDate::from_ymd_opt(2020, 1, 9)
/// parse_date("09/01/2020", &formats) == NaiveDate::from_ymd_opt(2020, 9, 1)   // month first
/// parse_date("", &formats) == None
/// ```
fn parse_date(field: &str, formats: &[String]) -> Option<NaiveDate> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    formats.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(trimmed, fmt)
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(trimmed, fmt)
                    .ok()
                    .map(|dt| dt.date())
            })
    })
}

/// Parse an amount cell. Empty, non-numeric, non-finite and negative values
/// are missing.
fn parse_amount(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "date,startup,vertical,city,investors,round,amount";

    fn formats() -> Vec<String> {
        FromCsvConfig::default().date_formats
    }

    // ==================== FromCsvConfig tests ====================

    #[test]
    fn test_from_csv_config_default() {
        let config = FromCsvConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(config.trim);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
        assert_eq!(config.investor_separator, ',');
        assert_eq!(config.date_formats.len(), DEFAULT_DATE_FORMATS.len());
    }

    // ==================== parse_date tests ====================

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            parse_date("2020-01-09", &formats()),
            NaiveDate::from_ymd_opt(2020, 1, 9)
        );
    }

    #[test]
    fn test_parse_date_with_time() {
        assert_eq!(
            parse_date("2020-01-09 00:00:00", &formats()),
            NaiveDate::from_ymd_opt(2020, 1, 9)
        );
    }

    #[test]
    fn test_parse_date_month_first_slashes() {
        assert_eq!(
            parse_date("09/01/2020", &formats()),
            NaiveDate::from_ymd_opt(2020, 9, 1)
        );
    }

    #[test]
    fn test_parse_date_invalid_is_none() {
        assert_eq!(parse_date("31/31/2019", &formats()), None);
        assert_eq!(parse_date("not a date", &formats()), None);
        assert_eq!(parse_date("   ", &formats()), None);
    }

    #[test]
    fn test_parse_date_custom_formats() {
        let formats = vec!["%d-%b-%Y".to_string()];
        assert_eq!(
            parse_date("05-Mar-2021", &formats),
            NaiveDate::from_ymd_opt(2021, 3, 5)
        );
        assert_eq!(parse_date("2021-03-05", &formats), None);
    }

    // ==================== parse_amount tests ====================

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1600"), Some(1600.0));
        assert_eq!(parse_amount(" 3.25 "), Some(3.25));
        assert_eq!(parse_amount("0"), Some(0.0));
    }

    #[test]
    fn test_parse_amount_missing() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("undisclosed"), None);
        assert_eq!(parse_amount("-5"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    // ==================== Loading tests ====================

    #[test]
    fn test_from_csv_basic() {
        let csv = format!("{HEADER}\n2021-04-01,Cred,Fintech,Bengaluru,\"Sequoia, Tiger Global\",Series D,215\n");
        let store = from_csv(&csv).unwrap();
        assert_eq!(store.len(), 1);
        let record = &store.records()[0];
        assert_eq!(record.startup(), "Cred");
        assert_eq!(record.investors(), Some("Sequoia, Tiger Global"));
        assert_eq!(record.month(), Some(4));
        assert_eq!(record.amount(), Some(215.0));
        assert_eq!(record.subvertical(), "");
    }

    #[test]
    fn test_columns_in_any_order_with_extras() {
        let csv = "amount,round,investors,city,vertical,startup,date,notes\n\
                   50,Seed,Accel,Pune,SaaS,Acme,2018-05-06,ignored\n";
        let store = from_csv(csv).unwrap();
        let record = &store.records()[0];
        assert_eq!(record.startup(), "Acme");
        assert_eq!(record.city(), "Pune");
        assert_eq!(record.amount(), Some(50.0));
    }

    #[test]
    fn test_missing_required_column() {
        let csv = "date,vertical,city,investors,round,amount\n";
        let err = from_csv(csv).unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "startup"));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let csv = format!("{HEADER},city\n");
        let err = from_csv(&csv).unwrap_err();
        assert!(matches!(err, CsvError::InvalidHeader { position: 7, .. }));
    }

    #[test]
    fn test_empty_column_name_rejected() {
        let csv = format!("{HEADER},\n");
        let err = from_csv(&csv).unwrap_err();
        assert!(matches!(err, CsvError::InvalidHeader { .. }));
    }

    #[test]
    fn test_width_mismatch_is_parse_error() {
        let csv = format!("{HEADER}\n2021-04-01,Cred,Fintech\n");
        let err = from_csv(&csv).unwrap_err();
        match err {
            CsvError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_is_empty_store() {
        let store = from_csv(&format!("{HEADER}\n")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_max_rows_limit_enforcement() {
        let mut csv = format!("{HEADER}\n");
        for i in 0..5 {
            csv.push_str(&format!("2020-01-01,S{i},V,C,I,R,1\n"));
        }
        let config = FromCsvConfig {
            max_rows: 3,
            ..Default::default()
        };
        let err = from_csv_with_config(&csv, config).unwrap_err();
        assert!(matches!(err, CsvError::SecurityLimit { limit: 3, actual: 4 }));
    }

    #[test]
    fn test_custom_delimiter_and_separator() {
        let csv = "date;startup;vertical;city;investors;round;amount\n\
                   2020-01-01;Acme;SaaS;Pune;A | B;Seed;1\n";
        let config = FromCsvConfig {
            delimiter: b';',
            investor_separator: '|',
            ..Default::default()
        };
        let store = from_csv_with_config(csv, config).unwrap();
        assert_eq!(store.investor_separator(), '|');
        assert_eq!(store.distinct_investors(), vec!["A", "B"]);
    }

    #[test]
    fn test_trim_disabled_keeps_padding() {
        let csv = format!("{HEADER}\n2020-01-01, Acme ,SaaS,Pune,A,Seed,1\n");
        let config = FromCsvConfig {
            trim: false,
            ..Default::default()
        };
        let store = from_csv_with_config(&csv, config).unwrap();
        assert_eq!(store.records()[0].startup(), " Acme ");
    }
}
