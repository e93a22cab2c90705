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

//! Text and JSON rendering of reports.
//!
//! Text output is meant for a terminal and uses `colored` for headings.
//! JSON output is the serde representation of the report, pretty-printed.

use crate::error::CliError;
use colored::Colorize;
use funding_core::{Distribution, Entry, FundingRecord, StoreSummary};
use funding_report::{
    CompanyReport, InvestorReport, MarketReport, MonthlySeries, ReportResponse,
};
use serde::Serialize;
use std::fmt::Display;

const RULE_WIDTH: usize = 60;

/// Serializes any report as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Formats an amount in crore, or `unknown` when absent.
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{:.2} Cr", value),
        None => "unknown".to_string(),
    }
}

fn format_year(year: Option<i32>) -> String {
    year.map_or_else(|| "unknown".to_string(), |y| y.to_string())
}

fn heading(out: &mut String, title: &str) {
    out.push_str(&format!("{}\n", "═".repeat(RULE_WIDTH).bright_blue()));
    out.push_str(&format!("{}\n", title.bright_blue().bold()));
    out.push_str(&format!("{}\n", "═".repeat(RULE_WIDTH).bright_blue()));
}

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(&format!("{}\n", title.bright_cyan().bold()));
}

fn none(out: &mut String) {
    out.push_str(&format!("  {}\n", "(none)".dimmed()));
}

fn field(out: &mut String, label: &str, value: impl Display) {
    out.push_str(&format!("  {} {}\n", format!("{}:", label).bright_cyan(), value));
}

fn ranked<V: Display>(out: &mut String, entries: &[Entry<String, V>]) {
    if entries.is_empty() {
        none(out);
    }
    for (rank, entry) in entries.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {:<32} {}\n", rank + 1, entry.key, entry.value));
    }
}

fn amounts(out: &mut String, distribution: &Distribution<String, f64>) {
    if distribution.is_empty() {
        none(out);
    }
    for (key, value) in distribution.iter() {
        out.push_str(&format!("  {:<32} {}\n", key, format_amount(Some(*value))));
    }
}

fn record_rows(out: &mut String, rows: &[FundingRecord]) {
    if rows.is_empty() {
        none(out);
    }
    for row in rows {
        let date = row
            .date()
            .map_or_else(|| "unknown".to_string(), |d| d.to_string());
        out.push_str(&format!(
            "  {:<10}  {:<16} {:<18} {:<14} {}\n",
            date,
            row.startup(),
            row.round(),
            format_amount(row.amount()),
            row.investors().unwrap_or("")
        ));
    }
}

/// Renders the company lens.
pub fn render_company(report: &CompanyReport) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("Company: {}", report.startup));
    field(&mut out, "Total funding", format_amount(Some(report.total_funding)));
    field(&mut out, "Rounds", report.round_count);
    field(&mut out, "First funded", format_year(report.first_year));
    field(&mut out, "Last funded", format_year(report.last_year));
    section(&mut out, "Funding rounds");
    record_rows(&mut out, &report.detail_rows);
    out
}

/// Renders the investor lens.
pub fn render_investor(report: &InvestorReport) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("Investor: {}", report.investor));
    field(&mut out, "Match", report.match_mode);
    field(&mut out, "Deals", report.deal_count);

    section(&mut out, "Most recent investments");
    record_rows(&mut out, &report.recent);

    section(&mut out, "Biggest investments");
    let top: Vec<Entry<String, String>> = report
        .top_startups
        .iter()
        .map(|e| Entry::new(e.key.clone(), format_amount(Some(e.value))))
        .collect();
    ranked(&mut out, &top);

    section(&mut out, "Sectors");
    amounts(&mut out, &report.sector_distribution);
    section(&mut out, "Stages");
    amounts(&mut out, &report.stage_distribution);
    section(&mut out, "Cities");
    amounts(&mut out, &report.city_distribution);

    section(&mut out, "Year over year");
    if report.year_over_year.is_empty() {
        none(&mut out);
    }
    for entry in &report.year_over_year {
        out.push_str(&format!("  {}  {}\n", entry.key, format_amount(Some(entry.value))));
    }

    section(&mut out, "Similar investors");
    ranked(&mut out, &report.similar_investors);
    out
}

fn timeline(out: &mut String, series: &MonthlySeries) {
    section(out, &format!("Month on month ({})", series.mode));
    if series.points.is_empty() {
        none(out);
    }
    for point in &series.points {
        out.push_str(&format!("  {:<8} {}\n", point.label, point.value));
    }
}

/// Renders the market lens.
pub fn render_market(report: &MarketReport) -> String {
    let mut out = String::new();
    let totals = &report.totals;
    heading(&mut out, "Market overview");
    field(&mut out, "Total funding", format_amount(Some(totals.total_funding)));
    field(&mut out, "Max funding", format_amount(totals.max_funding));
    field(
        &mut out,
        "Average funding",
        format_amount(totals.average_funding.map(|avg| avg as f64)),
    );
    field(&mut out, "Funded startups", totals.funded_startups);

    timeline(&mut out, &report.monthly);

    section(&mut out, "Top sectors by deals");
    ranked(&mut out, &report.sectors_by_count);

    let by_amount = |entries: &[Entry<String, f64>]| -> Vec<Entry<String, String>> {
        entries
            .iter()
            .map(|e| Entry::new(e.key.clone(), format_amount(Some(e.value))))
            .collect()
    };
    section(&mut out, "Top sectors by amount");
    ranked(&mut out, &by_amount(&report.sectors_by_amount));
    section(&mut out, "Top cities");
    ranked(&mut out, &by_amount(&report.top_cities));
    section(&mut out, "Top startups");
    ranked(&mut out, &by_amount(&report.top_startups));
    section(&mut out, "Top investors by deals");
    ranked(&mut out, &report.top_investors);
    out
}

/// Renders whichever report a response carries.
pub fn render_response(response: &ReportResponse) -> String {
    match response {
        ReportResponse::Company(report) => render_company(report),
        ReportResponse::Investor(report) => render_investor(report),
        ReportResponse::Market(report) => render_market(report),
    }
}

/// Renders dataset load diagnostics.
pub fn render_summary(path: &str, summary: &StoreSummary) -> String {
    let mut out = String::new();
    heading(&mut out, &format!("Dataset: {}", path));
    field(&mut out, "Rows", summary.rows);
    field(&mut out, "Startups", summary.startups);
    field(&mut out, "Investors", summary.investors);
    field(&mut out, "Dated rows", summary.dated_rows);
    field(&mut out, "Rows with amount", summary.rows_with_amount);
    let span = match (summary.first_date, summary.last_date) {
        (Some(first), Some(last)) => format!("{} to {}", first, last),
        _ => "unknown".to_string(),
    };
    field(&mut out, "Date range", span);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use funding_core::RecordStore;
    use funding_report::{company_report, market_report, MonthlyMode};

    fn store() -> RecordStore {
        RecordStore::from_records(vec![
            FundingRecord::builder("Ola")
                .date(NaiveDate::from_ymd_opt(2021, 3, 9))
                .investors("SoftBank")
                .round("Series J")
                .vertical("Transport")
                .city("Bengaluru")
                .amount(120.5)
                .build(),
            FundingRecord::builder("Ola").round("Seed").build(),
        ])
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Some(12.0)), "12.00 Cr");
        assert_eq!(format_amount(None), "unknown");
    }

    #[test]
    fn test_render_company() {
        colored::control::set_override(false);
        let text = render_company(&company_report(&store(), "Ola"));
        assert!(text.contains("Company: Ola"));
        assert!(text.contains("Total funding: 120.50 Cr"));
        assert!(text.contains("Rounds: 2"));
        assert!(text.contains("First funded: 2021"));
        assert!(text.contains("2021-03-09"));
        assert!(text.contains("Seed"));
    }

    #[test]
    fn test_render_unknown_years() {
        colored::control::set_override(false);
        let text = render_company(&company_report(&store(), "Nobody"));
        assert!(text.contains("First funded: unknown"));
        assert!(text.contains("(none)"));
    }

    #[test]
    fn test_render_market() {
        colored::control::set_override(false);
        let text = render_market(&market_report(&store(), MonthlyMode::Count));
        assert!(text.contains("Month on month (count)"));
        assert!(text.contains("3-2021"));
        assert!(text.contains("Bengaluru"));
    }

    #[test]
    fn test_render_summary_lines() {
        colored::control::set_override(false);
        let text = render_summary("data.csv", &store().summary());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "═".repeat(RULE_WIDTH));
        assert_eq!(lines[1], "Dataset: data.csv");
        assert_eq!(lines[3], "  Rows: 2");
        assert_eq!(lines[8], "  Date range: 2021-03-09 to 2021-03-09");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_empty_sections() {
        colored::control::set_override(false);
        let empty = RecordStore::from_records(Vec::new());
        let text = render_market(&market_report(&empty, MonthlyMode::Count));
        assert!(text.contains("Month on month (count)\n  (none)\n"));
        assert!(text.contains("  Max funding: unknown\n"));
    }

    #[test]
    fn test_to_json_is_pretty() {
        let json = to_json(&company_report(&store(), "Ola")).unwrap();
        assert!(json.contains("\n  \"startup\": \"Ola\""));
    }
}
