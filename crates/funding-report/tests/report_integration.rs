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

//! End-to-end report checks over the sample funding table.

use funding_core::Entry;
use funding_report::{
    company_report, dispatch, investor_report, investor_report_with, market_report,
    monthly_series, InvestorMatch, MonthlyMode, ReportLimits, ReportRequest, ReportResponse,
};
use funding_test::fixtures::sample_store;

fn keys<V>(entries: &[Entry<String, V>]) -> Vec<&str> {
    entries.iter().map(|e| e.key.as_str()).collect()
}

// ==================== Company ====================

#[test]
fn test_company_ola() {
    let report = company_report(&sample_store(), "Ola");
    assert_eq!(report.total_funding, 500.0);
    assert_eq!(report.round_count, 2);
    assert_eq!(report.first_year, Some(2019));
    assert_eq!(report.last_year, Some(2020));
    assert_eq!(report.detail_rows[0].round(), "Series I");
}

#[test]
fn test_company_with_undated_round() {
    let report = company_report(&sample_store(), "Razorpay");
    assert_eq!(report.round_count, 2);
    assert_eq!(report.total_funding, 75.0);
    assert_eq!(report.first_year, Some(2019));
    assert_eq!(report.last_year, Some(2019));
    assert_eq!(report.detail_rows[1].round(), "Seed");
}

// ==================== Investor ====================

#[test]
fn test_investor_softbank() {
    let report = investor_report(&sample_store(), "SoftBank");
    assert_eq!(report.deal_count, 3);
    assert_eq!(
        report.top_startups,
        vec![
            Entry::new("Paytm".to_string(), 1000.0),
            Entry::new("Ola".to_string(), 500.0),
        ]
    );
    assert_eq!(report.sector_distribution.get(&"Transport".to_string()), Some(&500.0));
    assert_eq!(report.sector_distribution.get(&"Fintech".to_string()), Some(&1000.0));
    assert_eq!(
        report.year_over_year,
        vec![
            Entry::new(2017, 1000.0),
            Entry::new(2019, 300.0),
            Entry::new(2020, 200.0),
        ]
    );
    let recent: Vec<&str> = report.recent.iter().map(|r| r.round()).collect();
    assert_eq!(recent, vec!["Series I", "Series H", "Private Equity"]);
    assert_eq!(keys(&report.similar_investors), vec!["Tiger Global", "Alibaba"]);
}

#[test]
fn test_investor_accel_exact_vs_substring() {
    let store = sample_store();
    let exact = investor_report(&store, "Accel");
    let loose =
        investor_report_with(&store, "Accel", InvestorMatch::Substring, &ReportLimits::default());
    assert_eq!(exact.deal_count, 2);
    assert_eq!(loose.deal_count, 3);
    assert!(!keys(&exact.top_startups).contains(&"Meesho"));
    assert!(keys(&loose.top_startups).contains(&"Meesho"));
}

#[test]
fn test_investor_accel_co_investors() {
    let report = investor_report(&sample_store(), "Accel");
    assert_eq!(
        report.similar_investors,
        vec![
            Entry::new("Naspers".to_string(), 2),
            Entry::new("Tencent".to_string(), 1),
            Entry::new("Google".to_string(), 1),
        ]
    );
}

// ==================== Market ====================

#[test]
fn test_market_totals() {
    let report = market_report(&sample_store(), MonthlyMode::Amount);
    assert_eq!(report.totals.total_funding, 2662.0);
    assert_eq!(report.totals.max_funding, Some(1000.0));
    assert_eq!(report.totals.average_funding, Some(380));
    assert_eq!(report.totals.funded_startups, 7);
}

#[test]
fn test_market_counts_startup_without_known_amount() {
    let mut records = sample_store().records().to_vec();
    records.push(funding_core::FundingRecord::builder("Udaan").build());
    let store = funding_core::RecordStore::from_records(records);
    let totals = market_report(&store, MonthlyMode::Amount).totals;
    assert_eq!(totals.funded_startups, 8);
    assert_eq!(totals.average_funding, Some(380));
}

#[test]
fn test_market_monthly_series() {
    let store = sample_store();
    let amount = monthly_series(&store, MonthlyMode::Amount);
    let labels: Vec<&str> = amount.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["2-2016", "8-2017", "11-2018", "3-2019", "7-2019", "1-2020", "6-2020"]
    );
    assert_eq!(amount.points[3].value, 700.0);
    assert_eq!(amount.points[6].value, 325.0);

    let count = monthly_series(&store, MonthlyMode::Count);
    assert_eq!(count.points[3].value, 3.0);
}

#[test]
fn test_market_rankings() {
    let report = market_report(&sample_store(), MonthlyMode::Amount);
    assert_eq!(
        keys(&report.sectors_by_count),
        vec!["Food Tech", "Transport", "Fintech", "E-Commerce", "Logistics"]
    );
    let fintech = &report.sectors_by_count[2];
    assert_eq!(fintech.value, 2);
    assert_eq!(
        keys(&report.sectors_by_amount),
        vec!["Fintech", "Food Tech", "Transport", "E-Commerce", "Logistics"]
    );
    assert_eq!(keys(&report.top_cities), vec!["Bengaluru", "Noida", "Gurgaon"]);
    assert_eq!(report.top_investors.len(), 10);
    assert_eq!(
        keys(&report.top_investors[..5]),
        vec!["SoftBank", "Tiger Global", "Naspers", "Accel", "Sequoia"]
    );
    assert_eq!(report.top_startups[0], Entry::new("Paytm".to_string(), 1000.0));
}

// ==================== Dispatch ====================

#[test]
fn test_dispatch_from_json_request() {
    let store = sample_store();
    let request: ReportRequest =
        serde_json::from_str(r#"{"lens":"company","startup":"Swiggy"}"#).unwrap();
    request.validate(&store).unwrap();
    match dispatch(&store, &request) {
        ReportResponse::Company(report) => assert_eq!(report.total_funding, 550.0),
        other => panic!("expected company report, got {:?}", other.lens()),
    }
}

#[test]
fn test_market_response_json_shape() {
    let response = dispatch(
        &sample_store(),
        &ReportRequest::Market {
            mode: MonthlyMode::Count,
        },
    );
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["lens"], "market");
    assert_eq!(json["monthly"]["mode"], "count");
    assert_eq!(json["totals"]["average_funding"], 380);
    assert_eq!(json["top_cities"][0]["key"], "Bengaluru");
}
