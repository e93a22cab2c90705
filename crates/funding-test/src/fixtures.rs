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

//! A small Indian startup funding table with known aggregates.
//!
//! | # | date       | startup  | investors               | amount |
//! |---|------------|----------|-------------------------|--------|
//! | 0 | 2019-03-15 | Ola      | SoftBank, Tiger Global  | 300    |
//! | 1 | 2020-06-20 | Ola      | SoftBank                | 200    |
//! | 2 | 2018-11-02 | Swiggy   | Naspers, Accel          | 150    |
//! | 3 | 2020-01-10 | Swiggy   | Naspers, Tencent        | 400    |
//! | 4 | 2019-03-01 | Zomato   | Info Edge, Sequoia      | 250    |
//! | 5 | 2017-08-21 | Paytm    | SoftBank, Alibaba       | 1000   |
//! | 6 | 2019-07-04 | Razorpay | Sequoia, Tiger Global   | 75     |
//! | 7 | (invalid)  | Razorpay | Y Combinator            | (none) |
//! | 8 | 2020-06-05 | Meesho   | AccelPartners           | 125    |
//! | 9 | 2016-02-12 | Dunzo    | Google, Accel           | 12     |
//! |10 | 2019-03-20 | Zomato   | Ant Financial           | 150    |

use crate::builders::dated;
use funding_core::{FundingRecord, RecordStore};

/// Number of rows in the sample table.
pub const SAMPLE_ROWS: usize = 11;

/// The sample table as CSV text, in the column layout of the source dataset.
pub const SAMPLE_CSV: &str = "\
date,startup,vertical,subvertical,city,investors,round,amount
2019-03-15,Ola,Transport,Cab Aggregator,Bengaluru,\"SoftBank, Tiger Global\",Series H,300
2020-06-20,Ola,Transport,Cab Aggregator,Bengaluru,SoftBank,Series I,200
2018-11-02,Swiggy,Food Tech,Delivery,Bengaluru,\"Naspers, Accel\",Series G,150
2020-01-10,Swiggy,Food Tech,Delivery,Bengaluru,\"Naspers, Tencent\",Series I,400
2019-03-01,Zomato,Food Tech,Restaurant Discovery,Gurgaon,\"Info Edge, Sequoia\",Series F,250
2017-08-21,Paytm,Fintech,Payments,Noida,\"SoftBank, Alibaba\",Private Equity,1000
2019-07-04,Razorpay,Fintech,Payments,Bengaluru,\"Sequoia, Tiger Global\",Series C,75
31/31/2019,Razorpay,Fintech,Payments,Bengaluru,Y Combinator,Seed,
2020-06-05,Meesho,E-Commerce,Social Commerce,Bengaluru,AccelPartners,Series D,125
2016-02-12,Dunzo,Logistics,Hyperlocal,Bengaluru,\"Google, Accel\",Series A,12
2019-03-20,Zomato,Food Tech,Restaurant Discovery,Gurgaon,Ant Financial,Series G,150
";

/// The sample table as records, in CSV row order.
pub fn sample_records() -> Vec<FundingRecord> {
    vec![
        dated("Ola", 2019, 3, 15)
            .investors("SoftBank, Tiger Global")
            .round("Series H")
            .vertical("Transport")
            .subvertical("Cab Aggregator")
            .city("Bengaluru")
            .amount(300.0)
            .build(),
        dated("Ola", 2020, 6, 20)
            .investors("SoftBank")
            .round("Series I")
            .vertical("Transport")
            .subvertical("Cab Aggregator")
            .city("Bengaluru")
            .amount(200.0)
            .build(),
        dated("Swiggy", 2018, 11, 2)
            .investors("Naspers, Accel")
            .round("Series G")
            .vertical("Food Tech")
            .subvertical("Delivery")
            .city("Bengaluru")
            .amount(150.0)
            .build(),
        dated("Swiggy", 2020, 1, 10)
            .investors("Naspers, Tencent")
            .round("Series I")
            .vertical("Food Tech")
            .subvertical("Delivery")
            .city("Bengaluru")
            .amount(400.0)
            .build(),
        dated("Zomato", 2019, 3, 1)
            .investors("Info Edge, Sequoia")
            .round("Series F")
            .vertical("Food Tech")
            .subvertical("Restaurant Discovery")
            .city("Gurgaon")
            .amount(250.0)
            .build(),
        dated("Paytm", 2017, 8, 21)
            .investors("SoftBank, Alibaba")
            .round("Private Equity")
            .vertical("Fintech")
            .subvertical("Payments")
            .city("Noida")
            .amount(1000.0)
            .build(),
        dated("Razorpay", 2019, 7, 4)
            .investors("Sequoia, Tiger Global")
            .round("Series C")
            .vertical("Fintech")
            .subvertical("Payments")
            .city("Bengaluru")
            .amount(75.0)
            .build(),
        FundingRecord::builder("Razorpay")
            .investors("Y Combinator")
            .round("Seed")
            .vertical("Fintech")
            .subvertical("Payments")
            .city("Bengaluru")
            .build(),
        dated("Meesho", 2020, 6, 5)
            .investors("AccelPartners")
            .round("Series D")
            .vertical("E-Commerce")
            .subvertical("Social Commerce")
            .city("Bengaluru")
            .amount(125.0)
            .build(),
        dated("Dunzo", 2016, 2, 12)
            .investors("Google, Accel")
            .round("Series A")
            .vertical("Logistics")
            .subvertical("Hyperlocal")
            .city("Bengaluru")
            .amount(12.0)
            .build(),
        dated("Zomato", 2019, 3, 20)
            .investors("Ant Financial")
            .round("Series G")
            .vertical("Food Tech")
            .subvertical("Restaurant Discovery")
            .city("Gurgaon")
            .amount(150.0)
            .build(),
    ]
}

/// The sample table wrapped in a store.
pub fn sample_store() -> RecordStore {
    RecordStore::from_records(sample_records())
}
