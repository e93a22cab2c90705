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

//! Size limits for the ranked and truncated report views.

/// How many entries each truncated view keeps.
///
/// Distributions (sector, stage, city allocation) and time series are never
/// truncated; these limits only apply to "most recent" and "top" views.
///
/// # Examples
///
/// ```
/// use funding_report::ReportLimits;
///
/// let limits = ReportLimits {
///     market_top: 3,
///     ..Default::default()
/// };
/// assert_eq!(limits.similar_investors, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    /// Most recent investments shown for an investor (default: 5).
    pub recent_investments: usize,
    /// Biggest startups by amount for an investor (default: 5).
    pub top_startups: usize,
    /// Co-investors listed for an investor (default: 5).
    pub similar_investors: usize,
    /// Entries in each market-wide ranking (default: 10).
    pub market_top: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            recent_investments: 5,
            top_startups: 5,
            similar_investors: 5,
            market_top: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = ReportLimits::default();
        assert_eq!(limits.recent_investments, 5);
        assert_eq!(limits.top_startups, 5);
        assert_eq!(limits.similar_investors, 5);
        assert_eq!(limits.market_top, 10);
    }
}
