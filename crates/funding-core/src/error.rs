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

//! Error types for the funding analytics core.
//!
//! Aggregations never fail: missing values are excluded and empty reductions
//! are reported as `None`. Errors only arise at the edges, when an argument
//! names something that cannot exist (an unknown report mode, a startup or
//! investor that is not in the store).

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FundingErrorKind {
    /// An argument could not be interpreted (unknown mode, empty name).
    InvalidArgument,
    /// A startup or investor named by a request is not in the store.
    NotFound,
}

impl fmt::Display for FundingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "InvalidArgument"),
            Self::NotFound => write!(f, "NotFound"),
        }
    }
}

/// An error raised at the boundary of the reporting core.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct FundingError {
    /// The kind of error.
    pub kind: FundingErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl FundingError {
    /// Create a new error.
    pub fn new(kind: FundingErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(FundingErrorKind::InvalidArgument, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(FundingErrorKind::NotFound, message)
    }
}

/// Result type for funding core operations.
pub type FundingResult<T> = Result<T, FundingError>;
