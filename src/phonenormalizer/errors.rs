// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Reasons a string could not be parsed as a Bangladeshi mobile number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Not a number")]
    NotANumber,
    /// A `+` sign was followed by something other than `880`.
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("National prefix 0 is not allowed, the number must start with 1")]
    NationalPrefixNotAllowed,
    #[error("National number must start with 1")]
    InvalidSubscriberStart,
    #[error("Too short nsn")]
    TooShortNsn,
    #[error("Too long nsn")]
    TooLongNsn,
    /// The digit after the leading `1` is not assigned to any operator.
    #[error("Invalid operator digit: {0}")]
    InvalidOperator(u8),
}
