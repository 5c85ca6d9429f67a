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

use regex::Regex;

use super::helper_constants::{FORMATTABLE_PHONE_NUMBER, VALID_PHONE_NUMBER};

/// Wraps a pattern so that it only matches the whole input.
fn full_match_pattern(pattern: &str) -> String {
    fast_cat::concat_str!("^(?:", pattern, ")$")
}

pub(super) struct PhoneNumberRegExps {
    /// Whitespace-free input accepted by `validate`.
    pub valid_phone_number_pattern: Regex,

    /// Digit-only input accepted by `format`. Group 1 holds the three digits
    /// after the leading `1`, group 2 the remaining six.
    pub formattable_phone_number_pattern: Regex,
}

impl PhoneNumberRegExps {
    pub fn new() -> Self {
        // patterns are constants, failing here is a bug in this crate
        Self {
            valid_phone_number_pattern: Regex::new(
                &full_match_pattern(VALID_PHONE_NUMBER)
            ).unwrap(),
            formattable_phone_number_pattern: Regex::new(
                &full_match_pattern(FORMATTABLE_PHONE_NUMBER)
            ).unwrap(),
        }
    }
}
