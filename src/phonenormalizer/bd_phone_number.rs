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

use std::{fmt, hash::{Hash, Hasher}};

use super::{
    enums::{CountryCodeSource, Operator, PhoneNumberFormat},
    helper_constants::{COUNTRY_CODE, REGION_CODE},
    helper_functions::format_national_number,
};

/// A parsed and validated Bangladeshi mobile number.
///
/// Can only be obtained from [`PhoneNormalizer::parse`](super::PhoneNormalizer::parse),
/// so the national number always consists of exactly ten ASCII digits
/// starting with `1` followed by an assigned operator digit.
///
/// Two numbers are equal when they name the same subscriber, no matter how
/// the country code was written in the input.
#[derive(Debug, Clone)]
pub struct BdPhoneNumber {
    national_number: String,
    country_code_source: CountryCodeSource,
    operator: Operator,
}

impl BdPhoneNumber {
    pub(super) fn new(
        national_number: String,
        country_code_source: CountryCodeSource,
        operator: Operator,
    ) -> Self {
        Self { national_number, country_code_source, operator }
    }

    /// The ten digit national significant number, e.g. `1712345678`.
    pub fn national_significant_number(&self) -> &str {
        &self.national_number
    }

    pub fn country_code(&self) -> i32 {
        COUNTRY_CODE
    }

    pub fn region_code(&self) -> &'static str {
        REGION_CODE
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
    }

    /// The digit right after the leading `1`, in range 3-9.
    pub fn operator_digit(&self) -> u8 {
        self.national_number.as_bytes()[1] - b'0'
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }
}

impl PartialEq for BdPhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.national_number == other.national_number
    }
}

impl Eq for BdPhoneNumber {}

impl Hash for BdPhoneNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.national_number.hash(state);
    }
}

/// Displays the number in international format, `+880 1XXX-XXXXXX`.
impl fmt::Display for BdPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_national_number(
            &self.national_number,
            PhoneNumberFormat::International,
        ))
    }
}
