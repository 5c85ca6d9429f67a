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

use super::{
    PhoneNumberFormat,
    helper_constants::{
        COUNTRY_CODE, NATIONAL_PREFIX, NSN_FIRST_GROUP_LENGTH, PLUS_SIGN, RFC3966_PREFIX,
    },
};

/// A helper function that is used by `format` and `format_number`.
pub(super) fn prefix_number_with_country_calling_code(
    country_calling_code: i32,
    number_format: PhoneNumberFormat,
    formatted_number: &mut String,
) {
    let mut buf = itoa::Buffer::new();
    let country_calling_code_str = buf.format(country_calling_code);

    // we anyway allocate a new string in concatenation, so do it once
    // with capacity of resulting string
    let new_str = match number_format {
        PhoneNumberFormat::E164 => {
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, formatted_number.as_str())
        }
        PhoneNumberFormat::International => {
            fast_cat::concat_str!(PLUS_SIGN, country_calling_code_str, " ", formatted_number.as_str())
        }
        PhoneNumberFormat::RFC3966 => fast_cat::concat_str!(
            RFC3966_PREFIX,
            PLUS_SIGN,
            country_calling_code_str,
            "-",
            formatted_number.as_str()
        ),
        PhoneNumberFormat::National => return,
    };
    *formatted_number = new_str;
}

/// Formats a ten digit national number (`1XXXXXXXXX`), country code included
/// for every format except `National`.
pub(super) fn format_national_number(national_number: &str, number_format: PhoneNumberFormat) -> String {
    let (first_group, second_group) = national_number.split_at(NSN_FIRST_GROUP_LENGTH);
    let mut formatted_number = match number_format {
        PhoneNumberFormat::E164 => national_number.to_owned(),
        PhoneNumberFormat::National => {
            fast_cat::concat_str!(NATIONAL_PREFIX, first_group, "-", second_group)
        }
        PhoneNumberFormat::International | PhoneNumberFormat::RFC3966 => {
            fast_cat::concat_str!(first_group, "-", second_group)
        }
    };
    prefix_number_with_country_calling_code(COUNTRY_CODE, number_format, &mut formatted_number);
    formatted_number
}
