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

use std::borrow::Cow;

use log::trace;

use super::{
    bd_phone_number::BdPhoneNumber,
    enums::{CountryCodeSource, Operator, PhoneNumberFormat},
    errors::ParseError,
    helper_constants::{
        COUNTRY_CODE, COUNTRY_CODE_STR, NATIONAL_PREFIX, NSN_LEADING_DIGIT, NSN_LENGTH,
        PLUS_CHARS, PLUS_SIGN, VISUAL_SEPARATORS,
    },
    helper_functions::{format_national_number, prefix_number_with_country_calling_code},
    phone_number_regexps::PhoneNumberRegExps,
};
use crate::string_util::{is_whitespace_char, retain_ascii_digits, strip_cow_prefix, strip_whitespace};

// Helper type for Result
pub type Result<T> = std::result::Result<T, ParseError>;

pub struct PhoneNormalizer {
    /// Helper struct holding precompiled regular expressions.
    reg_exps: PhoneNumberRegExps,
}

impl PhoneNormalizer {
    pub fn new() -> Self {
        Self { reg_exps: PhoneNumberRegExps::new() }
    }

    /// Checks whether `phone` is a Bangladeshi mobile number.
    ///
    /// All whitespace is ignored. What remains must be an optional `+880` or
    /// `880`, followed by `1`, an operator digit 3-9 and exactly eight more
    /// ASCII digits. Numbers written with the national prefix `0` are
    /// rejected.
    pub fn validate(&self, phone: &str) -> bool {
        let phone = strip_whitespace(phone);
        self.reg_exps.valid_phone_number_pattern.is_match(&phone)
    }

    /// Formats `phone` as `+880 1XXX-XXXXXX`.
    ///
    /// Every character that is not an ASCII digit is dropped first. The
    /// remaining digits must be an optional `880`, then `1` and nine more
    /// digits; the operator digit is not checked. If they are not, `phone`
    /// is returned untouched.
    pub fn format<'a>(&self, phone: &'a str) -> Cow<'a, str> {
        let digits = retain_ascii_digits(phone);
        let Some(captures) = self.reg_exps.formattable_phone_number_pattern.captures(&digits) else {
            trace!("Number '{phone}' can't be formatted, returning it as is");
            return Cow::Borrowed(phone);
        };

        let mut formatted_number = fast_cat::concat_str!("1", &captures[1], "-", &captures[2]);
        prefix_number_with_country_calling_code(
            COUNTRY_CODE,
            PhoneNumberFormat::International,
            &mut formatted_number,
        );
        Cow::Owned(formatted_number)
    }

    /// Parses `phone` into a [`BdPhoneNumber`].
    ///
    /// Accepts everything `validate` accepts, and additionally digits of
    /// other scripts (e.g. Bengali `০`-`৯`), a full-width plus sign and
    /// common separators such as `-`, `.`, `(`, `)` and `/`.
    pub fn parse(&self, phone: &str) -> Result<BdPhoneNumber> {
        self.parse_helper(phone)
            .inspect_err(|err| trace!("Number '{phone}' rejected: {err}"))
    }

    /// Renders a parsed number in the requested format.
    pub fn format_number(&self, phone_number: &BdPhoneNumber, number_format: PhoneNumberFormat) -> String {
        format_national_number(phone_number.national_significant_number(), number_format)
    }

    fn parse_helper(&self, phone: &str) -> Result<BdPhoneNumber> {
        let normalized = dec_from_char::normalize_decimals(phone);
        let normalized: &str = &normalized;
        let cleaned: String = normalized
            .chars()
            .filter(|c| !is_whitespace_char(*c) && !VISUAL_SEPARATORS.contains(*c))
            .map(|c| if PLUS_CHARS.contains(c) { '+' } else { c })
            .collect();
        if cleaned.is_empty() {
            return Err(ParseError::NotANumber);
        }

        let (national_number, country_code_source) =
            Self::extract_country_code(Cow::Owned(cleaned))?;
        if !national_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParseError::NotANumber);
        }
        if national_number.starts_with(NATIONAL_PREFIX) {
            return Err(ParseError::NationalPrefixNotAllowed);
        }
        if !national_number.is_empty() && !national_number.starts_with(NSN_LEADING_DIGIT) {
            return Err(ParseError::InvalidSubscriberStart);
        }
        if national_number.len() < NSN_LENGTH {
            return Err(ParseError::TooShortNsn);
        }
        if national_number.len() > NSN_LENGTH {
            return Err(ParseError::TooLongNsn);
        }

        let operator_digit = national_number.as_bytes()[1] - b'0';
        let operator = Operator::from_operator_digit(operator_digit)
            .ok_or(ParseError::InvalidOperator(operator_digit))?;
        trace!("Number '{phone}' parsed, operator: {}", operator.name());

        Ok(BdPhoneNumber::new(
            national_number.into_owned(),
            country_code_source,
            operator,
        ))
    }

    /// Strips `+880` or `880` from the start of the number and reports
    /// which of them was present.
    fn extract_country_code(number: Cow<'_, str>) -> Result<(Cow<'_, str>, CountryCodeSource)> {
        match strip_cow_prefix(number, PLUS_SIGN) {
            Ok(without_plus) => strip_cow_prefix(without_plus, COUNTRY_CODE_STR)
                .map(|national_number| (national_number, CountryCodeSource::FromNumberWithPlusSign))
                .map_err(|_| ParseError::InvalidCountryCode),
            Err(number) => match strip_cow_prefix(number, COUNTRY_CODE_STR) {
                Ok(national_number) => Ok((national_number, CountryCodeSource::FromNumberWithoutPlusSign)),
                Err(number) => Ok((number, CountryCodeSource::FromDefaultCountry)),
            },
        }
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
