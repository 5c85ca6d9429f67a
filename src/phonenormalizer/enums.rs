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

use strum::EnumIter;

/// Defines the standardized formats a Bangladeshi mobile number can be
/// rendered in.
///
/// For example, the number `01712345678` would be:
/// - **E164**: `+8801712345678`
/// - **INTERNATIONAL**: `+880 1712-345678`
/// - **NATIONAL**: `01712-345678`
/// - **RFC3966**: `tel:+880-1712-345678`
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneNumberFormat {
    /// **E.164 format.**
    /// No spaces or symbols, always starting with `+880`.
    /// Example: `+8801712345678`.
    E164,
    /// **International format.**
    /// The canonical display form, also produced by `format`.
    /// Example: `+880 1712-345678`.
    International,
    /// **National format.**
    /// Used for dialing inside Bangladesh, with the national prefix `0`.
    /// Example: `01712-345678`.
    National,
    /// **RFC3966 format.**
    /// Starts with "tel:" and uses hyphens as separators.
    /// Example: `tel:+880-1712-345678`.
    RFC3966,
}

/// Describes how the country calling code was present in the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The input started with `+880`.
    FromNumberWithPlusSign,
    /// The input started with a bare `880`.
    FromNumberWithoutPlusSign,
    /// The input had no country code, Bangladesh was assumed.
    FromDefaultCountry,
}

/// Mobile network operators, identified by the operator digit that follows
/// the leading `1` of the national number.
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Prefixes 013 and 017.
    Grameenphone,
    /// Prefixes 014 and 019.
    Banglalink,
    /// Prefix 015.
    Teletalk,
    /// Prefix 016.
    Airtel,
    /// Prefix 018.
    Robi,
}

impl Operator {
    /// Returns the operator owning the given operator digit, `None` for
    /// digits that are not assigned (0, 1, 2).
    pub fn from_operator_digit(digit: u8) -> Option<Self> {
        match digit {
            3 | 7 => Some(Operator::Grameenphone),
            4 | 9 => Some(Operator::Banglalink),
            5 => Some(Operator::Teletalk),
            6 => Some(Operator::Airtel),
            8 => Some(Operator::Robi),
            _ => None,
        }
    }

    /// Two-digit prefixes (leading `1` plus operator digit) of this operator.
    pub fn prefixes(self) -> &'static [&'static str] {
        match self {
            Operator::Grameenphone => &["13", "17"],
            Operator::Banglalink => &["14", "19"],
            Operator::Teletalk => &["15"],
            Operator::Airtel => &["16"],
            Operator::Robi => &["18"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Grameenphone => "Grameenphone",
            Operator::Banglalink => "Banglalink",
            Operator::Teletalk => "Teletalk",
            Operator::Airtel => "Airtel",
            Operator::Robi => "Robi",
        }
    }
}
