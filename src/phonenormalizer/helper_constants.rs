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

/// Country calling code of Bangladesh.
pub const COUNTRY_CODE: i32 = 880;
pub const COUNTRY_CODE_STR: &str = "880";
pub const REGION_CODE: &str = "BD";

// The national significant number of a mobile number: the leading `1`,
// the operator digit and eight subscriber digits.
pub const NSN_LENGTH: usize = 10;
// Length of the "1XXX" group printed before the hyphen.
pub const NSN_FIRST_GROUP_LENGTH: usize = 4;
pub const NSN_LEADING_DIGIT: char = '1';
pub const NATIONAL_PREFIX: &str = "0";

pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHARS: &str = "+\u{FF0B}";
pub const RFC3966_PREFIX: &str = "tel:";

// Punctuation people commonly put between digit groups. Whitespace is
// handled separately.
pub const VISUAL_SEPARATORS: &str = "-.()/\u{2010}\u{2011}\u{2012}\u{2013}\u{2014}\u{2212}";

// `\d` in the regex crate is Unicode aware, the patterns below spell out
// `[0-9]` so that only ASCII digits are accepted.

/// Optional `+880` or `880`, a leading `1`, an operator digit 3-9 and
/// eight more digits.
pub const VALID_PHONE_NUMBER: &str = r"(?:\+880|880)?1[3-9][0-9]{8}";

/// Optional `880`, a leading `1`, then the 3 and 6 digit display groups.
/// The operator digit is not restricted here.
pub const FORMATTABLE_PHONE_NUMBER: &str = r"(?:880)?1([0-9]{3})([0-9]{6})";
