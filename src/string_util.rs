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

/// Whitespace as understood by user input: Unicode white space plus the
/// zero width no-break space (BOM), except NEL (U+0085).
pub fn is_whitespace_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// Removes all whitespace characters. Borrows the input if there is
/// nothing to remove.
pub fn strip_whitespace(s: &str) -> Cow<'_, str> {
    if s.chars().any(is_whitespace_char) {
        Cow::Owned(s.chars().filter(|c| !is_whitespace_char(*c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Keeps only ASCII digits `0-9`.
pub fn retain_ascii_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Strips prefix of given string Cow. Returns `Ok` with the rest if
/// prefix found and stripped, otherwise gives back the untouched value
/// as `Err`.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Result<Cow<'a, str>, Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(Cow::Borrowed).ok_or(Cow::Borrowed(s)),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Ok(Cow::Owned(s));
            }
            Err(Cow::Owned(s))
        }
    }
}
