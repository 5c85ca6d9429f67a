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

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

/// Names of the eight administrative divisions of Bangladesh, in Bengali,
/// in the order used by location pickers.
pub const BD_DIVISIONS: [&str; 8] = [
    "ঢাকা", "চট্টগ্রাম", "রাজশাহী", "খুলনা", "বরিশাল", "সিলেট", "রংপুর", "ময়মনসিংহ"
];

/// Administrative divisions of Bangladesh. Variants are declared in the
/// same order as [`BD_DIVISIONS`].
#[derive(Debug, EnumIter, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    Dhaka,
    Chattogram,
    Rajshahi,
    Khulna,
    Barishal,
    Sylhet,
    Rangpur,
    Mymensingh,
}

impl Division {
    pub fn bengali_name(self) -> &'static str {
        BD_DIVISIONS[self as usize]
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Division::Dhaka => "Dhaka",
            Division::Chattogram => "Chattogram",
            Division::Rajshahi => "Rajshahi",
            Division::Khulna => "Khulna",
            Division::Barishal => "Barishal",
            Division::Sylhet => "Sylhet",
            Division::Rangpur => "Rangpur",
            Division::Mymensingh => "Mymensingh",
        }
    }

    /// Looks a division up by its Bengali name, or by its English name
    /// ignoring ASCII case. Surrounding whitespace is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::iter().find(|division| {
            division.bengali_name() == name || division.english_name().eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.bengali_name())
    }
}
