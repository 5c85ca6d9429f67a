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

mod helper_constants;
mod helper_functions;
mod phone_number_regexps;
mod bd_phone_number;
pub mod errors;
pub mod enums;
pub mod phonenormalizer;

use std::sync::LazyLock;

pub use bd_phone_number::BdPhoneNumber;
pub use enums::{CountryCodeSource, Operator, PhoneNumberFormat};
pub use phonenormalizer::PhoneNormalizer;

pub static PHONE_NORMALIZER: LazyLock<PhoneNormalizer> = LazyLock::new(|| {
    PhoneNormalizer::new()
});
