//! Validation and formatting of Bangladeshi mobile phone numbers.
//!
//! ```
//! assert!(bdphonenumber::validate("+880 1712 345678"));
//! assert!(!bdphonenumber::validate("01512345678"));
//! assert_eq!(bdphonenumber::format("8801712345678"), "+880 1712-345678");
//! assert_eq!(bdphonenumber::format("not a phone"), "not a phone");
//! ```

use std::borrow::Cow;

mod phonenormalizer;
pub mod i18n;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use phonenormalizer::{
    BdPhoneNumber, CountryCodeSource, Operator, PHONE_NORMALIZER, PhoneNormalizer,
    PhoneNumberFormat, errors::ParseError,
};

/// Shortcut for [`PhoneNormalizer::validate`] on the shared instance.
pub fn validate(phone: &str) -> bool {
    PHONE_NORMALIZER.validate(phone)
}

/// Shortcut for [`PhoneNormalizer::format`] on the shared instance.
pub fn format(phone: &str) -> Cow<'_, str> {
    PHONE_NORMALIZER.format(phone)
}
