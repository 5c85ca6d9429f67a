use std::collections::HashSet;

use strum::IntoEnumIterator;

use super::init_logger;
use crate::{CountryCodeSource, Operator, ParseError, PhoneNormalizer, PhoneNumberFormat};

// This setup function simulates getting the PhoneNormalizer instance for each test.
fn get_normalizer() -> PhoneNormalizer {
    init_logger();
    PhoneNormalizer::new()
}

#[test]
fn parse_detects_country_code_source() {
    let normalizer = get_normalizer();

    let number = normalizer.parse("+8801712345678").unwrap();
    assert_eq!(number.national_significant_number(), "1712345678");
    assert_eq!(number.country_code_source(), CountryCodeSource::FromNumberWithPlusSign);

    let number = normalizer.parse("8801712345678").unwrap();
    assert_eq!(number.country_code_source(), CountryCodeSource::FromNumberWithoutPlusSign);

    let number = normalizer.parse("1712345678").unwrap();
    assert_eq!(number.country_code_source(), CountryCodeSource::FromDefaultCountry);
    assert_eq!(number.country_code(), 880);
    assert_eq!(number.region_code(), "BD");
}

#[test]
fn parse_accepts_everything_validate_accepts() {
    let normalizer = get_normalizer();
    let inputs = [
        "+8801712345678",
        "8801987654321",
        "1712345678",
        " +880 1512 345678 ",
        "1\t3\n12345678",
    ];
    for input in inputs {
        assert!(normalizer.validate(input));
        let number = normalizer.parse(input).unwrap();
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        assert!(digits.ends_with(number.national_significant_number()));
    }
}

#[test]
fn parse_is_lenient_with_separators_and_scripts() {
    let normalizer = get_normalizer();
    let expected = normalizer.parse("+8801712345678").unwrap();

    let inputs = [
        "+880-1712-345678",
        "(+880) 1712.345678",
        "+880 1712/345678",
        "\u{FF0B}8801712345678",
        "+৮৮০১৭১২৩৪৫৬৭৮",
        "১৭১২-৩৪৫৬৭৮",
    ];
    for input in inputs {
        assert_eq!(normalizer.parse(input), Ok(expected.clone()), "input: {input}");
    }
}

#[test]
fn parse_errors() {
    let normalizer = get_normalizer();
    assert_eq!(normalizer.parse(""), Err(ParseError::NotANumber));
    assert_eq!(normalizer.parse(" - "), Err(ParseError::NotANumber));
    assert_eq!(normalizer.parse("not a phone"), Err(ParseError::NotANumber));
    assert_eq!(normalizer.parse("+880 1712 ext 5"), Err(ParseError::NotANumber));
    assert_eq!(normalizer.parse("+911712345678"), Err(ParseError::InvalidCountryCode));
    assert_eq!(normalizer.parse("+"), Err(ParseError::InvalidCountryCode));
    assert_eq!(normalizer.parse("01512345678"), Err(ParseError::NationalPrefixNotAllowed));
    assert_eq!(normalizer.parse("+88001712345678"), Err(ParseError::NationalPrefixNotAllowed));
    assert_eq!(normalizer.parse("2712345678"), Err(ParseError::InvalidSubscriberStart));
    assert_eq!(normalizer.parse("12345"), Err(ParseError::TooShortNsn));
    assert_eq!(normalizer.parse("+880"), Err(ParseError::TooShortNsn));
    assert_eq!(normalizer.parse("+88012345678"), Err(ParseError::TooShortNsn));
    assert_eq!(normalizer.parse("+880171234567"), Err(ParseError::TooShortNsn));
    assert_eq!(normalizer.parse("17123456789"), Err(ParseError::TooLongNsn));
    assert_eq!(normalizer.parse("+8801212345678"), Err(ParseError::InvalidOperator(2)));
    assert_eq!(normalizer.parse("1112345678"), Err(ParseError::InvalidOperator(1)));
    assert_eq!(normalizer.parse("1012345678"), Err(ParseError::InvalidOperator(0)));
}

#[test]
fn parse_error_messages() {
    assert_eq!(ParseError::InvalidOperator(2).to_string(), "Invalid operator digit: 2");
    assert_eq!(ParseError::TooShortNsn.to_string(), "Too short nsn");
}

#[test]
fn parsed_number_reports_operator() {
    let normalizer = get_normalizer();
    let cases = [
        ("1312345678", 3, Operator::Grameenphone),
        ("1712345678", 7, Operator::Grameenphone),
        ("1412345678", 4, Operator::Banglalink),
        ("1912345678", 9, Operator::Banglalink),
        ("1512345678", 5, Operator::Teletalk),
        ("1612345678", 6, Operator::Airtel),
        ("1812345678", 8, Operator::Robi),
    ];
    for (input, digit, operator) in cases {
        let number = normalizer.parse(input).unwrap();
        assert_eq!(number.operator_digit(), digit);
        assert_eq!(number.operator(), operator);
    }
}

#[test]
fn numbers_are_equal_regardless_of_input_shape() {
    let normalizer = get_normalizer();
    let numbers: HashSet<_> = ["+8801712345678", "8801712345678", "1712345678", "+880 1712-345678"]
        .into_iter()
        .map(|input| normalizer.parse(input).unwrap())
        .collect();
    assert_eq!(numbers.len(), 1);

    let other = normalizer.parse("1712345679").unwrap();
    assert!(!numbers.contains(&other));
}

#[test]
fn format_number_in_every_format() {
    let normalizer = get_normalizer();
    let number = normalizer.parse("1712345678").unwrap();

    assert_eq!(normalizer.format_number(&number, PhoneNumberFormat::E164), "+8801712345678");
    assert_eq!(normalizer.format_number(&number, PhoneNumberFormat::International), "+880 1712-345678");
    assert_eq!(normalizer.format_number(&number, PhoneNumberFormat::National), "01712-345678");
    assert_eq!(normalizer.format_number(&number, PhoneNumberFormat::RFC3966), "tel:+880-1712-345678");
    assert_eq!(number.to_string(), "+880 1712-345678");
}

#[test]
fn international_format_matches_format() {
    let normalizer = get_normalizer();
    for input in ["+8801712345678", "880 1987 654321", "1512-345678", "(880) 1612.345678"] {
        let number = normalizer.parse(input).unwrap();
        assert_eq!(
            normalizer.format_number(&number, PhoneNumberFormat::International),
            normalizer.format(input)
        );
    }
}

#[test]
fn formatted_numbers_parse_back() {
    let normalizer = get_normalizer();
    let number = normalizer.parse("+8801812345678").unwrap();
    for number_format in PhoneNumberFormat::iter() {
        let formatted = normalizer.format_number(&number, number_format);
        let reparsed = formatted.strip_prefix("tel:").unwrap_or(&formatted);
        // national format carries the 0 prefix, which parse does not accept
        if number_format == PhoneNumberFormat::National {
            assert_eq!(normalizer.parse(reparsed), Err(ParseError::NationalPrefixNotAllowed));
        } else {
            assert_eq!(normalizer.parse(reparsed), Ok(number.clone()));
        }
    }
}

#[test]
fn shared_instance_is_usable_from_threads() {
    let handles: Vec<_> = (3..=9)
        .map(|digit| {
            std::thread::spawn(move || {
                let input = format!("+8801{digit}12345678");
                crate::PHONE_NORMALIZER.validate(&input)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
