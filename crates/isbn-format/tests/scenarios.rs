//! # End-to-End Scenarios
//!
//! Raw text in, formatted text out, through the public API of both crates.

use isbn_core::{DetectionReason, Isbn, IsbnError};
use isbn_format::{
    format, format_str, FormatError, FormatterConfig, FormatterType, IsbnFormatter, Separator,
};

#[test]
fn isbn10_from_object_hyphen() {
    let isbn = Isbn::parse("0-306-40615-2").unwrap();
    assert_eq!(isbn.as_str(), "0306406152");
    let config = FormatterConfig::new(FormatterType::FromObject, Separator::Hyphen, false);
    assert_eq!(format(&isbn, &config).unwrap(), "0-3064-0615-2");
}

#[test]
fn isbn13_from_object_whitespace_labeled() {
    let isbn = Isbn::parse("978-0-306-40615-7").unwrap();
    let config = FormatterConfig::new(FormatterType::FromObject, Separator::WhiteSpace, true);
    assert_eq!(format(&isbn, &config).unwrap(), "ISBN-13 978 0 30640 615 7");
}

#[test]
fn letters_only_fail_detection() {
    let err = format_str("abcd", &FormatterConfig::default()).unwrap_err();
    match err {
        FormatError::Isbn(IsbnError::Detection { reason, .. }) => {
            assert_eq!(reason, DetectionReason::Length { found: 0 });
        }
        other => panic!("expected detection error, got {other:?}"),
    }
}

#[test]
fn isbn10_forced_to_isbn13() {
    let isbn = Isbn::parse("0306406152").unwrap();
    let config = FormatterConfig::new(FormatterType::Isbn13, Separator::None, false);
    assert_eq!(format(&isbn, &config).unwrap(), "9780306406157");
}

#[test]
fn isbn13_forced_to_isbn10_fails() {
    let isbn = Isbn::parse("978-3-16-148410-0").unwrap();
    let config = FormatterConfig::new(FormatterType::Isbn10, Separator::Hyphen, true);
    assert!(matches!(
        format(&isbn, &config),
        Err(FormatError::Isbn10Representation(_))
    ));
}

#[test]
fn suppressed_output_is_empty() {
    let isbn = Isbn::parse("978-0-306-40615-7").unwrap();
    let config = FormatterConfig::new(FormatterType::None, Separator::Hyphen, true);
    assert_eq!(format(&isbn, &config).unwrap(), "");
}

#[test]
fn formatting_does_not_consume_the_value() {
    let isbn = Isbn::parse("0306406152").unwrap();
    let config = FormatterConfig::new(FormatterType::FromObject, Separator::None, false);
    let first = format(&isbn, &config).unwrap();
    let second = format(&isbn, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(isbn.as_str(), "0306406152");
}

#[test]
fn yaml_configuration_drives_formatter() {
    let config =
        FormatterConfig::from_yaml_str("kind: isbn13\nseparator: hyphen\nlabeled: true\n").unwrap();
    let formatter = IsbnFormatter::new(config);
    let isbn = Isbn::parse("0306406152").unwrap();
    assert_eq!(formatter.format(&isbn).unwrap(), "ISBN-13 978-0-30640-615-7");
}
