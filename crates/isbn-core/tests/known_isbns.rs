//! # Known ISBN Vectors
//!
//! Published ISBNs checked through the public API only. Each ISBN-10 is
//! paired with the ISBN-13 its publisher prints alongside it, so the
//! conversion is verified against real data rather than against itself.

use isbn_core::{convert_isbn10_to_isbn13, DetectionReason, Isbn, IsbnKind};

/// (ISBN-10 as printed, ISBN-13 as printed)
const PAIRS: &[(&str, &str)] = &[
    ("0-306-40615-2", "978-0-306-40615-7"),
    ("0-439-42089-X", "978-0-439-42089-1"),
    ("3-16-148410-X", "978-3-16-148410-0"),
];

#[test]
fn published_isbn10_values_parse() {
    for (isbn10, _) in PAIRS {
        let isbn = Isbn::parse(isbn10).unwrap_or_else(|e| panic!("{isbn10}: {e}"));
        assert_eq!(isbn.kind(), IsbnKind::Isbn10);
    }
}

#[test]
fn published_isbn13_values_parse() {
    for (_, isbn13) in PAIRS {
        let isbn = Isbn::parse(isbn13).unwrap_or_else(|e| panic!("{isbn13}: {e}"));
        assert_eq!(isbn.kind(), IsbnKind::Isbn13);
    }
}

#[test]
fn conversion_matches_published_isbn13() {
    for (isbn10, isbn13) in PAIRS {
        let expected = Isbn::parse(isbn13).unwrap();
        let from_value = Isbn::parse(isbn10).unwrap().to_isbn13();
        assert_eq!(from_value, expected, "{isbn10}");

        let filtered = Isbn::parse(isbn10).unwrap();
        let from_string = convert_isbn10_to_isbn13(filtered.as_str()).unwrap();
        assert_eq!(from_string, expected.as_str(), "{isbn10}");
    }
}

#[test]
fn converted_codes_revalidate() {
    let converted = convert_isbn10_to_isbn13("0306406152").unwrap();
    assert!(converted.starts_with("978"));
    assert!(Isbn::parse(&converted).is_ok());
}

#[test]
fn letters_only_is_a_detection_error() {
    let err = Isbn::parse("abcd").unwrap_err();
    assert_eq!(*err.reason(), DetectionReason::Length { found: 0 });
}
