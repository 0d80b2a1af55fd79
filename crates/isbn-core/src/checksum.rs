//! # Checksum Engine
//!
//! Check-character computation and validation for both ISBN standards,
//! plus the ISBN-10 → ISBN-13 conversion.
//!
//! - **ISBN-10**: weights 10, 9, …, 2 over the first nine digits, mod 11.
//!   A check value of 10 is written as `X`.
//! - **ISBN-13** (EAN-13): weights alternate 1, 3, 1, 3, … over the first
//!   twelve digits, mod 10. `X` is never legal.
//!
//! The functions here operate on filtered codes (see
//! [`filter_digit_characters`]). Positions are byte offsets, which equal
//! character offsets for filtered input.

use crate::error::{DetectionReason, IsbnError};

/// Number of characters in an ISBN-10.
pub const ISBN10_LEN: usize = 10;

/// Number of characters in an ISBN-13.
pub const ISBN13_LEN: usize = 13;

/// EAN prefix prepended when converting an ISBN-10 to an ISBN-13.
pub const ISBN13_PREFIX: &str = "978";

/// Value of the `X` check character.
const X_VALUE: u32 = 10;

/// Keep ASCII digits and `X`/`x`, uppercasing the latter. Everything else
/// (hyphens, spaces, punctuation, stray letters) is dropped.
pub fn filter_digit_characters(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Value of the character at `index`: `0`–`9` for digits, `10` for `X`.
///
/// Returns `None` for any other character or an out-of-range index. Whether
/// an `X` is legal at `index` is decided by the caller.
pub fn digit_value(code: &str, index: usize) -> Option<u32> {
    match *code.as_bytes().get(index)? {
        b @ b'0'..=b'9' => Some(u32::from(b - b'0')),
        b'X' | b'x' => Some(X_VALUE),
        _ => None,
    }
}

/// Compute the ISBN-10 check character from the first nine characters of `code`.
///
/// # Errors
///
/// Returns [`IsbnError::Detection`] if `code` is shorter than nine characters
/// or one of the first nine is not a digit.
pub fn isbn10_check_digit(code: &str) -> Result<char, IsbnError> {
    let sum = weighted_sum(code, ISBN10_LEN - 1, |position| 10 - position as u32)?;
    Ok(check_character((11 - sum % 11) % 11))
}

/// Compute the ISBN-13 check digit from the first twelve characters of `code`.
///
/// # Errors
///
/// Returns [`IsbnError::Detection`] if `code` is shorter than twelve characters
/// or one of the first twelve is not a digit.
pub fn isbn13_check_digit(code: &str) -> Result<char, IsbnError> {
    let sum = weighted_sum(code, ISBN13_LEN - 1, isbn13_weight)?;
    Ok(isbn13_check_from_sum(sum))
}

/// Validate a filtered ISBN-10 candidate.
///
/// # Errors
///
/// Returns [`IsbnError::Detection`] on wrong length, a misplaced or invalid
/// character, or a checksum mismatch.
pub fn validate_isbn10(code: &str) -> Result<(), IsbnError> {
    expect_len(code, ISBN10_LEN)?;
    let expected = isbn10_check_digit(code)?;
    if digit_value(code, ISBN10_LEN - 1).is_none() {
        return Err(IsbnError::detection(
            code,
            DetectionReason::InvalidCharacter {
                position: ISBN10_LEN - 1,
            },
        ));
    }
    let found = char::from(code.as_bytes()[ISBN10_LEN - 1]).to_ascii_uppercase();
    compare(code, expected, found)
}

/// Validate a filtered ISBN-13 candidate.
///
/// # Errors
///
/// Returns [`IsbnError::Detection`] on wrong length, any `X`, an invalid
/// character, or a checksum mismatch.
pub fn validate_isbn13(code: &str) -> Result<(), IsbnError> {
    expect_len(code, ISBN13_LEN)?;
    let expected = isbn13_check_digit(code)?;
    payload_digit(code, ISBN13_LEN - 1)?;
    let found = char::from(code.as_bytes()[ISBN13_LEN - 1]);
    compare(code, expected, found)
}

/// Convert a valid ISBN-10 code into its ISBN-13 form.
///
/// Prepends [`ISBN13_PREFIX`] to the nine significant digits, dropping the
/// ISBN-10 check character, and appends a freshly computed ISBN-13 check
/// digit. The result is always 13 digits with no `X`.
///
/// # Errors
///
/// Returns [`IsbnError::Detection`] if `code` is not a valid ISBN-10.
pub fn convert_isbn10_to_isbn13(code: &str) -> Result<String, IsbnError> {
    validate_isbn10(code)?;
    Ok(isbn13_from_isbn10_payload(code))
}

/// Build the ISBN-13 for a code whose first nine characters are digits.
///
/// Callers hold a validated ISBN-10, so the payload needs no re-checking.
pub(crate) fn isbn13_from_isbn10_payload(code: &str) -> String {
    let mut isbn13 = String::with_capacity(ISBN13_LEN);
    isbn13.push_str(ISBN13_PREFIX);
    isbn13.push_str(&code[..ISBN10_LEN - 1]);

    let sum: u32 = isbn13
        .bytes()
        .enumerate()
        .map(|(position, b)| u32::from(b - b'0') * isbn13_weight(position))
        .sum();
    isbn13.push(isbn13_check_from_sum(sum));
    isbn13
}

fn expect_len(code: &str, len: usize) -> Result<(), IsbnError> {
    if code.len() == len {
        Ok(())
    } else {
        Err(IsbnError::detection(
            code,
            DetectionReason::Length { found: code.len() },
        ))
    }
}

fn isbn13_weight(position: usize) -> u32 {
    if position % 2 == 0 {
        1
    } else {
        3
    }
}

fn isbn13_check_from_sum(sum: u32) -> char {
    check_character((10 - sum % 10) % 10)
}

/// Sum `value × weight(position)` over the first `count` characters.
fn weighted_sum(
    code: &str,
    count: usize,
    weight: impl Fn(usize) -> u32,
) -> Result<u32, IsbnError> {
    if code.len() < count {
        return Err(IsbnError::detection(
            code,
            DetectionReason::Length { found: code.len() },
        ));
    }
    (0..count).try_fold(0, |sum, position| {
        Ok(sum + payload_digit(code, position)? * weight(position))
    })
}

/// A position that must hold a plain digit.
fn payload_digit(code: &str, position: usize) -> Result<u32, IsbnError> {
    match digit_value(code, position) {
        Some(X_VALUE) => Err(IsbnError::detection(
            code,
            DetectionReason::MisplacedCheckCharacter { position },
        )),
        Some(value) => Ok(value),
        None => Err(IsbnError::detection(
            code,
            DetectionReason::InvalidCharacter { position },
        )),
    }
}

fn check_character(value: u32) -> char {
    match char::from_digit(value, 10) {
        Some(digit) => digit,
        None => 'X',
    }
}

fn compare(code: &str, expected: char, found: char) -> Result<(), IsbnError> {
    if expected == found {
        Ok(())
    } else {
        Err(IsbnError::detection(
            code,
            DetectionReason::ChecksumMismatch { expected, found },
        ))
    }
}
