//! # Validated ISBN Value
//!
//! [`Isbn`] is the only way to hold a checked ISBN. It is produced by a
//! single fallible factory, [`Isbn::parse`], and is immutable afterwards.
//!
//! ## Canonical Form
//!
//! The stored code is the filtered input: ASCII digits only, except that an
//! ISBN-10 may end in uppercase `X`. Hyphens, spaces, and a leading label
//! (`ISBN`, `ISBN-13:`, `ISBN13`, `ISBN 10`, ...) are accepted on input and
//! discarded.
//!
//! ## Serialization
//!
//! Serializes as the canonical code string. Deserialization routes through
//! [`Isbn::parse`], so an invalid checksum is rejected at deserialization
//! time rather than silently accepted.

use serde::{Deserialize, Serialize};

use crate::checksum::{
    filter_digit_characters, isbn13_from_isbn10_payload, validate_isbn10, validate_isbn13,
    ISBN10_LEN, ISBN13_LEN,
};
use crate::error::{DetectionReason, IsbnError};

/// The ISBN standard a code was detected as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IsbnKind {
    /// Ten characters, mod-11 check character (may be `X`).
    Isbn10,
    /// Thirteen digits, EAN-13 check digit.
    Isbn13,
}

impl IsbnKind {
    /// Detect the standard from a filtered length.
    pub fn from_len(len: usize) -> Option<Self> {
        match len {
            ISBN10_LEN => Some(Self::Isbn10),
            ISBN13_LEN => Some(Self::Isbn13),
            _ => None,
        }
    }

    /// Number of characters in a code of this kind.
    pub fn code_len(&self) -> usize {
        match self {
            Self::Isbn10 => ISBN10_LEN,
            Self::Isbn13 => ISBN13_LEN,
        }
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
        }
    }

    /// Human-readable standard name, e.g. `ISBN-13`.
    pub fn standard_name(&self) -> &'static str {
        match self {
            Self::Isbn10 => "ISBN-10",
            Self::Isbn13 => "ISBN-13",
        }
    }
}

impl std::fmt::Display for IsbnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated ISBN-10 or ISBN-13.
///
/// # Validation
///
/// - Exactly 10 or 13 characters after filtering.
/// - `X` only as the final character of an ISBN-10.
/// - The check character matches the recomputed checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Isbn(String);

impl<'de> Deserialize<'de> for Isbn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl Isbn {
    /// Parse free-form text into a validated ISBN.
    ///
    /// Every character that is not a digit or `X`/`x` is discarded, after
    /// stripping an optional leading `ISBN` label and its `10`/`13` marker.
    /// The remaining length selects the standard.
    ///
    /// # Errors
    ///
    /// Returns [`IsbnError::Detection`] if the filtered length is neither 10
    /// nor 13, an `X` is misplaced, or the checksum does not match.
    pub fn parse(raw: &str) -> Result<Self, IsbnError> {
        let code = filter_digit_characters(strip_label(raw));

        let outcome = match IsbnKind::from_len(code.len()) {
            Some(IsbnKind::Isbn10) => validate_isbn10(&code),
            Some(IsbnKind::Isbn13) => validate_isbn13(&code),
            None => Err(IsbnError::detection(
                &code,
                DetectionReason::Length { found: code.len() },
            )),
        };

        match outcome {
            Ok(()) => {
                tracing::trace!(isbn = %code, "parsed ISBN");
                Ok(Self(code))
            }
            Err(err) => {
                let reason = *err.reason();
                tracing::debug!(input = raw, %reason, "rejected ISBN candidate");
                Err(IsbnError::detection(raw, reason))
            }
        }
    }

    /// Access the canonical code (digits, plus a possible trailing `X`).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The standard this code was detected as.
    pub fn kind(&self) -> IsbnKind {
        if self.0.len() == ISBN13_LEN {
            IsbnKind::Isbn13
        } else {
            IsbnKind::Isbn10
        }
    }

    /// Number of characters in the canonical code: 10 or 13.
    pub fn code_len(&self) -> usize {
        self.0.len()
    }

    /// The trailing check character.
    pub fn check_character(&self) -> char {
        self.0.chars().last().unwrap_or('0')
    }

    /// The code read as a single unsigned integer.
    ///
    /// Thirteen decimal digits fit comfortably in a `u64`. Leading zeros are
    /// not preserved by the number, so [`Isbn::as_str`] remains the
    /// canonical form. Returns `None` for an ISBN-10 ending in `X`, which has
    /// no plain integer reading.
    pub fn numeric_value(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// The ISBN-13 form of this value. An ISBN-13 is returned unchanged.
    ///
    /// A stored ISBN-10 has already passed its checksum, so conversion
    /// cannot fail.
    pub fn to_isbn13(&self) -> Isbn {
        match self.kind() {
            IsbnKind::Isbn13 => self.clone(),
            IsbnKind::Isbn10 => Isbn(isbn13_from_isbn10_payload(&self.0)),
        }
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Isbn {
    type Err = IsbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Isbn {
    type Error = IsbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for Isbn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Drop a leading `ISBN` label, with an optional `10`/`13` standard marker
/// (`ISBN-13:`, `ISBN13`, `ISBN 10`, ...), so the marker's digits do not leak
/// into the filtered code.
///
/// The marker is only treated as part of the label when what follows it
/// still filters to 10 or 13 characters; `ISBN 1306406153` keeps its `13`.
fn strip_label(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    let rest = match trimmed.get(..4) {
        Some(head) if head.eq_ignore_ascii_case("ISBN") => &trimmed[4..],
        _ => return raw,
    };

    let marker = rest.trim_start_matches([' ', '-', ':']);
    for standard in ["10", "13"] {
        if let Some(code) = marker.strip_prefix(standard) {
            if IsbnKind::from_len(filter_digit_characters(code).len()).is_some() {
                return code;
            }
        }
    }
    rest
}
