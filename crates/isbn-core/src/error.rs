//! # Error Types
//!
//! Every failure in this crate is a detection failure: the input could not
//! be read as a valid ISBN-10 or ISBN-13. The [`DetectionReason`] carries
//! which rule rejected it.

use thiserror::Error;

/// Top-level error type for ISBN parsing and checksum computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsbnError {
    /// The input cannot be parsed into a valid ISBN-10 or ISBN-13.
    #[error("cannot detect an ISBN in {input:?}: {reason}")]
    Detection {
        /// The rejected input, as supplied by the caller.
        input: String,
        /// The rule that rejected it.
        reason: DetectionReason,
    },
}

impl IsbnError {
    pub(crate) fn detection(input: &str, reason: DetectionReason) -> Self {
        Self::Detection {
            input: input.to_string(),
            reason,
        }
    }

    /// The rule that rejected the input.
    pub fn reason(&self) -> &DetectionReason {
        match self {
            Self::Detection { reason, .. } => reason,
        }
    }
}

/// Why a candidate was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionReason {
    /// Filtered length is neither 10 nor 13.
    #[error("expected 10 or 13 characters after filtering, found {found}")]
    Length {
        /// Number of characters left after filtering.
        found: usize,
    },

    /// An `X` appeared somewhere other than the final position of an ISBN-10.
    #[error("check character X is not allowed at position {position}")]
    MisplacedCheckCharacter {
        /// Zero-based position of the offending `X`.
        position: usize,
    },

    /// A character that is neither a digit nor `X` reached checksum computation.
    #[error("invalid character at position {position}")]
    InvalidCharacter {
        /// Zero-based position of the offending character.
        position: usize,
    },

    /// The stored check character does not match the recomputed one.
    #[error("checksum mismatch: expected check character {expected}, found {found}")]
    ChecksumMismatch {
        /// Recomputed check character.
        expected: char,
        /// Check character present in the input.
        found: char,
    },
}
