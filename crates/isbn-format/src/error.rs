//! # Error Types
//!
//! Rendering errors. [`FormatError::Isbn10Representation`] is the only one a
//! caller should expect from a validated value; the segmentation variants
//! guard layout invariants and indicate a bug if they surface for an
//! [`isbn_core::Isbn`].

use isbn_core::IsbnError;
use thiserror::Error;

/// Top-level error type for ISBN formatting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A 13-digit value was forced into ISBN-10 form.
    #[error("ISBN-13 {0} has no ISBN-10 representation")]
    Isbn10Representation(String),

    /// The EAN prefix or registration group could not be read.
    #[error("registration group could not be segmented from {0:?}")]
    GroupNumber(String),

    /// The registrant or publication element could not be read.
    #[error("publisher number could not be segmented from {0:?}")]
    PublisherNumber(String),

    /// The check character is missing or characters are left over after it.
    #[error("check character could not be segmented from {0:?}")]
    ErrorCheckingNumber(String),

    /// A formatter configuration document could not be parsed.
    #[error("formatter configuration error: {0}")]
    Config(String),

    /// The input text is not a valid ISBN.
    #[error(transparent)]
    Isbn(#[from] IsbnError),
}
