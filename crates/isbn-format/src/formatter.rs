//! # ISBN Formatter
//!
//! Renders a validated [`Isbn`] as text:
//!
//! 1. Resolve the representation from [`FormatterType`] (suppress, as
//!    detected, forced ISBN-10, forced ISBN-13).
//! 2. Segment with the fixed layout for that representation.
//! 3. Join the groups with the configured [`Separator`](crate::Separator).
//! 4. Prepend the label if requested: [`LABEL_ISBN10`] or [`LABEL_ISBN13`].
//!
//! The formatter only borrows the value for the duration of a call.

use std::borrow::Cow;

use isbn_core::{Isbn, IsbnKind};

use crate::config::{FormatterConfig, FormatterType};
use crate::error::FormatError;
use crate::segment::{layout_for, segment};

/// Label prepended to ISBN-10 output.
pub const LABEL_ISBN10: &str = "ISBN ";

/// Label prepended to ISBN-13 output.
pub const LABEL_ISBN13: &str = "ISBN-13 ";

/// A formatter bound to one immutable configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsbnFormatter {
    config: FormatterConfig,
}

impl IsbnFormatter {
    /// Create a formatter for `config`.
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    /// The configuration this formatter renders with.
    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Render `isbn` with this formatter's configuration.
    ///
    /// # Errors
    ///
    /// See [`format`].
    pub fn format(&self, isbn: &Isbn) -> Result<String, FormatError> {
        format(isbn, &self.config)
    }

    /// Render `isbn` with the default configuration: detected form,
    /// hyphen-separated, unlabeled.
    ///
    /// # Errors
    ///
    /// See [`format`].
    pub fn string_from_isbn(isbn: &Isbn) -> Result<String, FormatError> {
        Self::default().format(isbn)
    }
}

/// Render `isbn` according to `config`.
///
/// [`FormatterType::None`] yields the empty string whatever the other
/// options say.
///
/// # Errors
///
/// Returns [`FormatError::Isbn10Representation`] if a 13-digit value is
/// forced to ISBN-10. The segmentation errors are unreachable for a
/// validated [`Isbn`].
pub fn format(isbn: &Isbn, config: &FormatterConfig) -> Result<String, FormatError> {
    let Some(resolved) = resolve(isbn, config.kind)? else {
        return Ok(String::new());
    };

    let kind = resolved.kind();
    let groups = segment(resolved.as_str(), layout_for(kind))?;

    let mut out = String::new();
    if config.labeled {
        out.push_str(label_for(kind));
    }
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push_str(config.separator.as_str());
        }
        out.push_str(group.digits);
    }

    tracing::trace!(isbn = %isbn, kind = %config.kind, output = %out, "formatted ISBN");
    Ok(out)
}

/// Parse free-form text and render it in one step.
///
/// # Errors
///
/// Returns [`FormatError::Isbn`] if `raw` is not a valid ISBN, otherwise
/// the errors of [`format`].
pub fn format_str(raw: &str, config: &FormatterConfig) -> Result<String, FormatError> {
    let isbn = Isbn::parse(raw)?;
    format(&isbn, config)
}

/// The label for output of `kind`.
pub fn label_for(kind: IsbnKind) -> &'static str {
    match kind {
        IsbnKind::Isbn10 => LABEL_ISBN10,
        IsbnKind::Isbn13 => LABEL_ISBN13,
    }
}

/// Pick the value to render, or `None` when output is suppressed.
fn resolve(isbn: &Isbn, kind: FormatterType) -> Result<Option<Cow<'_, Isbn>>, FormatError> {
    match (kind, isbn.kind()) {
        (FormatterType::None, _) => Ok(None),
        (FormatterType::FromObject, _)
        | (FormatterType::Isbn10, IsbnKind::Isbn10)
        | (FormatterType::Isbn13, IsbnKind::Isbn13) => Ok(Some(Cow::Borrowed(isbn))),
        (FormatterType::Isbn10, IsbnKind::Isbn13) => {
            tracing::debug!(isbn = %isbn, "ISBN-13 forced to ISBN-10");
            Err(FormatError::Isbn10Representation(isbn.to_string()))
        }
        (FormatterType::Isbn13, IsbnKind::Isbn10) => Ok(Some(Cow::Owned(isbn.to_isbn13()))),
    }
}
