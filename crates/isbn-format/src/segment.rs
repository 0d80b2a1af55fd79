//! # Group Segmentation
//!
//! Splits a canonical code into its semantic groups. Real group widths are
//! assigned per registration agency and publisher range; this module uses
//! fixed widths so that the same code always renders the same way:
//!
//! | Kind    | Prefix | Group | Registrant | Publication | Check |
//! |---------|--------|-------|------------|-------------|-------|
//! | ISBN-13 | 3      | 1     | 5          | 3           | 1     |
//! | ISBN-10 | —      | 1     | 4          | 4           | 1     |
//!
//! A layout must consume the code exactly. Which error is reported depends
//! on the group that could not be filled, see [`GroupRole::failure`].

use isbn_core::IsbnKind;

use crate::error::FormatError;

/// The meaning of a digit group within an ISBN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupRole {
    /// EAN prefix (`978`/`979`), ISBN-13 only.
    Prefix,
    /// Registration group (language or country area).
    RegistrationGroup,
    /// Registrant (publisher).
    Registrant,
    /// Publication (title) element.
    Publication,
    /// Check character.
    Check,
}

impl GroupRole {
    /// The error raised when a group of this role cannot be read from `code`.
    pub fn failure(&self, code: &str) -> FormatError {
        let code = code.to_string();
        match self {
            Self::Prefix | Self::RegistrationGroup => FormatError::GroupNumber(code),
            Self::Registrant | Self::Publication => FormatError::PublisherNumber(code),
            Self::Check => FormatError::ErrorCheckingNumber(code),
        }
    }
}

/// One group of a segmented code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// What the group encodes.
    pub role: GroupRole,
    /// The group's characters, borrowed from the code.
    pub digits: &'a str,
}

/// A fixed-width layout: each role with its width, in order.
pub type Layout = &'static [(GroupRole, usize)];

/// Group widths 1-4-4-1.
pub const ISBN10_LAYOUT: Layout = &[
    (GroupRole::RegistrationGroup, 1),
    (GroupRole::Registrant, 4),
    (GroupRole::Publication, 4),
    (GroupRole::Check, 1),
];

/// Group widths 3-1-5-3-1.
pub const ISBN13_LAYOUT: Layout = &[
    (GroupRole::Prefix, 3),
    (GroupRole::RegistrationGroup, 1),
    (GroupRole::Registrant, 5),
    (GroupRole::Publication, 3),
    (GroupRole::Check, 1),
];

/// The layout used for codes of `kind`.
pub fn layout_for(kind: IsbnKind) -> Layout {
    match kind {
        IsbnKind::Isbn10 => ISBN10_LAYOUT,
        IsbnKind::Isbn13 => ISBN13_LAYOUT,
    }
}

/// Split `code` into groups according to `layout`.
///
/// # Errors
///
/// Returns the [`GroupRole::failure`] of the first group that runs past the
/// end of `code`, or [`FormatError::ErrorCheckingNumber`] if characters
/// remain after the last group.
pub fn segment(code: &str, layout: Layout) -> Result<Vec<Segment<'_>>, FormatError> {
    let mut segments = Vec::with_capacity(layout.len());
    let mut start = 0;

    for &(role, width) in layout {
        let end = start + width;
        let digits = code.get(start..end).ok_or_else(|| role.failure(code))?;
        segments.push(Segment { role, digits });
        start = end;
    }

    if start != code.len() {
        return Err(FormatError::ErrorCheckingNumber(code.to_string()));
    }
    Ok(segments)
}
