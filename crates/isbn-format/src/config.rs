//! # Formatter Configuration
//!
//! [`FormatterConfig`] is an immutable value passed with every render call;
//! the formatter keeps no state between calls.
//!
//! The configuration derives serde so it can live in a settings file. Enum
//! names are snake_case and missing fields take the defaults:
//!
//! ```yaml
//! kind: isbn13        # none | from_object | isbn10 | isbn13
//! separator: hyphen   # none | white_space | hyphen
//! labeled: true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Which representation to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatterType {
    /// Suppress output: render the empty string.
    None,
    /// Render the form the value was detected as.
    #[default]
    FromObject,
    /// Force ISBN-10. Fails for 13-digit values.
    Isbn10,
    /// Force ISBN-13, converting ISBN-10 values.
    Isbn13,
}

impl FormatterType {
    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::FromObject => "from_object",
            Self::Isbn10 => "isbn10",
            Self::Isbn13 => "isbn13",
        }
    }
}

impl std::fmt::Display for FormatterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What goes between digit groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Separator {
    /// Digits only, no separator.
    None,
    /// A single space between groups.
    WhiteSpace,
    /// A hyphen between groups (the standard presentation).
    #[default]
    Hyphen,
}

impl Separator {
    /// The text inserted between groups.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::WhiteSpace => " ",
            Self::Hyphen => "-",
        }
    }
}

/// Per-call rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatterConfig {
    /// Representation to render.
    #[serde(alias = "type")]
    pub kind: FormatterType,
    /// Group separator.
    pub separator: Separator,
    /// Prepend an `ISBN` / `ISBN-13` label.
    pub labeled: bool,
}

impl FormatterConfig {
    /// Create a configuration from its three options.
    pub fn new(kind: FormatterType, separator: Separator, labeled: bool) -> Self {
        Self {
            kind,
            separator,
            labeled,
        }
    }

    /// Parse a configuration from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Config`] if the document is not valid YAML,
    /// names an unknown option value, or carries unknown fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, FormatError> {
        serde_yaml::from_str(yaml).map_err(|e| FormatError::Config(e.to_string()))
    }
}
