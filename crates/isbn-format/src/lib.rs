//! # isbn-format — ISBN Rendering
//!
//! Turns a validated [`isbn_core::Isbn`] back into text. The output can be
//! digits only, space-separated groups, or hyphen-separated groups, with or
//! without a label, and either in the detected form or coerced to ISBN-10 or
//! ISBN-13.
//!
//! ```
//! use isbn_core::Isbn;
//! use isbn_format::{format, FormatterConfig, FormatterType, Separator};
//!
//! let isbn = Isbn::parse("0-306-40615-2").unwrap();
//! let config = FormatterConfig::new(FormatterType::Isbn13, Separator::Hyphen, true);
//! assert_eq!(format(&isbn, &config).unwrap(), "ISBN-13 978-0-30640-615-7");
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `isbn-core` internally.
//! - Configuration is passed per call; no formatter state survives a call.
//! - Group widths are fixed (see the [`segment`](mod@segment) module), so
//!   output is deterministic.

pub mod config;
pub mod error;
pub mod formatter;
pub mod segment;

pub use config::{FormatterConfig, FormatterType, Separator};
pub use error::FormatError;
pub use formatter::{format, format_str, label_for, IsbnFormatter, LABEL_ISBN10, LABEL_ISBN13};
pub use segment::{segment, GroupRole, Segment};
