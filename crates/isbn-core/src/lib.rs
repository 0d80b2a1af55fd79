//! # isbn-core — Validated ISBN Values
//!
//! The leaf crate of the workspace. It turns free-form text into a
//! validated [`Isbn`] and owns every piece of checksum arithmetic.
//!
//! ## Key Design Principles
//!
//! 1. **One fallible factory.** [`Isbn::parse`] is the only constructor.
//!    An `Isbn` that exists has passed its checksum; there is no unchecked
//!    path and no separate "no error" variant.
//!
//! 2. **Canonical storage.** The value keeps only the filtered code
//!    (digits plus a possible trailing `X`), never the caller's punctuation.
//!
//! 3. **Closed error taxonomy.** Every failure is an
//!    [`IsbnError::Detection`] carrying a [`DetectionReason`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `isbn-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Pure computation; the only side effects are `tracing` events.

pub mod checksum;
pub mod error;
pub mod isbn;

// Re-export primary types for ergonomic imports.
pub use checksum::{
    convert_isbn10_to_isbn13, digit_value, filter_digit_characters, isbn10_check_digit,
    isbn13_check_digit, validate_isbn10, validate_isbn13, ISBN10_LEN, ISBN13_LEN, ISBN13_PREFIX,
};
pub use error::{DetectionReason, IsbnError};
pub use isbn::{Isbn, IsbnKind};
