//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `core-prn` crate. It uses the `thiserror` library to create a small
//! `Error` enum that covers the few failure modes the identifier subsystem
//! actually has, providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the crate. Each variant corresponds to a specific type of
//!   error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the crate to simplify function signatures.
//!
//! Most of the identifier subsystem is total by construction: parsing,
//! generation, extraction, and validation never fail: malformed input
//! degrades to a shorter string, a `None` field, or a `false` predicate.
//! Errors are reserved for the places where no sane partial result exists:
//!
//! - The legacy portfolio decomposer (`InvalidFormat`).
//! - The hardened identifier constructor (`GappedIdentifier`).
//! - Scope name resolution (`UnknownScope`).
//! - Request-driven minting with missing parameters (`MissingAttribute`).

use thiserror::Error;

/// Main error type for core-prn operations
#[derive(Error, Debug)]
pub enum Error {
    /// The input string does not have the structural shape the operation
    /// requires (e.g. the legacy portfolio decomposer received an empty
    /// string or more than four hyphen-separated segments).
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// A hierarchy field was populated while one of its ancestors was not.
    ///
    /// Raised only by the hardened constructor; the legacy parse/generate
    /// paths silently truncate instead.
    #[error("Gapped identifier: {field} is populated but {missing} is not")]
    GappedIdentifier {
        /// The populated field below the gap.
        field: &'static str,
        /// The missing ancestor field.
        missing: &'static str,
    },

    /// A string was supposed to name one of the five PRN scopes but did not.
    #[error("Unknown scope: {value:?}")]
    UnknownScope { value: String },

    /// A minting request is missing a parameter required for the target
    /// scope.
    #[error("Missing request attribute {attribute:?} for {scope} PRN")]
    MissingAttribute {
        attribute: &'static str,
        scope: &'static str,
    },
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
