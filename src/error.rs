//! # Error Handling
//!
//! This module defines the error type shared by the URL parsers and the
//! source path resolver. It uses the `thiserror` library so that each failure
//! mode carries a short, user-facing message.
//!
//! ## Key Components
//!
//! - **`Error`**: every way a repository URL can fail to map onto a source
//!   directory.
//! - **`Result<T>`**: a type alias for `std::result::Result<T, Error>`.
//!
//! Errors raised by the standard URL parser are only used to decide whether
//! to fall back to the loose `[user@]host:path` parser. Errors from the loose
//! parser and the resolver reach the caller unchanged.

use thiserror::Error;

/// Main error type for repository URL resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed as a URI at all.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The input parsed as a URI (or loose URL) but its host is empty.
    #[error("Missing host part")]
    MissingHost,

    /// A loose URL has no `:` separator, or nothing after it.
    #[error("Missing path part")]
    MissingColon,

    /// A loose URL contains an empty path component (`a//b`, leading or
    /// trailing `/`).
    #[error("Blank path segment")]
    EmptyPathSegment,

    /// The URL names a host but no path below it.
    #[error("Host and path required")]
    InsufficientPathParts,
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
