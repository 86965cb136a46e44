//! Hard failures of the library entry points.
//!
//! Malformed configuration text is never an error here; it yields a
//! best-effort model plus diagnostics.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
