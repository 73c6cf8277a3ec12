//! medal_io — data-access boundary for medal standings.
//!
//! Everything past this crate works on validated, typed records; everything
//! before it is untrusted bytes. The boundary either yields well-formed
//! `MedalRecord`s or fails with a distinguishable `IoError` — it never hands
//! partially-valid data downstream, and it never retries (retry/backoff is
//! the caller's concern).

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for the data-access boundary.
///
/// `Read`/`Http`/`Status` are transport-level fetch failures; `Malformed` is
/// a payload-shape rejection carrying a JSON-pointer-style location. Callers
/// present one user-visible message for either family and keep the kind for
/// diagnostics.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem read errors.
    #[error("read error: {0}")]
    Read(String),

    /// HTTP transport errors (connect, TLS, timeout).
    #[error("http error: {0}")]
    Http(String),

    /// Non-success HTTP status.
    #[error("unexpected status: {code}")]
    Status { code: u16 },

    /// Payload shape rejection with a JSON-pointer-style location.
    #[error("malformed payload at {pointer}: {msg}")]
    Malformed { pointer: String, msg: String },

    /// Generic validation / invariants (configuration, URLs).
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl IoError {
    pub(crate) fn malformed(pointer: impl Into<String>, msg: impl Into<String>) -> Self {
        IoError::Malformed {
            pointer: pointer.into(),
            msg: msg.into(),
        }
    }

    /// True for transport-level failures (as opposed to payload rejections).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            IoError::Read(_) | IoError::Http(_) | IoError::Status { .. }
        )
    }
}

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json doesn't keep a pointer; report the root and the message.
        IoError::Malformed {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

pub mod config;
pub mod source;
pub mod validate;

pub use config::SourceConfig;
pub use source::{FileSource, MedalSource};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use validate::{parse_flags, parse_medals};
