//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of the quote pipeline: transport
//! timeouts and failures on each network hop, JSON decoding, persistence and local
//! file I/O, allowing crates to propagate a single error type.
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library, sockets or files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An outbound call exceeded its deadline.
    #[error("request to {target} timed out after {millis} milliseconds")]
    Timeout {
        /// Name of the hop that timed out (`provider`, `server`, `store`).
        target: String,
        /// Configured deadline in milliseconds.
        millis: u128,
    },

    /// Connection, DNS or any other non-timeout transport failure.
    #[error("request to {target} failed: {message}")]
    Transport {
        /// Name of the hop that failed.
        target: String,
        /// Underlying cause.
        message: String,
    },

    /// The remote side answered with a non-success HTTP status.
    #[error("{target} responded with status {status}")]
    Status {
        /// Name of the hop that answered.
        target: String,
        /// HTTP status code.
        status: u16,
    },

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The provider payload has no entry for the requested currency pair.
    #[error("Quote for pair {0} not found in provider response")]
    MissingPair(String),

    /// Opening, checking or writing to the quote store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}

impl QuoteError {
    /// Classify a `reqwest` failure on the hop named `target`.
    ///
    /// Deadline expiry becomes [`QuoteError::Timeout`] reporting `timeout`; everything
    /// else becomes [`QuoteError::Transport`].
    pub fn from_transport(err: reqwest::Error, target: &str, timeout: Duration) -> Self {
        if err.is_timeout() {
            QuoteError::timeout(target, timeout)
        } else {
            QuoteError::Transport {
                target: target.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// Build a [`QuoteError::Timeout`] for `target` after `timeout`.
    pub fn timeout(target: &str, timeout: Duration) -> Self {
        QuoteError::Timeout {
            target: target.to_string(),
            millis: timeout.as_millis(),
        }
    }

    /// Returns `true` when the error is a deadline expiry.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout { .. })
    }
}
