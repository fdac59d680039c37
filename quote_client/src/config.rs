//! Runtime configuration of the client.
use std::path::PathBuf;
use std::time::Duration;

use quote_common::net::{CLIENT_TIMEOUT, OUTPUT_PATH, SERVER_URL};

use crate::args::Args;

/// Effective client settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Quote endpoint of the server.
    pub server_url: String,
    /// Client -> server deadline.
    pub timeout: Duration,
    /// Destination of the response body.
    pub output_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: SERVER_URL.to_string(),
            timeout: CLIENT_TIMEOUT,
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        Self {
            server_url: args.server_url,
            timeout: Duration::from_millis(args.timeout_ms),
            output_path: normalize_path(&args.output),
        }
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
