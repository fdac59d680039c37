//! Shared networking defaults used by client and server.
//!
//! Every value here is only a default: binaries inject the effective values
//! through their configuration structs.
use std::time::Duration;

/// Address the server listens on.
pub const LISTEN_ADDRESS: &str = "0.0.0.0:8080";
/// Path of the quote endpoint.
pub const QUOTE_PATH: &str = "/quote";
/// Base URL of the external quote provider; the pair path is appended.
pub const PROVIDER_URL: &str = "https://economia.awesomeapi.com.br/json/last";
/// Full URL the client requests.
pub const SERVER_URL: &str = "http://localhost:8080/quote";
/// SQLite database backing the quote store.
pub const STORE_PATH: &str = "quotes.db";
/// File the client writes the server response into.
pub const OUTPUT_PATH: &str = "cotacao.txt";

/// Server -> provider deadline.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_millis(200);
/// Server -> store deadline.
pub const STORE_TIMEOUT: Duration = Duration::from_millis(10);
/// Client -> server deadline.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);

/// Hop names used in error messages and logs.
pub mod hop {
    /// External quote provider.
    pub const PROVIDER: &str = "provider";
    /// Local quote server.
    pub const SERVER: &str = "server";
    /// SQLite quote store.
    pub const STORE: &str = "store";
}

/// Join a base URL and a path segment with exactly one slash between them.
pub fn join_url(base: &str, segment: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        segment.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://x/json/last/", "/USD-BRL"), "http://x/json/last/USD-BRL");
        assert_eq!(join_url("http://x/json/last", "USD-BRL"), "http://x/json/last/USD-BRL");
    }
}
