//! Fetching the quote from the quote server.
//!
//! The client is a single sequential pipeline, so it uses the blocking `reqwest`
//! client. The deadline covers connecting, sending and reading the whole body.
use std::time::Duration;

use log::{debug, info};
use quote_common::net::hop;
use quote_common::{QuoteError, Result};
use reqwest::blocking::Client;

use crate::config::ClientConfig;

/// Blocking HTTP client for the server's quote endpoint.
pub struct QuoteFetcher {
    client: Client,
    url: String,
    timeout: Duration,
}

impl QuoteFetcher {
    /// Build a fetcher from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| QuoteError::Format(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: config.server_url.clone(),
            timeout: config.timeout,
        })
    }

    /// Request the quote and return the raw response body.
    ///
    /// A non-success status is an error: the body of an error reply is not a quote.
    pub fn fetch(&self) -> Result<Vec<u8>> {
        info!("Requesting quote from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| QuoteError::from_transport(e, hop::SERVER, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                target: hop::SERVER.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| QuoteError::from_transport(e, hop::SERVER, self.timeout))?;
        debug!("Received {} bytes", body.len());
        Ok(body.to_vec())
    }
}
