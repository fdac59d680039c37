//! HTTP client for the external quote provider.
//!
//! `QuoteProvider` owns a reusable `reqwest::Client` and fetches a fresh quote for one
//! configured pair. Each request is bounded by the provider deadline; expiry surfaces as
//! `QuoteError::Timeout` so it can be told apart from connection failures in the logs.
use std::time::Duration;

use log::debug;
use quote_common::net::{hop, join_url};
use quote_common::{CurrencyPair, Quote, QuoteError, Result};

use crate::config::ServerConfig;

/// Client of the provider endpoint for a single currency pair.
#[derive(Debug, Clone)]
pub struct QuoteProvider {
    client: reqwest::Client,
    url: String,
    pair: CurrencyPair,
    timeout: Duration,
}

impl QuoteProvider {
    /// Build a provider client from the server configuration.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| QuoteError::Format(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: join_url(&config.provider_url, &config.pair.path()),
            pair: config.pair,
            timeout: config.provider_timeout,
        })
    }

    /// Full URL requested on every fetch.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current quote.
    pub async fn fetch(&self) -> Result<Quote> {
        debug!("Requesting {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| QuoteError::from_transport(e, hop::PROVIDER, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::Status {
                target: hop::PROVIDER.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::from_transport(e, hop::PROVIDER, self.timeout))?;
        Quote::from_provider_json(&body, self.pair)
    }
}
