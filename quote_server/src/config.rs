//! Runtime configuration of the server, injected into the provider, store and router.
use std::path::PathBuf;
use std::time::Duration;

use quote_common::CurrencyPair;
use quote_common::net::{
    LISTEN_ADDRESS, PROVIDER_TIMEOUT, PROVIDER_URL, STORE_PATH, STORE_TIMEOUT,
};

use crate::args::Args;

/// Effective server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind.
    pub listen_addr: String,
    /// Provider base URL.
    pub provider_url: String,
    /// Pair relayed by this server.
    pub pair: CurrencyPair,
    /// Server -> provider deadline.
    pub provider_timeout: Duration,
    /// Location of the SQLite store.
    pub store_path: PathBuf,
    /// Server -> store deadline.
    pub store_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: LISTEN_ADDRESS.to_string(),
            provider_url: PROVIDER_URL.to_string(),
            pair: CurrencyPair::default(),
            provider_timeout: PROVIDER_TIMEOUT,
            store_path: PathBuf::from(STORE_PATH),
            store_timeout: STORE_TIMEOUT,
        }
    }
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            listen_addr: args.listen,
            provider_url: args.provider_url,
            pair: args.pair,
            provider_timeout: Duration::from_millis(args.provider_timeout_ms),
            store_path: PathBuf::from(args.store),
            store_timeout: Duration::from_millis(args.store_timeout_ms),
        }
    }
}
