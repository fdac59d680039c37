//! Command-line arguments for the Quote Server.
//!
//! Every flag defaults to the values in `quote_common::net`, so running the binary
//! without arguments serves the standard USD/BRL quote on port 8080.
use clap::Parser;
use quote_common::CurrencyPair;
use quote_common::net::{
    LISTEN_ADDRESS, PROVIDER_TIMEOUT, PROVIDER_URL, STORE_PATH, STORE_TIMEOUT,
};

const PROVIDER_TIMEOUT_MS: u64 = PROVIDER_TIMEOUT.as_millis() as u64;
const STORE_TIMEOUT_MS: u64 = STORE_TIMEOUT.as_millis() as u64;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[clap(long, default_value = LISTEN_ADDRESS)]
    pub listen: String,

    /// Base URL of the quote provider; the pair path (e.g. `USD-BRL`) is appended.
    #[clap(long, default_value = PROVIDER_URL)]
    pub provider_url: String,

    /// Currency pair to relay.
    #[clap(long, value_enum, default_value_t = CurrencyPair::USDBRL)]
    pub pair: CurrencyPair,

    /// Deadline for the provider request, in milliseconds.
    #[clap(long, default_value_t = PROVIDER_TIMEOUT_MS)]
    pub provider_timeout_ms: u64,

    /// SQLite database file (or `file:` URI) receiving the quotes.
    #[clap(long, default_value = STORE_PATH)]
    pub store: String,

    /// Deadline for persisting one quote, in milliseconds.
    #[clap(long, default_value_t = STORE_TIMEOUT_MS)]
    pub store_timeout_ms: u64,
}
