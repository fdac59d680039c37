//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. All flags are optional; the
//! defaults fetch `http://localhost:8080/quote` into `cotacao.txt`.
use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT, OUTPUT_PATH, SERVER_URL};

const CLIENT_TIMEOUT_MS: u64 = CLIENT_TIMEOUT.as_millis() as u64;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Full URL of the quote server endpoint.
    #[clap(long, default_value = SERVER_URL)]
    pub server_url: String,

    /// Deadline for the whole request, in milliseconds.
    #[clap(long, default_value_t = CLIENT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// File receiving the raw server response. Overwritten on every run.
    #[clap(long, default_value = OUTPUT_PATH)]
    pub output: String,
}
