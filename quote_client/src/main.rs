//! Quote Client — requests one quote from the quote server and stores the raw response.
//!
//! The client runs a single sequential pipeline: `GET` the server's `/quote` endpoint
//! within a deadline (300ms by default), read the whole body, and write it byte for byte
//! to `cotacao.txt`, replacing the previous content. Nothing is retried; the first error
//! is logged and the process exits with a failure status.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://192.168.0.10:8080/quote --timeout-ms 300 --output ./cotacao.txt
//! ```
#![warn(missing_docs)]
mod args;
mod config;
mod fetcher;
mod output;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use quote_common::Result;

use crate::args::Args;
use crate::config::ClientConfig;
use crate::fetcher::QuoteFetcher;
use crate::output::save_response;

/// Fetch the quote and save it, returning the destination path.
fn run(config: &ClientConfig) -> Result<PathBuf> {
    let fetcher = QuoteFetcher::new(config)?;
    let body = fetcher.fetch()?;
    save_response(&config.output_path, &body)?;
    Ok(config.output_path.clone())
}

fn main() -> Result<()> {
    init_logger();
    let config = ClientConfig::from(Args::parse());

    match run(&config) {
        Ok(path) => {
            info!("Quote saved to {}!", path.display());
            Ok(())
        }
        Err(e) => {
            error!("Failed to save quote: {}", e);
            Err(e)
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        QUOTE_BODY, closed_port_url, failing_server, quote_server, slow_server, spawn_server,
    };
    use quote_common::QuoteError;
    use std::time::Duration;
    use tempfile::tempdir;

    fn config_for(url: String, output_path: PathBuf, timeout: Duration) -> ClientConfig {
        ClientConfig {
            server_url: url,
            timeout,
            output_path,
        }
    }

    #[test]
    fn saves_response_byte_for_byte() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let config = config_for(
            spawn_server(quote_server()),
            output.clone(),
            Duration::from_secs(2),
        );

        let saved = run(&config).unwrap();

        assert_eq!(saved, output);
        assert_eq!(std::fs::read(&output).unwrap(), QUOTE_BODY.as_bytes());
    }

    #[test]
    fn timeout_leaves_no_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let config = config_for(
            spawn_server(slow_server(Duration::from_secs(2))),
            output.clone(),
            Duration::from_millis(100),
        );

        let err = run(&config).unwrap_err();

        assert!(err.is_timeout(), "{}", err);
        assert!(!output.exists());
    }

    #[test]
    fn unreachable_server_leaves_no_file() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        let config = config_for(closed_port_url(), output.clone(), Duration::from_secs(2));

        let err = run(&config).unwrap_err();

        assert!(matches!(err, QuoteError::Transport { .. }), "{}", err);
        assert!(!output.exists());
    }

    #[test]
    fn server_error_is_not_saved_as_a_quote() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("cotacao.txt");
        std::fs::write(&output, QUOTE_BODY).unwrap();
        let config = config_for(
            spawn_server(failing_server()),
            output.clone(),
            Duration::from_secs(2),
        );

        let err = run(&config).unwrap_err();

        assert!(matches!(err, QuoteError::Status { status: 500, .. }), "{}", err);
        assert_eq!(std::fs::read(&output).unwrap(), QUOTE_BODY.as_bytes());
    }
}
