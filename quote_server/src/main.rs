//! Quotes HTTP relay server.
//!
//! This binary serves `GET /quote`: each request fetches the current bid of one currency
//! pair from an external HTTP provider, replies with `{"<label>": "<bid>"}` and then
//! records the bid in a SQLite table. It wires together three building blocks:
//!
//! - `QuoteProvider` — reusable HTTP client for the provider, bounded by the provider
//!   deadline (200ms by default).
//! - `QuoteStore` — best-effort append-only log in SQLite, bounded by the store deadline
//!   (10ms by default). Its failures are logged and never reach the caller.
//! - `app_router` — the axum router holding both behind a shared `AppState`.
//!
//! Error handling:
//! - Provider timeouts, transport failures and undecodable payloads become
//!   `500 Internal Server Error` with a plain-text message; the cause is logged.
//! - A failing request never stops the server. Only failing to bind the listening
//!   address is fatal.
//!
//! Configuration comes from command-line flags (see `args`) whose defaults reproduce the
//! standard setup: `0.0.0.0:8080`, USD/BRL from economia.awesomeapi.com.br, `quotes.db`.
#![warn(missing_docs)]
use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use quote_common::Result;
use tokio::net::TcpListener;

use crate::args::Args;
use crate::config::ServerConfig;
use crate::model::store::QuoteStore;
use crate::router::{AppState, app_router};

mod args;
mod config;
mod error;
pub mod model;
mod provider;
mod router;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();
    let config = ServerConfig::from(Args::parse());

    let store = QuoteStore::new(&config.store_path, config.store_timeout);
    match store.init_schema() {
        Ok(()) => info!("Quote store ready at {}", store.path().display()),
        Err(e) => warn!("Quote store unavailable, quotes will not be persisted: {}", e),
    }

    let state = Arc::new(AppState::new(&config, store)?);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    info!("Quote server listening on {}", listener.local_addr()?);

    axum::serve(listener, app_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl+C received. Shutting down server...");
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
