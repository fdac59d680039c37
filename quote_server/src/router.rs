//! HTTP surface of the quote server.
//!
//! `GET /quote` fetches a fresh quote from the provider, answers with
//! `{"<label>": "<bid>"}` and then hands the bid to a detached task that persists it.
//! Persistence errors are logged only; the reply has already been produced by then.
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use log::{debug, error, info};
use quote_common::Result;
use quote_common::net::QUOTE_PATH;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};
use crate::model::store::QuoteStore;
use crate::provider::QuoteProvider;

/// Shared, read-only state of the request handlers.
pub struct AppState {
    provider: QuoteProvider,
    store: QuoteStore,
    label: &'static str,
}

impl AppState {
    /// Wire the provider client from `config` next to an existing `store`.
    pub fn new(config: &ServerConfig, store: QuoteStore) -> Result<Self> {
        let provider = QuoteProvider::new(config)?;
        info!("Relaying {} quotes from {}", config.pair, provider.url());
        Ok(Self {
            provider,
            store,
            label: config.pair.label(),
        })
    }
}

/// Build the application router.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(get_quote))
        .with_state(state)
}

async fn get_quote(State(state): State<Arc<AppState>>) -> ApiResult<Response> {
    let quote = state.provider.fetch().await?;
    let body = quote.to_json_bytes(state.label).map_err(ApiError::Encode)?;
    debug!("Serving bid {}", quote.bid);
    let response = ([(header::CONTENT_TYPE, "application/json")], body).into_response();

    let store = state.store.clone();
    tokio::spawn(async move {
        if let Err(e) = store.save(&quote.bid).await {
            error!("DB error: {}", e);
        }
    });

    Ok(response)
}
