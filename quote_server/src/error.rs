//! Mapping of pipeline errors onto HTTP responses.
//!
//! Any failure while obtaining or encoding a quote becomes `500 Internal Server Error`
//! with the error's message as plain text. The detailed cause is logged here, once,
//! so handlers can simply use `?`.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use quote_common::QuoteError;
use thiserror::Error;

/// Error returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Fetching or decoding the provider quote failed.
    #[error(transparent)]
    Provider(#[from] QuoteError),

    /// The reply body could not be encoded.
    #[error(transparent)]
    Encode(QuoteError),
}

/// Handler result alias.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Log prefix naming the stage that failed.
    fn context(&self) -> &'static str {
        match self {
            ApiError::Encode(_) => "Reply encode error",
            ApiError::Provider(QuoteError::Timeout { .. }) => "Provider timeout",
            ApiError::Provider(QuoteError::SerdeJson(_) | QuoteError::MissingPair(_)) => {
                "Provider decode error"
            }
            ApiError::Provider(_) => "Provider error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("{}: {}", self.context(), self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
