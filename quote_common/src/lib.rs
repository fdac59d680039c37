//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `pair` — supported currency pairs and their provider/reply naming.
//! - `quote` — the `Quote` model with provider and reply JSON codecs.
//! - `net` — default addresses, URLs, deadlines and paths.
#![warn(missing_docs)]
pub mod error;
pub mod net;
pub mod pair;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use pair::CurrencyPair;
pub use quote::Quote;
pub use result::Result;
