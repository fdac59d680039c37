//! Persistence models for the quote server.
//!
//! - `store` — best-effort SQLite log of every bid served.

pub mod store;
