//! Mock quote servers for the client tests.
//!
//! Each server runs on its own thread with a private tokio runtime, so the blocking
//! client under test never runs inside an async context.
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use quote_common::net::QUOTE_PATH;

pub const QUOTE_BODY: &str = "{\"Dólar\":\"5.42\"}";

pub fn quote_server() -> Router {
    Router::new().route(
        QUOTE_PATH,
        get(|| async { ([(header::CONTENT_TYPE, "application/json")], QUOTE_BODY) }),
    )
}

pub fn slow_server(delay: Duration) -> Router {
    Router::new().route(
        QUOTE_PATH,
        get(move || async move {
            tokio::time::sleep(delay).await;
            QUOTE_BODY
        }),
    )
}

pub fn failing_server() -> Router {
    Router::new().route(
        QUOTE_PATH,
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "request to provider timed out after 200 milliseconds",
            )
        }),
    )
}

/// Serve `router` on an ephemeral port and return the quote endpoint URL.
pub fn spawn_server(router: Router) -> String {
    let (addr_tx, addr_rx) = mpsc::channel();
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            addr_tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });
    let addr = addr_rx.recv().unwrap();
    format!("http://{}{}", addr, QUOTE_PATH)
}

/// URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, QUOTE_PATH)
}
