//! Friend Leaderboards Library
//!
//! Best-time submissions and ranked leaderboards per (group, map), served
//! over HTTP and stored in PostgreSQL.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use db::{MemoryTimeStore, PgTimeStore, TimeStore};
pub use error::{AppError, Result, StoreError};

use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TimeStore>,
    pub config: Config,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Arc<dyn TimeStore>, config: Config) -> Self {
        Self { store, config }
    }
}

/// Originating client address as reported by a fronting proxy: the first
/// `X-Forwarded-For` hop, else `X-Real-IP`, else "-".
pub fn client_ip<'a>(forwarded_for: Option<&'a str>, real_ip: Option<&'a str>) -> &'a str {
    forwarded_for
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .or_else(|| real_ip.map(str::trim).filter(|v| !v.is_empty()))
        .unwrap_or("-")
}

fn header_str<'a>(request: &'a Request<Body>, name: &str) -> Option<&'a str> {
    request.headers().get(name).and_then(|v| v.to_str().ok())
}

/// Build the application router with request-id, tracing and panic recovery
pub fn router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = header_str(request, "x-request-id").unwrap_or("-");
                let client_ip = client_ip(
                    header_str(request, "x-forwarded-for"),
                    header_str(request, "x-real-ip"),
                );
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id,
                    client_ip
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(CatchPanicLayer::new());

    Router::new()
        .route("/health", get(routes::health_check))
        .route("/times", post(routes::submit_time))
        .route("/leaderboard", get(routes::get_leaderboard))
        .layer(middleware)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_ip_prefers_first_forwarded_hop() {
        assert_eq!(
            client_ip(Some("203.0.113.7, 10.0.0.2"), Some("10.0.0.9")),
            "203.0.113.7"
        );
        assert_eq!(client_ip(None, Some(" 198.51.100.4 ")), "198.51.100.4");
        assert_eq!(client_ip(Some(""), Some("198.51.100.4")), "198.51.100.4");
        assert_eq!(client_ip(None, None), "-");
    }
}
