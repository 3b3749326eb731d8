use axum::{extract::State, http::StatusCode};

use crate::AppState;

/// Health check endpoint
///
/// Returns 200 "ok" when the store answers a ping within the store timeout,
/// 503 otherwise. Used by load balancers and compose health checks.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match tokio::time::timeout(state.config.store_timeout(), state.store.ping()).await {
        Ok(Ok(())) => (StatusCode::OK, "ok"),
        Ok(Err(e)) => {
            tracing::warn!("Store health check failed: {:?}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "db not ready")
        }
        Err(_) => {
            tracing::warn!("Store health check timed out");
            (StatusCode::SERVICE_UNAVAILABLE, "db not ready")
        }
    }
}
