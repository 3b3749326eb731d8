use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure talking to the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Body could not be decoded into the expected shape
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Well-formed input that breaks a field constraint
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Store operation timed out")]
    Timeout(#[from] tokio::time::error::Elapsed),
}

/// Implement IntoResponse to convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::MalformedRequest(ref msg) => {
                tracing::debug!("Rejected malformed request: {}", msg);
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::Validation(ref msg) => {
                tracing::debug!("Rejected invalid input: {}", msg);
                (StatusCode::BAD_REQUEST, msg.as_str())
            }
            AppError::Store(ref e) => {
                tracing::error!("Store error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Timeout(ref e) => {
                tracing::error!("Store timeout: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        let response = AppError::Validation("missing required fields".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = AppError::MalformedRequest("invalid json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_errors_map_to_internal_error() {
        let response =
            AppError::Store(StoreError::Unavailable("connection refused".to_string()))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = AppError::Store(StoreError::Database(sqlx::Error::PoolTimedOut))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
