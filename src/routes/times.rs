use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::constants::ERR_INVALID_JSON;
use crate::error::{AppError, Result};
use crate::models::NewTime;
use crate::AppState;

/// Missing fields decode to empty values so they fail validation rather
/// than decoding. The body is read as JSON whatever its `Content-Type`.
#[derive(Debug, Deserialize)]
pub struct SubmitTimeRequest {
    #[serde(default)]
    pub group_key: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub map_id: String,
    #[serde(default)]
    pub time_ms: i64,
}

#[derive(Debug, Serialize)]
pub struct SubmitTimeResponse {
    pub best_time_ms: i64,
}

/// Submit a completion time
///
/// Keeps the lowest time ever submitted for the (group, map, account) triple
/// and returns it. A slower time leaves the stored best untouched but still
/// refreshes the record's `updated_at`.
///
/// POST /times
pub async fn submit_time(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitTimeResponse>> {
    let payload: SubmitTimeRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Undecodable submission body: {}", e);
        AppError::MalformedRequest(ERR_INVALID_JSON.to_string())
    })?;

    let time = NewTime::validate(
        payload.group_key,
        payload.account_id,
        payload.map_id,
        payload.time_ms,
    )?;

    let best_time_ms =
        tokio::time::timeout(state.config.store_timeout(), state.store.submit_best(&time))
            .await??;

    tracing::info!(
        "Time submitted for {}/{}/{}: {} ms (best {} ms)",
        time.group_key,
        time.map_id,
        time.account_id,
        time.time_ms,
        best_time_ms
    );

    Ok(Json(SubmitTimeResponse { best_time_ms }))
}
