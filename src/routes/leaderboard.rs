use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Serialize;

use crate::constants::{ERR_INVALID_QUERY, ERR_LEADERBOARD_PARAMS};
use crate::error::{AppError, Result};
use crate::models::{LeaderboardEntry, LeaderboardLimit};
use crate::AppState;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LeaderboardParams {
    pub group_key: Option<String>,
    pub map_id: Option<String>,
    /// Kept raw so an unparseable value falls back to the default
    pub limit: Option<String>,
}

impl LeaderboardParams {
    /// Pick the known keys out of decoded query pairs; a repeated key keeps
    /// its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = LeaderboardParams::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "group_key" => &mut params.group_key,
                "map_id" => &mut params.map_id,
                "limit" => &mut params.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<LeaderboardEntry>,
}

/// Ranked leaderboard for one map within a group
///
/// GET /leaderboard?group_key=<group>&map_id=<map>&limit=<1..=500>
pub async fn get_leaderboard(
    State(state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<LeaderboardResponse>> {
    let Query(pairs) = pairs.map_err(|rejection| {
        tracing::debug!("Undecodable leaderboard query: {}", rejection.body_text());
        AppError::MalformedRequest(ERR_INVALID_QUERY.to_string())
    })?;
    let params = LeaderboardParams::from_pairs(pairs);

    let (group_key, map_id) = match (params.group_key, params.map_id) {
        (Some(group_key), Some(map_id)) if !group_key.is_empty() && !map_id.is_empty() => {
            (group_key, map_id)
        }
        _ => return Err(AppError::Validation(ERR_LEADERBOARD_PARAMS.to_string())),
    };
    let limit = LeaderboardLimit::from_param(params.limit.as_deref());

    let entries = tokio::time::timeout(
        state.config.store_timeout(),
        state.store.leaderboard(&group_key, &map_id, limit),
    )
    .await??;

    tracing::debug!(
        "Leaderboard {}/{}: {} entries (limit {})",
        group_key,
        map_id,
        entries.len(),
        limit.get()
    );

    Ok(Json(LeaderboardResponse { entries }))
}
