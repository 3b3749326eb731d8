use serde::Serialize;

use crate::constants::{DEFAULT_LEADERBOARD_LIMIT, MAX_LEADERBOARD_LIMIT};
use crate::models::TimeRecord;

/// One ranked row of a (group, map) leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub account_id: String,
    pub map_id: String,
    pub time_ms: i64,
    /// 1-based position ordered by (time_ms, account_id)
    pub rank: i64,
}

/// Number of entries a leaderboard query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaderboardLimit(i64);

impl LeaderboardLimit {
    /// Parse the raw `limit` query value.
    ///
    /// Anything absent, unparseable, or outside `1..=500` falls back to the
    /// default of 50 instead of being rejected.
    pub fn from_param(raw: Option<&str>) -> Self {
        let limit = raw
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|n| (1..=MAX_LEADERBOARD_LIMIT).contains(n))
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
        LeaderboardLimit(limit)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for LeaderboardLimit {
    fn default() -> Self {
        LeaderboardLimit(DEFAULT_LEADERBOARD_LIMIT)
    }
}

/// Order records by (time_ms, account_id), keep the first `limit`, and
/// number them from 1 with no gaps.
pub fn rank_entries(
    mut records: Vec<TimeRecord>,
    limit: LeaderboardLimit,
) -> Vec<LeaderboardEntry> {
    records.sort_by(|a, b| {
        a.time_ms
            .cmp(&b.time_ms)
            .then_with(|| a.account_id.cmp(&b.account_id))
    });

    records
        .into_iter()
        .take(limit.get() as usize)
        .zip(1..)
        .map(|(record, rank)| LeaderboardEntry {
            account_id: record.account_id,
            map_id: record.map_id,
            time_ms: record.time_ms,
            rank,
        })
        .collect()
}
