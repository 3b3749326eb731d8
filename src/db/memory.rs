use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::db::TimeStore;
use crate::error::StoreError;
use crate::models::{rank_entries, LeaderboardEntry, LeaderboardLimit, NewTime, TimeRecord};

/// (group_key, map_id, account_id)
type TripleKey = (String, String, String);

/// In-process `TimeStore`, used for tests and local runs without PostgreSQL
///
/// Every upsert happens inside a single lock acquisition, which gives the
/// same no-lost-update guarantee as the SQL conflict clause.
#[derive(Debug, Default)]
pub struct MemoryTimeStore {
    records: Mutex<HashMap<TripleKey, TimeRecord>>,
}

impl MemoryTimeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full stored record for a triple, timestamps included
    pub fn record(&self, group_key: &str, map_id: &str, account_id: &str) -> Option<TimeRecord> {
        let key = (
            group_key.to_string(),
            map_id.to_string(),
            account_id.to_string(),
        );
        self.lock().ok()?.get(&key).cloned()
    }

    /// Number of stored records across all groups
    pub fn len(&self) -> usize {
        self.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<TripleKey, TimeRecord>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl TimeStore for MemoryTimeStore {
    async fn submit_best(&self, time: &NewTime) -> Result<i64, StoreError> {
        let now = Utc::now();
        let key = (
            time.group_key.clone(),
            time.map_id.clone(),
            time.account_id.clone(),
        );

        let mut records = self.lock()?;
        let record = records
            .entry(key)
            .and_modify(|existing| {
                existing.time_ms = existing.time_ms.min(time.time_ms);
                existing.updated_at = now;
            })
            .or_insert_with(|| TimeRecord {
                group_key: time.group_key.clone(),
                account_id: time.account_id.clone(),
                map_id: time.map_id.clone(),
                time_ms: time.time_ms,
                created_at: now,
                updated_at: now,
            });

        Ok(record.time_ms)
    }

    async fn leaderboard(
        &self,
        group_key: &str,
        map_id: &str,
        limit: LeaderboardLimit,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let matching: Vec<TimeRecord> = self
            .lock()?
            .values()
            .filter(|r| r.group_key == group_key && r.map_id == map_id)
            .cloned()
            .collect();

        Ok(rank_entries(matching, limit))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}
