use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::TimeStore;
use crate::error::StoreError;
use crate::models::{LeaderboardEntry, LeaderboardLimit, NewTime};

/// `TimeStore` backed by the PostgreSQL `times` table
#[derive(Clone)]
pub struct PgTimeStore {
    pool: PgPool,
}

impl PgTimeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TimeStore for PgTimeStore {
    async fn submit_best(&self, time: &NewTime) -> Result<i64, StoreError> {
        // Single statement: the conflict clause is applied under the row lock,
        // so concurrent writers to one triple can't lose the minimum.
        let best = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO times (group_key, account_id, map_id, time_ms)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (group_key, map_id, account_id)
            DO UPDATE SET time_ms = LEAST(EXCLUDED.time_ms, times.time_ms), updated_at = now()
            RETURNING time_ms
            "#,
        )
        .bind(&time.group_key)
        .bind(&time.account_id)
        .bind(&time.map_id)
        .bind(time.time_ms)
        .fetch_one(&self.pool)
        .await?;

        Ok(best)
    }

    async fn leaderboard(
        &self,
        group_key: &str,
        map_id: &str,
        limit: LeaderboardLimit,
    ) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT account_id, map_id, time_ms,
                   ROW_NUMBER() OVER (ORDER BY time_ms ASC, account_id ASC) AS rank
            FROM times
            WHERE group_key = $1 AND map_id = $2
            ORDER BY time_ms ASC, account_id ASC
            LIMIT $3
            "#,
        )
        .bind(group_key)
        .bind(map_id)
        .bind(limit.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
