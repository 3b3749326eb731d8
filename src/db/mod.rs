pub mod memory;
pub mod pool;
pub mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{LeaderboardEntry, LeaderboardLimit, NewTime};

pub use memory::MemoryTimeStore;
pub use pool::{create_pool, run_migrations};
pub use postgres::PgTimeStore;

/// Persistence boundary for best times
///
/// Implementations own all concurrency control: `submit_best` must apply the
/// keep-minimum rule as one atomic step, never as a read followed by a write.
#[async_trait]
pub trait TimeStore: Send + Sync {
    /// Insert or lower the stored time for the triple and return the stored best.
    /// `updated_at` is refreshed even when the stored time does not change.
    async fn submit_best(&self, time: &NewTime) -> Result<i64, StoreError>;

    /// Ranked entries for one (group, map), best first
    async fn leaderboard(
        &self,
        group_key: &str,
        map_id: &str,
        limit: LeaderboardLimit,
    ) -> Result<Vec<LeaderboardEntry>, StoreError>;

    /// Cheap reachability probe
    async fn ping(&self) -> Result<(), StoreError>;
}
