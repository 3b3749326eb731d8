//! PostgreSQL store tests
//!
//! Run against a disposable database:
//! `TEST_DATABASE_URL=postgres://... cargo test --test postgres_store -- --ignored`

use std::sync::Arc;

use friend_leaderboards::db::{create_pool, run_migrations};
use friend_leaderboards::models::{LeaderboardLimit, NewTime};
use friend_leaderboards::{PgTimeStore, TimeStore};

async fn test_store() -> PgTimeStore {
    let url = std::env::var("TEST_DATABASE_URL").expect("TEST_DATABASE_URL must be set");
    let pool = create_pool(&url, 16).await.expect("connect");
    run_migrations(&pool).await.expect("migrate");
    PgTimeStore::new(pool)
}

/// Group key unique to one test run so runs don't see each other's rows
fn unique_group(name: &str) -> String {
    format!("{}-{}", name, chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default())
}

fn new_time(group: &str, account: &str, time_ms: i64) -> NewTime {
    NewTime {
        group_key: group.to_string(),
        account_id: account.to_string(),
        map_id: "m1".to_string(),
        time_ms,
    }
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_upsert_keeps_minimum_and_refreshes_updated_at() {
    let store = test_store().await;
    let group = unique_group("upsert");

    assert_eq!(store.submit_best(&new_time(&group, "alice", 5000)).await.unwrap(), 5000);
    assert_eq!(store.submit_best(&new_time(&group, "alice", 4000)).await.unwrap(), 4000);

    let (created_at, before): (chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) =
        sqlx::query_as("SELECT created_at, updated_at FROM times WHERE group_key = $1")
            .bind(&group)
            .fetch_one(store.pool())
            .await
            .unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    assert_eq!(store.submit_best(&new_time(&group, "alice", 6000)).await.unwrap(), 4000);

    let (created_after, after): (chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>) =
        sqlx::query_as("SELECT created_at, updated_at FROM times WHERE group_key = $1")
            .bind(&group)
            .fetch_one(store.pool())
            .await
            .unwrap();

    assert_eq!(created_after, created_at);
    assert!(after > before);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_concurrent_upserts_keep_minimum() {
    let store = Arc::new(test_store().await);
    let group = unique_group("concurrent");

    let handles: Vec<_> = (1..=40)
        .map(|i| {
            let store = store.clone();
            let time = new_time(&group, "alice", 10_000 - i * 37);
            tokio::spawn(async move { store.submit_best(&time).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let entries = store
        .leaderboard(&group, "m1", LeaderboardLimit::default())
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].time_ms, 10_000 - 40 * 37);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_leaderboard_ranking_and_limit() {
    let store = test_store().await;
    let group = unique_group("ranking");

    for (account, time_ms) in [("bob", 4000), ("alice", 4000), ("carol", 3000), ("dave", 9000)] {
        store.submit_best(&new_time(&group, account, time_ms)).await.unwrap();
    }

    let entries = store
        .leaderboard(&group, "m1", LeaderboardLimit::from_param(Some("3")))
        .await
        .unwrap();

    let got: Vec<(&str, i64)> = entries
        .iter()
        .map(|e| (e.account_id.as_str(), e.rank))
        .collect();
    assert_eq!(got, vec![("carol", 1), ("alice", 2), ("bob", 3)]);
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_ping() {
    test_store().await.ping().await.unwrap();
}
