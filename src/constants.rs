/// Local compose database, used when DATABASE_URL is unset
pub const DEFAULT_DATABASE_URL: &str =
    "postgres://fpl_user:fpl_password@db:5432/friend_leaderboards?sslmode=disable";

pub const DEFAULT_PORT: u16 = 8080;

/// Pool size when DB_MAX_CONNECTIONS is unset
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;

/// Deadline for a single store operation (3 seconds)
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 3_000;

/// Leaderboard size when `limit` is absent or out of range
pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 50;

/// Largest `limit` a caller may request
pub const MAX_LEADERBOARD_LIMIT: i64 = 500;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a body that does not decode into a submission
pub const ERR_INVALID_JSON: &str = "invalid json";

/// Error message for a submission with empty identifiers or a non-positive time
pub const ERR_MISSING_FIELDS: &str = "missing required fields";

/// Error message for a query string that is not valid form encoding
pub const ERR_INVALID_QUERY: &str = "invalid query string";

/// Error message for a leaderboard query without group_key or map_id
pub const ERR_LEADERBOARD_PARAMS: &str = "group_key and map_id are required";
