use chrono::{DateTime, Utc};

use crate::constants::ERR_MISSING_FIELDS;
use crate::error::AppError;

/// Best time row, one per (group_key, map_id, account_id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRecord {
    /// Leaderboard namespace, e.g. a friend group
    pub group_key: String,
    /// Player within the group
    pub account_id: String,
    /// Course or level
    pub map_id: String,
    /// Best completion time in milliseconds (lower is better)
    pub time_ms: i64,
    /// When the triple was first submitted
    pub created_at: DateTime<Utc>,
    /// Last submission for the triple, improving or not
    pub updated_at: DateTime<Utc>,
}

/// A submission that passed field validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTime {
    pub group_key: String,
    pub account_id: String,
    pub map_id: String,
    pub time_ms: i64,
}

impl NewTime {
    /// Check that every identifier is non-empty and the time is positive
    pub fn validate(
        group_key: String,
        account_id: String,
        map_id: String,
        time_ms: i64,
    ) -> Result<Self, AppError> {
        if group_key.is_empty() || account_id.is_empty() || map_id.is_empty() || time_ms <= 0 {
            return Err(AppError::Validation(ERR_MISSING_FIELDS.to_string()));
        }

        Ok(NewTime {
            group_key,
            account_id,
            map_id,
            time_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(group: &str, account: &str, map: &str, time_ms: i64) -> Result<NewTime, AppError> {
        NewTime::validate(group.to_string(), account.to_string(), map.to_string(), time_ms)
    }

    #[test]
    fn test_validate_accepts_complete_submission() {
        let time = validate("g1", "alice", "m1", 5000).unwrap();
        assert_eq!(time.group_key, "g1");
        assert_eq!(time.account_id, "alice");
        assert_eq!(time.map_id, "m1");
        assert_eq!(time.time_ms, 5000);
    }

    #[test]
    fn test_validate_rejects_empty_identifiers() {
        assert!(matches!(validate("", "alice", "m1", 5000), Err(AppError::Validation(_))));
        assert!(matches!(validate("g1", "", "m1", 5000), Err(AppError::Validation(_))));
        assert!(matches!(validate("g1", "alice", "", 5000), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_time() {
        assert!(matches!(validate("g1", "alice", "m1", 0), Err(AppError::Validation(_))));
        assert!(matches!(validate("g1", "alice", "m1", -1), Err(AppError::Validation(_))));
        assert!(validate("g1", "alice", "m1", 1).is_ok());
    }
}
