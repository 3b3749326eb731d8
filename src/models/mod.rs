pub mod leaderboard;
pub mod time_record;

pub use leaderboard::{rank_entries, LeaderboardEntry, LeaderboardLimit};
pub use time_record::{NewTime, TimeRecord};
