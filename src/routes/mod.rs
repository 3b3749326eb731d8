pub mod health;
pub mod leaderboard;
pub mod times;

pub use health::health_check;
pub use leaderboard::get_leaderboard;
pub use times::submit_time;
