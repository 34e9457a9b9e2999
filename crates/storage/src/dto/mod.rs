pub mod leaderboard;
pub mod round;
pub mod submission;
