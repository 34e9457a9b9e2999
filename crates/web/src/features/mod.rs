pub mod admin;
pub mod leaderboard;
pub mod rounds;
pub mod submissions;
