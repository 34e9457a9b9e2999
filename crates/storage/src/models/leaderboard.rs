use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One ranked row of a per-round leaderboard: the best submission a
/// participant made in that round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub participant: String,
    pub scenario: String,
    pub score: i64,
    pub max_score: i64,
    pub submitted_at: DateTime<Utc>,
}
