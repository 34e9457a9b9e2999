use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::LeaderboardEntry;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    /// Round to rank. Defaults to the latest round with submissions.
    pub round: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    /// Round the board was computed for; absent when no submissions exist.
    pub round: Option<u32>,
    pub entries: Vec<LeaderboardEntry>,
}
