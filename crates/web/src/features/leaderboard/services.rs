use storage::SubmissionStore;
use storage::dto::leaderboard::LeaderboardResponse;
use storage::services::leaderboard;

use crate::error::WebError;

/// Compute the board for the requested round, falling back to the latest
/// round that has submissions.
pub async fn get_leaderboard(
    store: &SubmissionStore,
    round: Option<u32>,
) -> Result<LeaderboardResponse, WebError> {
    let round = match round {
        Some(round) => Some(round),
        None => store.latest_round().await?,
    };

    let entries = match round {
        Some(round) => leaderboard::compute(&store.list_round(round).await?),
        None => Vec::new(),
    };

    Ok(LeaderboardResponse { round, entries })
}
