use axum::{
    Json,
    extract::{Query, State},
};
use storage::dto::leaderboard::{LeaderboardQuery, LeaderboardResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LeaderboardQuery),
    responses(
        (status = 200, description = "Best score per participant for the round, ranked", body = LeaderboardResponse)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, WebError> {
    let response = services::get_leaderboard(&state.store, query.round).await?;

    Ok(Json(response))
}
