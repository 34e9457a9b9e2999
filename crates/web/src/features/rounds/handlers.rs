use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::dto::round::{RoundDetailResponse, RoundSummary};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/rounds",
    responses(
        (status = 200, description = "List all configured rounds", body = Vec<RoundSummary>)
    ),
    tag = "rounds"
)]
pub async fn list_rounds(State(state): State<AppState>) -> Result<Json<Vec<RoundSummary>>, WebError> {
    Ok(Json(services::list_rounds(&state.catalog)))
}

#[utoipa::path(
    get,
    path = "/api/rounds/{id}",
    params(
        ("id" = u32, Path, description = "Round id")
    ),
    responses(
        (status = 200, description = "Round with its scenario, answer key values omitted", body = RoundDetailResponse),
        (status = 404, description = "No scenario configured for the round")
    ),
    tag = "rounds"
)]
pub async fn get_round(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Response, WebError> {
    let detail = services::get_round(&state.catalog, id)?;

    Ok(Json(detail).into_response())
}
