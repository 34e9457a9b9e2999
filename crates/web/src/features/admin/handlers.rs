use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/admin/reset",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "All submissions cleared"),
        (status = 401, description = "Missing or invalid admin key")
    ),
    tag = "admin"
)]
pub async fn reset(State(state): State<AppState>) -> Result<Response, WebError> {
    services::reset(&state.store).await?;

    tracing::info!("all submissions cleared by instructor");

    Ok(StatusCode::NO_CONTENT.into_response())
}
