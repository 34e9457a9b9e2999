use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::submission::{SubmissionListQuery, SubmitRequest, SubmitResponse};
use storage::models::StoredSubmission;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = SubmitRequest,
    responses(
        (status = 201, description = "Submission scored and recorded", body = SubmitResponse),
        (status = 400, description = "Validation error or missing answer"),
        (status = 404, description = "No scenario configured for the round")
    ),
    tag = "submissions"
)]
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Response, WebError> {
    // Length validation applies to the trimmed name, so a whitespace-only
    // name is rejected and " alpha " and "alpha" are one participant.
    let req = SubmitRequest {
        participant: req.participant.trim().to_string(),
        ..req
    };
    req.validate()?;

    let response = services::submit(&state.catalog, &state.store, req).await?;

    tracing::info!(
        participant = %response.participant,
        round = response.round,
        score = response.score,
        max_score = response.max_score,
        "submission scored"
    );

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/submissions",
    params(SubmissionListQuery),
    responses(
        (status = 200, description = "Stored submissions, ordered by submission time", body = Vec<StoredSubmission>)
    ),
    tag = "submissions"
)]
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionListQuery>,
) -> Result<Json<Vec<StoredSubmission>>, WebError> {
    let rows = services::list_submissions(&state.store, query.round).await?;

    Ok(Json(rows))
}
