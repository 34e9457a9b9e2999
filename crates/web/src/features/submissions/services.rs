use std::collections::HashMap;

use storage::dto::submission::{SubmitRequest, SubmitResponse};
use storage::models::{StoredSubmission, Submission};
use storage::services::scoring;
use storage::{Catalog, SubmissionStore};

use crate::error::WebError;

/// Resolve the round, score the answers against its key, and append one row
/// to the store. The stored row carries the per-field breakdown so the score
/// stays auditable without re-scoring.
pub async fn submit(
    catalog: &Catalog,
    store: &SubmissionStore,
    req: SubmitRequest,
) -> Result<SubmitResponse, WebError> {
    let scenario = catalog.resolve(req.round)?;

    let submission = Submission::new(req.participant, req.round, req.answers);
    let result = scoring::score(&submission.answers, &scenario.key)?;

    let detail: HashMap<&str, i64> = result
        .fields
        .iter()
        .map(|f| (f.field.as_str(), f.points))
        .collect();
    let row = StoredSubmission {
        submission_id: submission.submission_id,
        submitted_at: submission.submitted_at,
        round: submission.round,
        participant: submission.participant.clone(),
        scenario: scenario.id.clone(),
        score: result.total,
        max_score: result.max,
        detail: serde_json::to_string(&detail).map_err(storage::error::StorageError::from)?,
    };
    store.append(&row).await?;

    Ok(SubmitResponse::new(&submission, &scenario.id, result))
}

pub async fn list_submissions(
    store: &SubmissionStore,
    round: Option<u32>,
) -> Result<Vec<StoredSubmission>, WebError> {
    let rows = match round {
        Some(round) => store.list_round(round).await?,
        None => store.list().await?,
    };
    Ok(rows)
}
