use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{AnswerValue, FieldScore, ScoreResult, Submission};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitRequest {
    /// Team or participant name.
    #[validate(length(min = 1, max = 50, message = "must be 1 to 50 characters"))]
    pub participant: String,
    pub round: u32,
    /// Field name to submitted value, one entry per scored field.
    pub answers: HashMap<String, AnswerValue>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitResponse {
    pub submission_id: Uuid,
    pub participant: String,
    pub round: u32,
    pub scenario: String,
    pub submitted_at: DateTime<Utc>,
    pub score: i64,
    pub max_score: i64,
    pub fields: Vec<FieldScore>,
}

impl SubmitResponse {
    pub fn new(submission: &Submission, scenario_id: &str, result: ScoreResult) -> Self {
        Self {
            submission_id: submission.submission_id,
            participant: submission.participant.clone(),
            round: submission.round,
            scenario: scenario_id.to_string(),
            submitted_at: submission.submitted_at,
            score: result.total,
            max_score: result.max,
            fields: result.fields,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SubmissionListQuery {
    /// Restrict the listing to one round.
    pub round: Option<u32>,
}
