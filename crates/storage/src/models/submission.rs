use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::key::AnswerValue;

/// One participant's answers for one round. Immutable after scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub submission_id: Uuid,
    pub participant: String,
    pub round: u32,
    pub answers: HashMap<String, AnswerValue>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(participant: String, round: u32, answers: HashMap<String, AnswerValue>) -> Self {
        Self {
            submission_id: Uuid::new_v4(),
            participant,
            round,
            answers,
            submitted_at: Utc::now(),
        }
    }
}

/// One row of the append-only submission store. `detail` holds the per-field
/// point breakdown as a JSON object, keeping the CSV schema fixed across
/// scenarios with different field sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredSubmission {
    pub submission_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub round: u32,
    pub participant: String,
    pub scenario: String,
    pub score: i64,
    pub max_score: i64,
    pub detail: String,
}
