use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Points awarded for one field of an answer key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldScore {
    pub field: String,
    pub points: i64,
    pub weight: i64,
}

/// Outcome of scoring one submission against one answer key. Derived data:
/// recomputable from the submission and the key at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ScoreResult {
    pub fields: Vec<FieldScore>,
    pub total: i64,
    pub max: i64,
}
