use super::key::AnswerKey;

/// A business-problem description plus its fixed answer key. Immutable once
/// loaded; owned by the catalog for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    pub key: AnswerKey,
}

/// A timed segment of the exercise, bound to exactly one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub scenario_id: String,
}
