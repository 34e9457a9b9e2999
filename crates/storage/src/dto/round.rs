//! Public catalog views. Correct answers and penalty policies stay server
//! side; only what a client needs to render the form is serialized.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{KeyField, Round, Scenario};

#[derive(Debug, Serialize, ToSchema)]
pub struct RoundSummary {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub scenario: ScenarioSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScenarioSummary {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RoundDetailResponse {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub scenario: ScenarioView,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScenarioView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldView {
    pub name: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub options: Vec<String>,
    pub weight: i64,
}

impl RoundSummary {
    pub fn new(round: &Round, scenario: &Scenario) -> Self {
        Self {
            id: round.id,
            title: round.title.clone(),
            description: round.description.clone(),
            scenario: ScenarioSummary {
                id: scenario.id.clone(),
                title: scenario.title.clone(),
            },
        }
    }
}

impl RoundDetailResponse {
    pub fn new(round: &Round, scenario: &Scenario) -> Self {
        Self {
            id: round.id,
            title: round.title.clone(),
            description: round.description.clone(),
            scenario: ScenarioView::from(scenario),
        }
    }
}

impl From<&Scenario> for ScenarioView {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.clone(),
            title: scenario.title.clone(),
            description: scenario.description.clone(),
            fields: scenario.key.fields.iter().map(FieldView::from).collect(),
        }
    }
}

impl From<&KeyField> for FieldView {
    fn from(field: &KeyField) -> Self {
        Self {
            name: field.name.clone(),
            kind: field.rule.kind().to_string(),
            prompt: field.prompt.clone(),
            options: field.options.clone(),
            weight: field.weight,
        }
    }
}
