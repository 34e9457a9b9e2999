//! Round/scenario catalog: a read-only lookup table from round id to
//! scenario and answer key.
//!
//! The configuration document is parsed loosely with serde and then
//! validated eagerly into strongly typed models. Malformed entries are
//! rejected here, at startup, so the scoring path never sees them.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{CatalogError, ScoringError};
use crate::models::{AnswerKey, AnswerValue, FieldRule, KeyField, PenaltyPolicy, Round, Scenario};

#[derive(Debug, Deserialize)]
struct RawCatalog {
    scenarios: Vec<RawScenario>,
    rounds: Vec<RawRound>,
}

#[derive(Debug, Deserialize)]
struct RawScenario {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    kind: String,
    weight: i64,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    answer: Option<Value>,
    #[serde(default)]
    answers: Vec<String>,
    #[serde(default)]
    penalty: Option<String>,
    #[serde(default)]
    default: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawRound {
    id: u32,
    title: String,
    #[serde(default)]
    description: String,
    scenario: String,
}

/// Immutable mapping from round id to scenario. Loaded once at startup,
/// read many times; never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    rounds: BTreeMap<u32, Round>,
    scenarios: HashMap<String, Scenario>,
}

impl Catalog {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let doc = std::fs::read_to_string(path)?;
        Self::from_json(&doc)
    }

    pub fn from_json(doc: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(doc)?;

        let mut scenarios = HashMap::new();
        for raw_scenario in raw.scenarios {
            let scenario = validate_scenario(raw_scenario)?;
            if scenarios.contains_key(&scenario.id) {
                return Err(CatalogError::DuplicateScenario(scenario.id));
            }
            scenarios.insert(scenario.id.clone(), scenario);
        }

        let mut rounds = BTreeMap::new();
        for raw_round in raw.rounds {
            if !scenarios.contains_key(&raw_round.scenario) {
                return Err(CatalogError::UnknownScenario {
                    round: raw_round.id,
                    scenario: raw_round.scenario,
                });
            }
            let round = Round {
                id: raw_round.id,
                title: raw_round.title,
                description: raw_round.description,
                scenario_id: raw_round.scenario,
            };
            if rounds.insert(round.id, round).is_some() {
                return Err(CatalogError::DuplicateRound(raw_round.id));
            }
        }

        Ok(Self { rounds, scenarios })
    }

    /// Resolve a round id to its scenario (and therefore its answer key).
    pub fn resolve(&self, round_id: u32) -> Result<&Scenario, CatalogError> {
        let round = self.round(round_id)?;
        // Scenario references were checked at load time.
        self.scenarios
            .get(&round.scenario_id)
            .ok_or(CatalogError::UnknownRound(round_id))
    }

    pub fn round(&self, round_id: u32) -> Result<&Round, CatalogError> {
        self.rounds
            .get(&round_id)
            .ok_or(CatalogError::UnknownRound(round_id))
    }

    /// Rounds in ascending id order.
    pub fn rounds(&self) -> impl Iterator<Item = &Round> {
        self.rounds.values()
    }

    pub fn scenario(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.get(id)
    }
}

fn validate_scenario(raw: RawScenario) -> Result<Scenario, CatalogError> {
    if raw.fields.is_empty() {
        return Err(CatalogError::EmptyKey { scenario: raw.id });
    }

    let mut fields = Vec::with_capacity(raw.fields.len());
    let mut seen = BTreeSet::new();
    for field in raw.fields {
        if !seen.insert(field.name.clone()) {
            return Err(CatalogError::InvalidField {
                scenario: raw.id,
                field: field.name,
                reason: "duplicate field name".into(),
            });
        }
        fields.push(validate_field(&raw.id, field)?);
    }

    Ok(Scenario {
        id: raw.id,
        title: raw.title,
        description: raw.description,
        key: AnswerKey { fields },
    })
}

fn validate_field(scenario: &str, raw: RawField) -> Result<KeyField, CatalogError> {
    let RawField {
        name,
        kind,
        weight,
        prompt,
        options,
        answer,
        answers,
        penalty,
        default,
    } = raw;

    if weight < 0 {
        return Err(ScoringError::InvalidWeight {
            field: name,
            weight,
        }
        .into());
    }

    let invalid = |field: &str, reason: &str| CatalogError::InvalidField {
        scenario: scenario.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let rule = match kind.as_str() {
        "single-choice" => match answer {
            Some(Value::String(s)) => {
                if !options.is_empty() && !options.contains(&s) {
                    return Err(invalid(&name, "'answer' is not one of the declared options"));
                }
                FieldRule::SingleChoice { answer: s }
            }
            _ => return Err(invalid(&name, "single-choice requires a string 'answer'")),
        },
        "multi-select" => {
            if answers.is_empty() {
                return Err(invalid(&name, "multi-select requires non-empty 'answers'"));
            }
            if !options.is_empty()
                && let Some(stray) = answers.iter().find(|a| !options.contains(a))
            {
                return Err(invalid(
                    &name,
                    &format!("'answers' token '{stray}' is not one of the declared options"),
                ));
            }
            let penalty = match penalty.as_deref() {
                None => PenaltyPolicy::default(),
                Some(s) => PenaltyPolicy::parse(s)
                    .ok_or_else(|| invalid(&name, "unknown penalty policy"))?,
            };
            FieldRule::MultiSelect {
                answers: answers.into_iter().collect(),
                penalty,
            }
        }
        "binary" => match answer {
            Some(Value::Bool(b)) => FieldRule::Binary { answer: b },
            _ => return Err(invalid(&name, "binary requires a boolean 'answer'")),
        },
        other => {
            return Err(ScoringError::UnknownFieldKind {
                field: name,
                kind: other.to_string(),
            }
            .into());
        }
    };

    let default = match default {
        None => None,
        Some(value) => Some(convert_default(value).ok_or_else(|| {
            invalid(&name, "default must be a string, string array, or boolean")
        })?),
    };

    Ok(KeyField {
        name,
        weight,
        prompt,
        options,
        rule,
        default,
    })
}

fn convert_default(value: Value) -> Option<AnswerValue> {
    match value {
        Value::Bool(b) => Some(AnswerValue::Flag(b)),
        Value::String(s) => Some(AnswerValue::Choice(s)),
        Value::Array(items) => {
            let mut tokens = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(s) => tokens.push(s),
                    _ => return None,
                }
            }
            Some(AnswerValue::Choices(tokens))
        }
        _ => None,
    }
}
