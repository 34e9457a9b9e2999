//! Deterministic scoring engine.
//!
//! A pure function from (submitted answers, answer key) to a per-field
//! breakdown plus totals. No randomness, no fuzzy matching, no shared
//! mutable state: identical inputs always produce identical output, so a
//! stored submission can be re-scored at any time and concurrent calls need
//! no synchronization.

use std::collections::{BTreeSet, HashMap};

use crate::error::ScoringError;
use crate::models::{AnswerKey, AnswerValue, FieldRule, FieldScore, PenaltyPolicy, ScoreResult};

/// Score one submission's answers against an answer key.
///
/// Every field the key declares must be present in `answers` or carry a
/// declared default; otherwise `MissingField` is returned and nothing is
/// scored. Totals always satisfy `0 <= total <= max`.
pub fn score(
    answers: &HashMap<String, AnswerValue>,
    key: &AnswerKey,
) -> Result<ScoreResult, ScoringError> {
    let mut fields = Vec::with_capacity(key.fields.len());
    let mut total = 0;
    let mut max = 0;

    for field in &key.fields {
        if field.weight < 0 {
            return Err(ScoringError::InvalidWeight {
                field: field.name.clone(),
                weight: field.weight,
            });
        }

        let value = answers
            .get(&field.name)
            .or(field.default.as_ref())
            .ok_or_else(|| ScoringError::MissingField(field.name.clone()))?;

        let points = score_field(value, &field.rule, field.weight);

        total += points;
        max += field.weight;
        fields.push(FieldScore {
            field: field.name.clone(),
            points,
            weight: field.weight,
        });
    }

    Ok(ScoreResult { fields, total, max })
}

fn score_field(value: &AnswerValue, rule: &FieldRule, weight: i64) -> i64 {
    let points = match rule {
        FieldRule::SingleChoice { answer } => match value {
            // Exact, case-sensitive equality on the canonical token.
            AnswerValue::Choice(submitted) if submitted == answer => weight,
            _ => 0,
        },
        FieldRule::MultiSelect { answers, penalty } => {
            score_multi_select(value, answers, *penalty, weight)
        }
        FieldRule::Binary { answer } => match value {
            AnswerValue::Flag(submitted) if submitted == answer => weight,
            _ => 0,
        },
    };

    points.clamp(0, weight)
}

fn score_multi_select(
    value: &AnswerValue,
    required: &BTreeSet<String>,
    penalty: PenaltyPolicy,
    weight: i64,
) -> i64 {
    // A lone token counts as a one-element selection; a boolean matches
    // nothing and scores zero.
    let chosen: BTreeSet<&str> = match value {
        AnswerValue::Choices(tokens) => tokens.iter().map(String::as_str).collect(),
        AnswerValue::Choice(token) => BTreeSet::from([token.as_str()]),
        AnswerValue::Flag(_) => BTreeSet::new(),
    };

    let hits = chosen
        .iter()
        .filter(|token| required.contains(**token))
        .count() as i64;
    let extras = chosen.len() as i64 - hits;

    // One point per required token, capped at the field weight.
    let base = hits.min(weight);

    match penalty {
        PenaltyPolicy::None => base,
        PenaltyPolicy::SubtractPerExtra => base - extras,
        PenaltyPolicy::CapAtZero => {
            if extras > 0 {
                0
            } else {
                base
            }
        }
    }
}
