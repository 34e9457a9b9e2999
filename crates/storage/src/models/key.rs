use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A value submitted for (or defaulted onto) a single scored field.
///
/// Single-choice fields carry one canonical token, multi-select fields a
/// list of tokens, binary fields a bool. The untagged representation keeps
/// submission payloads flat: `{"problem": "a", "goals": ["b", "c"],
/// "feasible": true}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Choice(String),
    Choices(Vec<String>),
}

/// How over-selection is penalized on a multi-select field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PenaltyPolicy {
    /// Extra tokens are ignored.
    None,
    /// One point subtracted per token outside the required set.
    #[default]
    SubtractPerExtra,
    /// Any token outside the required set zeroes the field.
    CapAtZero,
}

impl PenaltyPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "subtract-per-extra" => Some(Self::SubtractPerExtra),
            "cap-at-zero" => Some(Self::CapAtZero),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::SubtractPerExtra => "subtract-per-extra",
            Self::CapAtZero => "cap-at-zero",
        }
    }
}

/// Comparison rule for one scored field, by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    SingleChoice {
        answer: String,
    },
    MultiSelect {
        answers: BTreeSet<String>,
        penalty: PenaltyPolicy,
    },
    Binary {
        answer: bool,
    },
}

impl FieldRule {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SingleChoice { .. } => "single-choice",
            Self::MultiSelect { .. } => "multi-select",
            Self::Binary { .. } => "binary",
        }
    }
}

/// One entry of an answer key: the comparison rule, its weight, and the
/// presentation data a client needs to render the field.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyField {
    pub name: String,
    pub weight: i64,
    pub prompt: Option<String>,
    pub options: Vec<String>,
    pub rule: FieldRule,
    /// Value assumed when the submission omits this field. Fields without a
    /// default are required.
    pub default: Option<AnswerValue>,
}

/// The authoritative correct values and weights for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerKey {
    pub fields: Vec<KeyField>,
}

impl AnswerKey {
    /// Sum of declared weights, i.e. the best achievable total.
    pub fn max_score(&self) -> i64 {
        self.fields.iter().map(|f| f.weight).sum()
    }
}
