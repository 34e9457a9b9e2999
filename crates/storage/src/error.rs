use thiserror::Error;

/// Failures while reading or appending the submission store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Failures raised by the scoring engine, or by catalog validation when an
/// answer key declares something the engine could never score.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("submission is missing an answer for field '{0}'")]
    MissingField(String),

    #[error("field '{field}' declares unknown kind '{kind}'")]
    UnknownFieldKind { field: String, kind: String },

    #[error("field '{field}' declares invalid weight {weight}")]
    InvalidWeight { field: String, weight: i64 },
}

/// Failures while loading the round/scenario catalog, plus the runtime
/// catalog miss. Everything except `UnknownRound` is a startup-time failure.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid answer key: {0}")]
    Key(#[from] ScoringError),

    #[error("scenario '{scenario}' declares an empty answer key")]
    EmptyKey { scenario: String },

    #[error("scenario '{scenario}', field '{field}': {reason}")]
    InvalidField {
        scenario: String,
        field: String,
        reason: String,
    },

    #[error("duplicate round id {0}")]
    DuplicateRound(u32),

    #[error("duplicate scenario id '{0}'")]
    DuplicateScenario(String),

    #[error("round {round} references unknown scenario '{scenario}'")]
    UnknownScenario { round: u32, scenario: String },

    #[error("no scenario configured for round {0}")]
    UnknownRound(u32),
}
