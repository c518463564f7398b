use serde_json::Value;
use thiserror::Error;

/// Errors raised by the HTTP adapter
///
/// Non-2xx statuses are not errors: they are returned to the caller as
/// ordinary responses so they can be asserted on.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A `createdAt` value that does not match the service's timestamp format
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot parse timestamp {input:?}: {source}")]
pub struct TimestampError {
    /// The raw value as the service sent it
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// A scenario name that is not in the catalogue
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown scenario: {0}")]
pub struct UnknownScenario(pub String);

/// A failed scenario assertion
///
/// Every assertion variant carries the step that failed, e.g. `"create item"`
/// or `"read item back"`, so a report line points at the offending call.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("{step}: expected HTTP {expected}, got {actual}")]
    UnexpectedStatus {
        step: &'static str,
        expected: u16,
        actual: u16,
    },
    #[error("{step}: no UUID in status message {message:?}")]
    MissingUuid { step: &'static str, message: String },
    #[error("{step}: field `{field}` is {actual}, expected {expected}")]
    FieldMismatch {
        step: &'static str,
        field: &'static str,
        expected: Value,
        actual: Value,
    },
    #[error("{step}: field `{field}` is missing")]
    MissingField {
        step: &'static str,
        field: &'static str,
    },
    #[error("{step}: field `{field}` is empty")]
    EmptyField {
        step: &'static str,
        field: &'static str,
    },
    #[error("{step}: field `{field}` is not {expected}: {actual}")]
    WrongType {
        step: &'static str,
        field: &'static str,
        expected: &'static str,
        actual: Value,
    },
    #[error("{step}: expected a non-empty list, got {body}")]
    EmptyList { step: &'static str, body: Value },
    #[error("{step}: two creations returned the same id {id}")]
    DuplicateId { step: &'static str, id: String },
    #[error("{step}: createdAt {created_at:?} is not today ({today})")]
    NotCreatedToday {
        step: &'static str,
        created_at: String,
        today: chrono::NaiveDate,
    },
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

impl ScenarioError {
    /// The step that failed, when the error is an assertion failure
    pub fn step(&self) -> Option<&'static str> {
        match self {
            ScenarioError::UnexpectedStatus { step, .. }
            | ScenarioError::MissingUuid { step, .. }
            | ScenarioError::FieldMismatch { step, .. }
            | ScenarioError::MissingField { step, .. }
            | ScenarioError::EmptyField { step, .. }
            | ScenarioError::WrongType { step, .. }
            | ScenarioError::EmptyList { step, .. }
            | ScenarioError::DuplicateId { step, .. }
            | ScenarioError::NotCreatedToday { step, .. } => Some(*step),
            ScenarioError::Client(_) | ScenarioError::Timestamp(_) => None,
        }
    }
}
