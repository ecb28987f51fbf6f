use thiserror::Error;

/// Feil som avviser en enkelt treningspakke.
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("unknown activity code '{0}' (expected RUN, WLK or SWM)")]
    InvalidActivityCode(String),

    #[error("activity code {code} expects {expected} values, got {actual}")]
    ArgumentCountMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid {field} = {value}: {reason}")]
    InvalidMeasurement {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("parse error at {path}: {message}")]
    Parse { path: String, message: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown {kind} '{value}'")]
    UnknownOption { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, TrainingError>;
