use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoyageError {
    #[error("{kind} not found: {name}")]
    ItemNotFound { kind: &'static str, name: String },

    #[error("Invalid parameters: {reason}")]
    InvalidParams { reason: String },

    #[error("Booking step not allowed: {reason}")]
    BookingState { reason: String },

    #[error("Booking draft not found: {id}")]
    DraftNotFound { id: String },

    #[error("Unknown currency code: {code}")]
    UnknownCurrency { code: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),
}

pub type Result<T> = std::result::Result<T, VoyageError>;
