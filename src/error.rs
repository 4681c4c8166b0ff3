use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Missing column: {column}")]
    MissingColumn { column: String },

    #[error("Invalid value '{value}' in column {column}: {reason}")]
    InvalidField {
        column: String,
        value: String,
        reason: String,
    },

    #[error("Unknown text encoding: {0}")]
    Encoding(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Test '{name}' must repeat at least once")]
    InvalidRepeatCount { name: String },

    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),
}
