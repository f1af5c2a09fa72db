use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Parse Error (line {line}): {reason}")]
    Parse { line: usize, reason: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type OrResult<T> = Result<T, OrderError>;
