use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Unknown language profile: '{0}'")]
    UnknownLanguage(String),

    #[error("State Error: {0}")]
    State(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type CfResult<T> = Result<T, CipherForgeError>;
