use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymscanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{path} returned HTTP {status}")]
    UnexpectedStatus { path: String, status: u16 },

    #[error("{path} reported failure: {message}")]
    StepRejected { path: String, message: String },

    #[error("Invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unsupported file type: {0}")]
    UnsupportedExtension(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No data to export")]
    NothingToExport,
}

pub type Result<T> = std::result::Result<T, SymscanError>;
