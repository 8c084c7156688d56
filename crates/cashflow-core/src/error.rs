use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Horizon must be a positive number of months, got {0}")]
    InvalidHorizon(i64),
    #[error("Horizon of {requested} months exceeds the limit of {max}")]
    HorizonTooLarge { requested: i64, max: u32 },
    #[error("Ledger not found: {0}")]
    LedgerNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation failed: {0}")]
    Validation(String),
}
