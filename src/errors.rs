use cashflow_config::ConfigError;
use cashflow_core::CoreError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Unified error type for the engine, configuration and storage layers.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger not loaded")]
    LedgerNotLoaded,
    #[error("Ledger not found: {0}")]
    LedgerNotFound(String),
    #[error("Projection rejected: {0}")]
    Projection(String),
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] AppError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidHorizon(_) | CoreError::HorizonTooLarge { .. } => {
                AppError::Projection(err.to_string())
            }
            CoreError::LedgerNotFound(name) => AppError::LedgerNotFound(name),
            CoreError::Storage(message) | CoreError::Serde(message) => {
                AppError::StorageError(message)
            }
            CoreError::Io(err) => AppError::StorageError(err.to_string()),
            CoreError::Validation(message) => AppError::InvalidInput(message),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => AppError::StorageError(io.to_string()),
            ConfigError::Serde(message) => AppError::ConfigError(message),
            other @ (ConfigError::UnknownKey(_) | ConfigError::InvalidValue { .. }) => {
                AppError::InvalidInput(other.to_string())
            }
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::Core(AppError::from(err))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Core(AppError::from(err))
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}
