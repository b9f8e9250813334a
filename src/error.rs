use thiserror::Error;

use crate::services::InputError;

/// Errors surfaced by the command line front end
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Matching is not stable: {0} blocking pairs")]
    Unstable(usize),
}
