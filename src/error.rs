use thiserror::Error;

/// Errors surfaced at the edges of the engine
///
/// Scoring, classification and ranking are total; only request validation,
/// configuration and logging setup can fail.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Telemetry error: {0}")]
    Telemetry(String),
}

pub type Result<T, E = ServiceError> = std::result::Result<T, E>;
