use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::error::{Result, ServiceError};

/// Output format of the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Full,
}

impl LogFormat {
    /// Unknown names fall back to the plain text formatter
    pub fn from_setting(format: &str) -> Self {
        match format.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" => LogFormat::Pretty,
            _ => LogFormat::Full,
        }
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Only the first call
/// installs a subscriber; later calls return an error and leave it in place.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| ServiceError::Telemetry(e.to_string()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let installed = match LogFormat::from_setting(&settings.format) {
        LogFormat::Json => subscriber.json().try_init(),
        LogFormat::Pretty => subscriber.pretty().try_init(),
        LogFormat::Full => subscriber.try_init(),
    };

    installed.map_err(|e| ServiceError::Telemetry(e.to_string()))
}
