use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::matcher::DEFAULT_MATCH_LIMIT;
use crate::core::search::DEFAULT_SEARCH_LIMIT;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_match_limit")]
    pub match_limit: usize,
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            match_limit: default_match_limit(),
            search_limit: default_search_limit(),
        }
    }
}

fn default_match_limit() -> usize { DEFAULT_MATCH_LIMIT }
fn default_search_limit() -> usize { DEFAULT_SEARCH_LIMIT }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_exact_weight")]
    pub exact: u32,
    #[serde(default = "default_partial_weight")]
    pub partial: u32,
    #[serde(default = "default_related_weight")]
    pub related: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            exact: default_exact_weight(),
            partial: default_partial_weight(),
            related: default_related_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            exact: config.exact,
            partial: config.partial,
            related: config.related,
        }
    }
}

fn default_exact_weight() -> u32 { 3 }
fn default_partial_weight() -> u32 { 2 }
fn default_related_weight() -> u32 { 1 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENT__), including a `.env` file
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENT__MATCHING__MATCH_LIMIT -> matching.match_limit
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("TALENT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.exact, 3);
        assert_eq!(weights.partial, 2);
        assert_eq!(weights.related, 1);
        assert_eq!(Settings::default().scoring_weights(), ScoringWeights::default());
    }

    #[test]
    fn test_default_limits() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.match_limit, 25);
        assert_eq!(matching.search_limit, 50);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_load_from_partial_file() {
        let path = std::env::temp_dir().join(format!("talent-match-{}.toml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[matching]\nmatch_limit = 10\n\n[scoring.weights]\nrelated = 0").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.matching.match_limit, 10);
        assert_eq!(settings.matching.search_limit, 50);
        assert_eq!(settings.scoring.weights.exact, 3);
        assert_eq!(settings.scoring.weights.related, 0);
        assert_eq!(settings.logging.level, "info");
    }
}
