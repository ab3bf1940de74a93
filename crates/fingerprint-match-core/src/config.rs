//! Configuration management for the fingerprint correlation engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::resolve::ResolutionConfig;

/// Main configuration structure.
///
/// # Loading order
///
/// 1. `config/default.toml` (base settings)
/// 2. `config/{FINGERPRINT_MATCH_ENV}.toml` (environment-specific)
/// 3. Environment variables with `FINGERPRINT_MATCH_` prefix
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub resolution: ResolutionConfig,
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> CoreResult<Self> {
        let env =
            std::env::var("FINGERPRINT_MATCH_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("FINGERPRINT_MATCH").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::Config(format!("failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        self.resolution.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolution, ResolutionConfig::default());
    }

    #[test]
    fn test_parse_partial_toml() {
        let parsed: Config = toml::from_str(
            r#"
            [resolution]
            anonymous_accept = 55.0
            divergence = 85.0
            linked_accept = 70.0
            top_candidates = 3
            "#,
        )
        .unwrap();
        assert_eq!(parsed.resolution.anonymous_accept, 55.0);
        assert_eq!(parsed.resolution.top_candidates, 3);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_invalid_threshold_fails_validation() {
        let parsed: Config = toml::from_str(
            r#"
            [resolution]
            anonymous_accept = 140.0
            divergence = 90.0
            linked_accept = 70.0
            top_candidates = 5
            "#,
        )
        .unwrap();
        assert!(matches!(parsed.validate(), Err(CoreError::Config(_))));
    }
}
