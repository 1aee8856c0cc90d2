//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Language code used when a caller does not name one.
    #[serde(default = "default_language")]
    pub language: String,
    /// Currency label configuration.
    #[serde(default)]
    pub labels: LabelsConfig,
}

/// Currency label configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelsConfig {
    /// Directory holding `currency-text-<code>.json` files.
    ///
    /// When unset the resources compiled into the binary are used.
    pub dir: Option<PathBuf>,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            labels: LabelsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHABD")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}
