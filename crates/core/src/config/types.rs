use std::path::PathBuf;

use serde::Deserialize;

use crate::providers::{ProviderEntry, ProviderRegistry};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub templates_dir: String,
    /// Overrides the builtin provider table. Declared as an array of tables
    /// so registry order follows declaration order.
    #[serde(default)]
    pub providers: Option<Vec<ProviderEntry>>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration after path expansion and registry construction.
///
/// Built once at startup and passed by reference; the provider registry is
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub templates_dir: PathBuf,
    pub providers: ProviderRegistry,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from("templates"),
            providers: ProviderRegistry::builtin(),
            logging: LoggingConfig::default(),
        }
    }
}
