use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub default_locale: String,
    pub message_files: Vec<String>,
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            message_files: Vec::new(),
            log_level: "warn".to_string(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, CliError> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_config_or_default(path: &Path) -> Result<CliConfig, CliError> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(CliConfig::default())
    }
}
