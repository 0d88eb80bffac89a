//! Configuration for the linter
//!
//! Reads `.drawiolintrc.yaml`, `.drawiolintrc.yml` or `.drawiolintrc.json`
//! from the working directory, or an explicit file given on the command line.

use crate::types::Rule;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

const CONFIG_NAMES: [&str; 3] = [
    ".drawiolintrc.yaml",
    ".drawiolintrc.yml",
    ".drawiolintrc.json",
];

/// Numeric limits used by the checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Font sizes below this are errors
    pub minimum_font_size: u32,
    /// Font sizes below this are warnings
    pub recommended_font_size: u32,
    /// Width budget per wide-script character
    pub wide_char_width: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            minimum_font_size: 14,
            recommended_font_size: 18,
            wide_char_width: 30,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule ids to skip
    pub disabled: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Extensions (without the dot) that are validated
    pub extensions: Vec<String>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["drawio".to_string()],
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub thresholds: Thresholds,
    pub files: FilesConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config: Self = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "json" => serde_json::from_str(&content)?,
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "Unknown config file format: {}",
                    ext
                )))
            }
        };

        config.validate()?;
        for id in &config.rules.disabled {
            if Rule::from_id(id).is_none() {
                log::warn!("{}: unknown rule '{}' in rules.disabled", path.display(), id);
            }
        }

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the first config file found in `dir`
    pub fn find_and_load(dir: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        for name in CONFIG_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                let config = Self::load(&path)?;
                return Ok(Some((path, config)));
            }
        }
        Ok(None)
    }

    /// Load configuration from the working directory, or defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::find_and_load(&cwd)?
            .map(|(_, config)| config)
            .unwrap_or_default())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.thresholds;
        if t.minimum_font_size > t.recommended_font_size {
            return Err(ConfigError::Invalid(format!(
                "minimum_font_size ({}) is larger than recommended_font_size ({})",
                t.minimum_font_size, t.recommended_font_size
            )));
        }
        if self.files.extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "files.extensions must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_rule_enabled(&self, rule: Rule) -> bool {
        !self.rules.disabled.iter().any(|id| id == rule.id())
    }

    /// Whether the file extension is one we validate
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.trim_start_matches('.');
                self.files.extensions.iter().any(|allowed| {
                    allowed.trim_start_matches('.').eq_ignore_ascii_case(ext)
                })
            })
            .unwrap_or(false)
    }

    /// Primary extension, used in skip messages
    pub fn primary_extension(&self) -> &str {
        self.files
            .extensions
            .first()
            .map(|e| e.trim_start_matches('.'))
            .unwrap_or("drawio")
    }
}
