//! Error types

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to validate a file at all, as opposed to a rule violation
#[derive(Debug, Error)]
pub enum LintError {
    #[error("parse error: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl LintError {
    pub fn is_parse(&self) -> bool {
        matches!(self, LintError::Parse(_))
    }
}
