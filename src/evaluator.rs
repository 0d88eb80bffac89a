//! Runs the style checks over one document

use crate::checks;
use crate::config::Config;
use crate::document::DiagramDocument;
use crate::error::LintError;
use crate::types::{Rule, ValidationResult};

/// Rule evaluator for a single diagram
pub struct Evaluator<'input> {
    document: DiagramDocument<'input>,
    config: Config,
}

impl<'input> Evaluator<'input> {
    /// Parse `source` with the default configuration
    pub fn parse(source: &'input str) -> Result<Self, LintError> {
        Self::with_config(source, Config::default())
    }

    pub fn with_config(source: &'input str, config: Config) -> Result<Self, LintError> {
        Ok(Self {
            document: DiagramDocument::parse(source)?,
            config,
        })
    }

    /// Run every enabled check in rule order
    pub fn evaluate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        for rule in Rule::ALL {
            if !self.config.is_rule_enabled(rule) {
                log::debug!("skipping disabled rule {}", rule);
                continue;
            }

            let findings = checks::check_for(rule)(&self.document, &self.config);
            log::debug!("{}: {} finding(s)", rule, findings.len());
            result.extend(findings);
        }

        result
    }
}
