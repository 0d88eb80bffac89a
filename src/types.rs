//! Core types for diagram validation

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five style rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    /// Text cells must declare a font family
    FontFamily,
    /// Font sizes must be readable
    FontSize,
    /// Edges must come before vertices so they render underneath
    DrawOrder,
    /// Wide-script labels need enough room
    LabelWidth,
    /// Canvas should be transparent
    CanvasTransparency,
}

impl Rule {
    pub const ALL: [Rule; 5] = [
        Rule::FontFamily,
        Rule::FontSize,
        Rule::DrawOrder,
        Rule::LabelWidth,
        Rule::CanvasTransparency,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Rule::FontFamily => "font-family",
            Rule::FontSize => "font-size",
            Rule::DrawOrder => "draw-order",
            Rule::LabelWidth => "label-width",
            Rule::CanvasTransparency => "canvas-transparency",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.id() == id)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recommendation, does not block
    Warning,
    /// Violation, fails the run
    Error,
}

/// A single validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: Rule,
    pub severity: Severity,
    pub message: String,
    /// Id of the offending cell, for per-cell rules
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_id: Option<String>,
}

impl Finding {
    pub fn error(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Error,
            message: message.into(),
            cell_id: None,
        }
    }

    pub fn warning(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity: Severity::Warning,
            message: message.into(),
            cell_id: None,
        }
    }

    pub fn with_cell(mut self, cell_id: impl Into<String>) -> Self {
        self.cell_id = Some(cell_id.into());
        self
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Errors and warnings produced by one evaluation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a finding to the list matching its severity
    pub fn push(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => self.errors.push(finding),
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = Finding>) {
        for finding in findings {
            self.push(finding);
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}
