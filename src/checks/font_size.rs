//! Font sizes must be readable

use crate::config::Config;
use crate::document::DiagramDocument;
use crate::types::{Finding, Rule};
use regex::Regex;
use std::sync::LazyLock;

static FONT_SIZE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"fontSize=([0-9]+)").unwrap());

/// First `fontSize=<digits>` value in a style string
pub fn font_size(style: &str) -> Option<u64> {
    FONT_SIZE_REGEX
        .captures(style)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub fn check(doc: &DiagramDocument<'_>, config: &Config) -> Vec<Finding> {
    let minimum = u64::from(config.thresholds.minimum_font_size);
    let recommended = u64::from(config.thresholds.recommended_font_size);
    let mut findings = Vec::new();

    for cell in doc.cells().filter(|cell| cell.has_text()) {
        let Some(size) = font_size(cell.style()) else {
            continue;
        };

        if size < minimum {
            findings.push(
                Finding::error(
                    Rule::FontSize,
                    format!(
                        "Cell '{}' has fontSize={}, minimum is {}",
                        cell.id(),
                        size,
                        minimum
                    ),
                )
                .with_cell(cell.id()),
            );
        } else if size < recommended {
            findings.push(
                Finding::warning(
                    Rule::FontSize,
                    format!(
                        "Cell '{}' has fontSize={}, recommended is {}",
                        cell.id(),
                        size,
                        recommended
                    ),
                )
                .with_cell(cell.id()),
            );
        }
    }

    findings
}
