//! Text cells must name a font family

use crate::config::Config;
use crate::document::DiagramDocument;
use crate::types::{Finding, Rule};

pub fn check(doc: &DiagramDocument<'_>, _config: &Config) -> Vec<Finding> {
    doc.cells()
        .filter(|cell| cell.has_text() || cell.style().contains("text"))
        .filter(|cell| !cell.style().contains("fontFamily="))
        .map(|cell| {
            Finding::error(
                Rule::FontFamily,
                format!("Cell '{}' has text but missing fontFamily in style", cell.id()),
            )
            .with_cell(cell.id())
        })
        .collect()
}
