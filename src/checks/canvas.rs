//! The graph model should disable the page so the background is transparent

use crate::config::Config;
use crate::document::DiagramDocument;
use crate::types::{Finding, Rule};

pub fn check(doc: &DiagramDocument<'_>, _config: &Config) -> Vec<Finding> {
    let Some(model) = doc.graph_model() else {
        return Vec::new();
    };

    if model.attribute("page").unwrap_or("1") == "0" {
        return Vec::new();
    }

    vec![Finding::warning(
        Rule::CanvasTransparency,
        "mxGraphModel should have page=\"0\" for transparent background",
    )]
}
