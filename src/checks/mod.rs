//! Style checks
//!
//! Each check is a pure function over the document that returns its findings
//! in element order. The evaluator runs them in the order of [`Rule::ALL`].

pub mod canvas;
pub mod draw_order;
pub mod font_family;
pub mod font_size;
pub mod label_width;

use crate::config::Config;
use crate::document::DiagramDocument;
use crate::types::{Finding, Rule};

/// Signature shared by all checks
pub type CheckFn = fn(&DiagramDocument<'_>, &Config) -> Vec<Finding>;

/// The check implementing a rule
pub fn check_for(rule: Rule) -> CheckFn {
    match rule {
        Rule::FontFamily => font_family::check,
        Rule::FontSize => font_size::check,
        Rule::DrawOrder => draw_order::check,
        Rule::LabelWidth => label_width::check,
        Rule::CanvasTransparency => canvas::check,
    }
}

#[cfg(test)]
pub(crate) fn run(rule: Rule, source: &str) -> Vec<Finding> {
    let doc = DiagramDocument::parse(source).unwrap();
    check_for(rule)(&doc, &Config::default())
}
