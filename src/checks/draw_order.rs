//! Edges should precede vertices so they render beneath them
//!
//! Only the first vertex and the last edge are compared, so a single finding is
//! reported no matter how many edges are out of place.

use crate::config::Config;
use crate::document::DiagramDocument;
use crate::types::{Finding, Rule};

pub fn check(doc: &DiagramDocument<'_>, _config: &Config) -> Vec<Finding> {
    let mut first_vertex = None;
    let mut last_edge = None;

    for (idx, cell) in doc.cells().enumerate() {
        if cell.is_vertex() && first_vertex.is_none() {
            first_vertex = Some(idx);
        }
        if cell.is_edge() {
            last_edge = Some(idx);
        }
    }

    match (first_vertex, last_edge) {
        (Some(vertex), Some(edge)) if edge > vertex => vec![Finding::warning(
            Rule::DrawOrder,
            "Edges (arrows) should be placed before vertices (boxes) in XML to render behind other elements",
        )],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use crate::checks::run;
    use crate::types::{Rule, Severity};

    #[test]
    fn test_edges_after_vertices() {
        let findings = run(
            Rule::DrawOrder,
            r#"<root>
                <mxCell id="v1" vertex="1" />
                <mxCell id="v2" vertex="1" />
                <mxCell id="e1" edge="1" />
                <mxCell id="e2" edge="1" />
            </root>"#,
        );

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert!(findings[0].cell_id.is_none());
    }

    #[test]
    fn test_edges_before_vertices() {
        let findings = run(
            Rule::DrawOrder,
            r#"<root>
                <mxCell id="0" />
                <mxCell id="e1" edge="1" />
                <mxCell id="e2" edge="1" />
                <mxCell id="v1" vertex="1" />
                <mxCell id="v2" vertex="1" />
            </root>"#,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_only_first_vertex_counts() {
        // interleaved after the first vertex still warns once
        let findings = run(
            Rule::DrawOrder,
            r#"<root>
                <mxCell id="v1" vertex="1" />
                <mxCell id="e1" edge="1" />
                <mxCell id="v2" vertex="1" />
                <mxCell id="e2" edge="1" />
            </root>"#,
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_only_edges_or_only_vertices() {
        assert!(run(Rule::DrawOrder, r#"<root><mxCell edge="1" /><mxCell edge="1" /></root>"#).is_empty());
        assert!(run(Rule::DrawOrder, r#"<root><mxCell vertex="1" /></root>"#).is_empty());
        assert!(run(Rule::DrawOrder, r#"<root><mxCell vertex="true" /><mxCell edge="1" /></root>"#).is_empty());
    }
}
