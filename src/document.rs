//! Read-only view over a parsed draw.io document

use crate::error::LintError;
use roxmltree::{Document, Node, ParsingOptions};

pub(crate) const CELL_TAG: &str = "mxCell";
pub(crate) const GEOMETRY_TAG: &str = "mxGeometry";
pub(crate) const GRAPH_MODEL_TAG: &str = "mxGraphModel";

/// A parsed diagram
pub struct DiagramDocument<'input> {
    doc: Document<'input>,
}

impl<'input> DiagramDocument<'input> {
    pub fn parse(source: &'input str) -> Result<Self, LintError> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(source, options)?;
        Ok(Self { doc })
    }

    /// All elements with the given tag name, depth-first in document order
    pub fn elements_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
        self.doc
            .root()
            .descendants()
            .filter(move |node| node.is_element() && node.tag_name().name() == name)
    }

    /// All `mxCell` elements in document order
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_, 'input>> + '_ {
        self.elements_named(CELL_TAG).map(Cell)
    }

    /// The first `mxGraphModel` element, if any
    pub fn graph_model(&self) -> Option<Node<'_, 'input>> {
        self.elements_named(GRAPH_MODEL_TAG).next()
    }
}

/// An `mxCell` element
#[derive(Clone, Copy)]
pub struct Cell<'a, 'input>(Node<'a, 'input>);

impl<'a, 'input> Cell<'a, 'input> {
    /// Cell id, or `unknown`
    pub fn id(&self) -> &'a str {
        self.0.attribute("id").unwrap_or("unknown")
    }

    pub fn value(&self) -> &'a str {
        self.0.attribute("value").unwrap_or("")
    }

    pub fn style(&self) -> &'a str {
        self.0.attribute("style").unwrap_or("")
    }

    /// Whether the cell renders text
    pub fn has_text(&self) -> bool {
        !self.value().is_empty()
    }

    pub fn is_vertex(&self) -> bool {
        self.0.attribute("vertex") == Some("1")
    }

    pub fn is_edge(&self) -> bool {
        self.0.attribute("edge") == Some("1")
    }

    /// The `mxGeometry` child
    pub fn geometry(&self) -> Option<Node<'a, 'input>> {
        self.0
            .children()
            .find(|child| child.is_element() && child.tag_name().name() == GEOMETRY_TAG)
    }

    /// Geometry width; missing or unparsable widths read as 0
    pub fn width(&self) -> Option<f64> {
        self.geometry().map(|geometry| {
            geometry
                .attribute("width")
                .and_then(|w| w.trim().parse::<f64>().ok())
                .filter(|w| w.is_finite())
                .unwrap_or(0.0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"<mxfile>
  <diagram id="d1">
    <mxGraphModel page="0">
      <root>
        <mxCell id="0" />
        <mxCell id="1" parent="0" />
        <mxCell id="box" value="Label" style="rounded=1" vertex="1" parent="1">
          <mxGeometry x="10" y="10" width="120" height="40" as="geometry" />
        </mxCell>
        <mxCell id="arrow" edge="1" parent="1">
          <mxGeometry relative="1" as="geometry" />
        </mxCell>
      </root>
    </mxGraphModel>
  </diagram>
</mxfile>"#;

    #[test]
    fn test_cells_in_document_order() {
        let doc = DiagramDocument::parse(SOURCE).unwrap();
        let ids: Vec<_> = doc.cells().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["0", "1", "box", "arrow"]);
    }

    #[test]
    fn test_cell_attributes() {
        let doc = DiagramDocument::parse(SOURCE).unwrap();
        let cells: Vec<_> = doc.cells().collect();

        assert!(!cells[0].has_text());
        assert_eq!(cells[0].style(), "");
        assert!(cells[2].has_text());
        assert!(cells[2].is_vertex());
        assert!(!cells[2].is_edge());
        assert!(cells[3].is_edge());
    }

    #[test]
    fn test_width() {
        let doc = DiagramDocument::parse(SOURCE).unwrap();
        let cells: Vec<_> = doc.cells().collect();

        assert_eq!(cells[0].width(), None);
        assert_eq!(cells[2].width(), Some(120.0));
        // geometry without a width reads as zero
        assert_eq!(cells[3].width(), Some(0.0));
    }

    #[test]
    fn test_unparsable_width_is_zero() {
        let doc = DiagramDocument::parse(
            r#"<root><mxCell id="a"><mxGeometry width="wide" /></mxCell><mxCell id="b"><mxGeometry width="NaN" /></mxCell></root>"#,
        )
        .unwrap();
        let widths: Vec<_> = doc.cells().map(|c| c.width()).collect();
        assert_eq!(widths, vec![Some(0.0), Some(0.0)]);
    }

    #[test]
    fn test_missing_id() {
        let doc = DiagramDocument::parse("<mxCell value=\"x\" />").unwrap();
        assert_eq!(doc.cells().next().unwrap().id(), "unknown");
    }

    #[test]
    fn test_graph_model() {
        let doc = DiagramDocument::parse(SOURCE).unwrap();
        assert_eq!(doc.graph_model().unwrap().attribute("page"), Some("0"));

        // the root element itself counts
        let doc = DiagramDocument::parse("<mxGraphModel page=\"1\"><root /></mxGraphModel>").unwrap();
        assert!(doc.graph_model().is_some());

        let doc = DiagramDocument::parse("<root />").unwrap();
        assert!(doc.graph_model().is_none());
    }

    #[test]
    fn test_doctype_is_accepted() {
        let doc = DiagramDocument::parse(
            "<?xml version=\"1.0\"?>\n<!DOCTYPE mxfile>\n<mxfile><diagram><mxGraphModel page=\"0\" /></diagram></mxfile>",
        )
        .unwrap();
        assert!(doc.graph_model().is_some());
    }

    #[test]
    fn test_malformed() {
        assert!(DiagramDocument::parse("<mxGraphModel><root></mxGraphModel>").is_err());
    }
}
