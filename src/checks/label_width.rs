//! Labels with Hiragana, Katakana or CJK ideographs need room per character

use crate::config::Config;
use crate::document::DiagramDocument;
use crate::types::{Finding, Rule};

/// Hiragana, Katakana and CJK Unified Ideographs
pub fn is_wide_char(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{309F}' | '\u{30A0}'..='\u{30FF}' | '\u{4E00}'..='\u{9FFF}')
}

pub fn wide_char_count(text: &str) -> usize {
    text.chars().filter(|c| is_wide_char(*c)).count()
}

pub fn check(doc: &DiagramDocument<'_>, config: &Config) -> Vec<Finding> {
    let per_char = f64::from(config.thresholds.wide_char_width);
    let mut findings = Vec::new();

    for cell in doc.cells().filter(|cell| cell.has_text()) {
        let count = wide_char_count(cell.value());
        if count == 0 {
            continue;
        }

        // no geometry, nothing to measure
        let Some(width) = cell.width() else {
            continue;
        };

        let recommended = count as f64 * per_char;
        if width < recommended {
            findings.push(
                Finding::warning(
                    Rule::LabelWidth,
                    format!(
                        "Cell '{}' has {} wide-script chars with width={}, recommended width is {}",
                        cell.id(),
                        count,
                        width,
                        recommended
                    ),
                )
                .with_cell(cell.id()),
            );
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::run;
    use crate::types::Severity;

    fn cell(value: &str, width: &str) -> String {
        format!(
            r#"<root><mxCell id="jp" value="{}" vertex="1"><mxGeometry width="{}" height="40" as="geometry" /></mxCell></root>"#,
            value, width
        )
    }

    #[test]
    fn test_wide_char_count() {
        assert_eq!(wide_char_count("日本語"), 3);
        assert_eq!(wide_char_count("ひらがな"), 4);
        assert_eq!(wide_char_count("カタカナ"), 4);
        assert_eq!(wide_char_count("API ゲートウェイ"), 6);
        assert_eq!(wide_char_count("Hello"), 0);
        // Hangul is outside the counted ranges
        assert_eq!(wide_char_count("한국어"), 0);
    }

    #[test]
    fn test_range_edges() {
        assert!(is_wide_char('\u{3040}'));
        assert!(is_wide_char('\u{30FF}'));
        assert!(is_wide_char('\u{4E00}'));
        assert!(is_wide_char('\u{9FFF}'));
        assert!(!is_wide_char('\u{303F}'));
        assert!(!is_wide_char('\u{3100}'));
        assert!(!is_wide_char('\u{A000}'));
    }

    #[test]
    fn test_too_narrow() {
        let findings = run(Rule::LabelWidth, &cell("日本語", "50"));

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(
            findings[0].message,
            "Cell 'jp' has 3 wide-script chars with width=50, recommended width is 90"
        );
    }

    #[test]
    fn test_wide_enough() {
        assert!(run(Rule::LabelWidth, &cell("日本語", "100")).is_empty());
        assert!(run(Rule::LabelWidth, &cell("日本語", "90")).is_empty());
    }

    #[test]
    fn test_fractional_width() {
        let findings = run(Rule::LabelWidth, &cell("日本語", "89.5"));
        assert!(findings[0].message.contains("width=89.5"));
    }

    #[test]
    fn test_missing_width_reads_as_zero() {
        let findings = run(
            Rule::LabelWidth,
            r#"<root><mxCell id="jp" value="漢字"><mxGeometry height="40" /></mxCell></root>"#,
        );
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("width=0,"));
    }

    #[test]
    fn test_no_geometry_is_skipped() {
        assert!(run(Rule::LabelWidth, r#"<root><mxCell id="jp" value="日本語" /></root>"#).is_empty());
    }

    #[test]
    fn test_latin_text_is_skipped() {
        assert!(run(Rule::LabelWidth, &cell("Gateway", "10")).is_empty());
    }
}
