//! draw.io style linter
//!
//! Checks draw.io diagrams for font settings, edge layering, label width of
//! wide-script text, and canvas transparency.
//!
//! # Example
//!
//! ```
//! use drawio_lint::Evaluator;
//!
//! let source = r#"<mxGraphModel page="0"><root>
//!     <mxCell id="a" value="Hello" style="fontFamily=Arial;fontSize=18" vertex="1" />
//! </root></mxGraphModel>"#;
//!
//! let result = Evaluator::parse(source).unwrap().evaluate();
//! assert!(result.is_clean());
//! ```

pub mod checks;
pub mod config;
mod document;
mod error;
mod evaluator;
pub mod output;
pub mod runner;
mod types;

pub use config::{Config, ConfigError, Thresholds};
pub use document::{Cell, DiagramDocument};
pub use error::LintError;
pub use evaluator::Evaluator;
pub use runner::{FileOutcome, Runner, Totals};
pub use types::{Finding, Rule, Severity, ValidationResult};
