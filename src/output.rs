//! Report writers
//!
//! Reports are streamed: each file is written as soon as it has been checked.

use crate::error::LintError;
use crate::runner::{FileOutcome, Totals};
use crate::types::Finding;
use colored::{Color, Colorize};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Receives per-file outcomes and the final totals
pub trait Reporter {
    fn file(&mut self, path: &Path, outcome: &FileOutcome) -> io::Result<()>;

    fn summary(&mut self, totals: &Totals) -> io::Result<()>;
}

/// Get a reporter for the specified format
pub fn reporter_for<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    colored: bool,
    show_rules: bool,
) -> Box<dyn Reporter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(writer, colored).show_rules(show_rules)),
        OutputFormat::Json => Box::new(JsonReporter::new(writer)),
    }
}

const RULE_WIDTH: usize = 50;

/// Human-readable report
pub struct TextReporter<W: Write> {
    out: W,
    colored: bool,
    show_rules: bool,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self {
            out,
            colored,
            show_rules: false,
        }
    }

    /// Prefix findings with their rule id
    pub fn show_rules(mut self, show_rules: bool) -> Self {
        self.show_rules = show_rules;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colored {
            text.color(color).bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn findings(&mut self, heading: &str, marker: &str, findings: &[Finding]) -> io::Result<()> {
        if findings.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "\n{}:", heading)?;
        for finding in findings {
            if self.show_rules {
                writeln!(self.out, "  {} [{}] {}", marker, finding.rule, finding)?;
            } else {
                writeln!(self.out, "  {} {}", marker, finding)?;
            }
        }
        Ok(())
    }

    fn failure(&mut self, error: &LintError) -> io::Result<()> {
        let cross = self.paint("✗", Color::Red);
        match error {
            LintError::Parse(inner) => writeln!(self.out, "  {} XML parse error: {}", cross, inner),
            other => writeln!(self.out, "  {} Error: {}", cross, other),
        }
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn file(&mut self, path: &Path, outcome: &FileOutcome) -> io::Result<()> {
        match outcome {
            FileOutcome::NotFound => {
                let label = self.paint("Error:", Color::Red);
                writeln!(self.out, "{} File not found: {}", label, path.display())
            }
            FileOutcome::Skipped { extension } => {
                let label = self.paint("Warning:", Color::Yellow);
                writeln!(
                    self.out,
                    "{} Skipping non-.{} file: {}",
                    label,
                    extension,
                    path.display()
                )
            }
            FileOutcome::Failed(error) => {
                writeln!(self.out, "\nValidating: {}", path.display())?;
                writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
                self.failure(error)
            }
            FileOutcome::Checked(result) => {
                writeln!(self.out, "\nValidating: {}", path.display())?;
                writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;

                let cross = self.paint("✗", Color::Red);
                let caution = self.paint("⚠", Color::Yellow);
                self.findings("Errors", &cross, &result.errors)?;
                self.findings("Warnings", &caution, &result.warnings)?;

                if result.is_clean() {
                    let check = self.paint("✓", Color::Green);
                    writeln!(self.out, "  {} All checks passed", check)?;
                }
                Ok(())
            }
        }
    }

    fn summary(&mut self, totals: &Totals) -> io::Result<()> {
        writeln!(self.out, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(
            self.out,
            "Summary: {} errors, {} warnings",
            totals.errors, totals.warnings
        )?;
        self.out.flush()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum FileStatus {
    Checked,
    NotFound,
    Skipped,
    Failed,
}

#[derive(Serialize)]
struct FileRecord<'a> {
    file: String,
    status: FileStatus,
    errors: &'a [Finding],
    warnings: &'a [Finding],
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<String>,
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    summary: &'a Totals,
}

/// One JSON object per line
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, value: &impl Serialize) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn file(&mut self, path: &Path, outcome: &FileOutcome) -> io::Result<()> {
        let none: &[Finding] = &[];
        let (status, errors, warnings, failure) = match outcome {
            FileOutcome::Checked(result) => (
                FileStatus::Checked,
                result.errors.as_slice(),
                result.warnings.as_slice(),
                None,
            ),
            FileOutcome::NotFound => (FileStatus::NotFound, none, none, None),
            FileOutcome::Skipped { .. } => (FileStatus::Skipped, none, none, None),
            FileOutcome::Failed(error) => {
                (FileStatus::Failed, none, none, Some(error.to_string()))
            }
        };

        self.write_line(&FileRecord {
            file: path.display().to_string(),
            status,
            errors,
            warnings,
            failure,
        })
    }

    fn summary(&mut self, totals: &Totals) -> io::Result<()> {
        self.write_line(&SummaryRecord { summary: totals })?;
        self.out.flush()
    }
}
