//! Validates files one after another and keeps the running totals

use crate::config::Config;
use crate::error::LintError;
use crate::evaluator::Evaluator;
use crate::output::Reporter;
use crate::types::ValidationResult;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// What happened to one path
#[derive(Debug)]
pub enum FileOutcome {
    /// Path does not exist; counts as one error
    NotFound,
    /// Extension not accepted; not counted
    Skipped { extension: String },
    /// Read or parse failed; counts as one error
    Failed(LintError),
    Checked(ValidationResult),
}

impl FileOutcome {
    /// (errors, warnings) this outcome adds to the totals
    pub fn counts(&self) -> (usize, usize) {
        match self {
            FileOutcome::NotFound | FileOutcome::Failed(_) => (1, 0),
            FileOutcome::Skipped { .. } => (0, 0),
            FileOutcome::Checked(result) => (result.error_count(), result.warning_count()),
        }
    }
}

/// Error and warning counts across all files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub errors: usize,
    pub warnings: usize,
}

impl Totals {
    pub fn add(&mut self, outcome: &FileOutcome) {
        let (errors, warnings) = outcome.counts();
        self.errors += errors;
        self.warnings += warnings;
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// Drives validation across the paths given on the command line
pub struct Runner {
    config: Config,
    recursive: bool,
    totals: Totals,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            recursive: false,
            totals: Totals::default(),
        }
    }

    /// Walk directory arguments instead of skipping them
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Read and evaluate one file
    pub fn check_file(&self, path: &Path) -> Result<ValidationResult, LintError> {
        let source = fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let evaluator = Evaluator::with_config(&source, self.config.clone())?;
        Ok(evaluator.evaluate())
    }

    /// Classify and, when eligible, validate one path
    pub fn inspect(&self, path: &Path) -> FileOutcome {
        if !path.exists() {
            return FileOutcome::NotFound;
        }

        if !self.config.accepts_extension(path) {
            return FileOutcome::Skipped {
                extension: self.config.primary_extension().to_string(),
            };
        }

        log::debug!("validating {}", path.display());
        match self.check_file(path) {
            Ok(result) => FileOutcome::Checked(result),
            Err(e) => {
                log::debug!("{}: {}", path.display(), e);
                FileOutcome::Failed(e)
            }
        }
    }

    /// Paths to inspect for one argument
    pub fn expand(&self, path: &Path) -> Vec<PathBuf> {
        if !(self.recursive && path.is_dir()) {
            return vec![path.to_path_buf()];
        }

        WalkDir::new(path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| self.config.accepts_extension(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }

    /// Validate every path in order, reporting each as it completes
    pub fn run(&mut self, paths: &[PathBuf], reporter: &mut dyn Reporter) -> io::Result<Totals> {
        for arg in paths {
            for path in self.expand(arg) {
                let outcome = self.inspect(&path);
                self.totals.add(&outcome);
                reporter.file(&path, &outcome)?;
            }
        }

        reporter.summary(&self.totals)?;
        Ok(self.totals)
    }
}
