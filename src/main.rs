//! drawio-lint CLI

use clap::{CommandFactory, Parser, ValueEnum};
use colored::Colorize;
use drawio_lint::output::{reporter_for, OutputFormat};
use drawio_lint::{Config, LintError, Runner};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "drawio-lint")]
#[command(about = "Checks draw.io diagrams for fonts, layering, label width, and canvas settings")]
#[command(version)]
struct Cli {
    /// Diagram files to validate (.drawio)
    files: Vec<PathBuf>,

    /// Config file path (default: auto-detect .drawiolintrc.yaml/.yml/.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Validate matching files inside directory arguments
    #[arg(short, long)]
    recursive: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show rule ids next to findings
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        println!("{}", Cli::command().render_usage());
        return ExitCode::from(1);
    }

    let colored = !cli.no_color && io::stdout().is_terminal();
    if !colored {
        colored::control::set_override(false);
    }

    match run(cli, colored) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, LintError> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    Ok(config)
}

fn run(cli: Cli, colored: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut reporter = reporter_for(
        cli.format.into(),
        Box::new(stdout.lock()),
        colored,
        cli.verbose,
    );

    let mut runner = Runner::new(config).recursive(cli.recursive);
    let totals = runner.run(&cli.files, reporter.as_mut())?;

    log::debug!("{} errors, {} warnings", totals.errors, totals.warnings);
    Ok(totals.has_errors())
}
