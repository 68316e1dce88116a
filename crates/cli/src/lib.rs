//! CLI for N-queens benchmark reports.
//!
//! This crate provides the `queens-report` command: it loads the results
//! document, prints the ranked summary, per-record series and language
//! counts, and merges fresh runner logs into the results document.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod commands;
pub mod logging;
pub mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use commands::{OutputFormat, SeriesQuery, TieBreak};
use queens_report_core::ReportState;
use settings::ReportSettings;

/// N-queens benchmark report CLI.
#[derive(Parser, Debug)]
#[command(name = "queens-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to ./queens-report.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Results JSON document.
    #[arg(short, long, global = true, env = "QUEENS_REPORT_RESULTS_FILE")]
    pub results: Option<PathBuf>,

    /// Smallest board width included in size series.
    #[arg(long, global = true)]
    pub min_board_width: Option<u32>,

    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every record ranked by board width, then average duration.
    Summary {
        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,

        /// Extra key ranking records tied on width and average.
        #[arg(long, value_enum)]
        tie_break: Option<TieBreak>,
    },

    /// Print the time series and size series of one record.
    Series {
        /// Language of the record.
        #[arg(long)]
        language: String,

        /// Version of the record.
        #[arg(long = "lang-version")]
        lang_version: String,

        /// Source of the record.
        #[arg(long)]
        source: String,

        /// Board width of the record.
        #[arg(short, long)]
        width: u32,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
        format: OutputFormat,
    },

    /// Print the number of distinct languages.
    Languages,

    /// Merge runner logs into the results document.
    Analyse {
        /// Directory holding `*.log` files.
        #[arg(long)]
        results_dir: Option<PathBuf>,

        /// Analyser descriptor file.
        #[arg(long)]
        options: Option<PathBuf>,
    },

    /// Show the effective settings.
    Status,
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub async fn run() -> Result<()> {
    execute(Cli::parse()).await
}

/// Run the CLI with already parsed arguments.
pub async fn execute(cli: Cli) -> Result<()> {
    // A missing .env file is fine.
    dotenvy::dotenv().ok();

    let mut settings =
        ReportSettings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(results) = cli.results {
        settings.results_file = results;
    }
    if let Some(width) = cli.min_board_width {
        settings.min_board_width = width;
    }
    let level = if cli.verbose { "debug" } else { settings.log_level.as_str() };
    logging::init(level, settings.log_json)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut state = ReportState::default();

    match cli.command {
        Commands::Summary { format, tie_break } => {
            commands::load_results(&mut state, &settings.results_file).await?;
            let ranker = commands::ranker(tie_break);
            commands::summary(state.snapshot()?, &ranker, format, &mut out)
        }
        Commands::Series {
            language,
            lang_version,
            source,
            width,
            format,
        } => {
            commands::load_results(&mut state, &settings.results_file).await?;
            let query = SeriesQuery {
                language,
                version: lang_version,
                source,
                width,
            };
            commands::series(
                state.snapshot()?,
                &query,
                settings.min_board_width,
                format,
                &mut out,
            )
        }
        Commands::Languages => {
            commands::load_results(&mut state, &settings.results_file).await?;
            commands::languages(state.snapshot()?, &mut out)
        }
        Commands::Analyse {
            results_dir,
            options,
        } => {
            if let Some(dir) = results_dir {
                settings.results_dir = dir;
            }
            if let Some(options) = options {
                settings.analyse_file = options;
            }
            let report = commands::analyse(&settings)?;
            writeln!(
                out,
                "{} {} logs merged ({} skipped), {} records in {}",
                "✓".green(),
                report.logs,
                report.skipped,
                report.records,
                settings.results_file.display()
            )?;
            Ok(())
        }
        Commands::Status => {
            writeln!(out, "{}", "Queens Report".bold())?;
            writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
            writeln!(out, "Results file: {}", settings.results_file.display())?;
            writeln!(out, "Results directory: {}", settings.results_dir.display())?;
            writeln!(out, "Analyser options: {}", settings.analyse_file.display())?;
            writeln!(out, "Minimum board width: {}", settings.min_board_width)?;
            writeln!(out, "Log level: {}", settings.log_level)?;
            Ok(())
        }
    }
}
