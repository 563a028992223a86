use std::path::PathBuf;

use binalyzer_stats::{analyzer::AnalyzerKind, domain::DomainBound};
use clap::{Parser, Subcommand};

use self::{analyze::AnalyzeArg, generate::GenerateArg, run::RunArg};

mod analyze;
mod generate;
mod run;

const DEFAULT_SAMPLE_FILE: &str = "binary.dat";

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Generate a sample file, reload it and analyze it (default)
    Run(#[clap(flatten)] RunArg),
    /// Generate a sample file
    Generate(#[clap(flatten)] GenerateArg),
    /// Analyze an existing sample file
    Analyze(#[clap(flatten)] AnalyzeArg),
}

/// Options shared by every mode.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CommonArg {
    /// Seed for the random generator (seeded from the OS if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Exclusive upper bound of sample values
    #[arg(long, default_value_t = DomainBound::DEFAULT)]
    domain_bound: DomainBound,
    /// Suppress progress messages on stderr
    #[arg(long, short)]
    quiet: bool,
}

impl Default for CommonArg {
    fn default() -> Self {
        Self {
            seed: None,
            domain_bound: DomainBound::DEFAULT,
            quiet: false,
        }
    }
}

/// Options controlling which analyses run and where their reports go.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Analyses to run, in order
    #[arg(
        long,
        value_delimiter = ',',
        default_values = ["statistics", "duplicate", "missing", "search"]
    )]
    analyzers: Vec<AnalyzerKind>,
    /// Report format (text or json)
    #[arg(long, default_value = "text")]
    format: ReportFormat,
    /// Report output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Default for ReportArg {
    fn default() -> Self {
        Self {
            analyzers: AnalyzerKind::ALL.to_vec(),
            format: ReportFormat::Text,
            output: None,
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Run(RunArg::default())) {
        Mode::Run(arg) => run::run(&arg)?,
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Analyze(arg) => analyze::run(&arg)?,
    }
    Ok(())
}
