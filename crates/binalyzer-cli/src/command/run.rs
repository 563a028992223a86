use std::path::PathBuf;

use binalyzer_sample::DEFAULT_SAMPLE_SIZE;

use super::{CommonArg, DEFAULT_SAMPLE_FILE, ReportArg, analyze};
use crate::util::{self, Progress};

const BANNER: &str = "Binary Data Analyzer";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RunArg {
    /// Number of samples to generate
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub(super) size: usize,
    /// Sample file the generated block is written to and reloaded from
    #[arg(long, default_value = DEFAULT_SAMPLE_FILE)]
    pub(super) file: PathBuf,
    #[clap(flatten)]
    pub(super) report: ReportArg,
    #[clap(flatten)]
    pub(super) common: CommonArg,
}

impl Default for RunArg {
    fn default() -> Self {
        Self {
            size: DEFAULT_SAMPLE_SIZE,
            file: PathBuf::from(DEFAULT_SAMPLE_FILE),
            report: ReportArg::default(),
            common: CommonArg::default(),
        }
    }
}

pub(crate) fn run(arg: &RunArg) -> anyhow::Result<()> {
    let RunArg {
        size,
        file,
        report,
        common,
    } = arg;
    let progress = Progress::new(common.quiet);
    let mut rng = util::create_rng(common.seed);

    progress.message(format_args!("Generating {size} samples..."));
    let generated = binalyzer_sample::generate(&mut rng, *size, common.domain_bound);
    util::save_samples(file, &generated)?;
    progress.message(format_args!("Saved samples to {}", file.display()));

    // Analyze what was read back, not what was generated.
    let samples = util::load_samples(file)?;
    progress.message(format_args!(
        "Loaded {} samples from {}",
        samples.len(),
        file.display()
    ));

    analyze::write_reports(file, &samples, report, common, &mut rng, Some(BANNER))
}
