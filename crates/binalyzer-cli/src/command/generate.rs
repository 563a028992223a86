use std::path::PathBuf;

use binalyzer_sample::DEFAULT_SAMPLE_SIZE;

use super::{CommonArg, DEFAULT_SAMPLE_FILE};
use crate::util::{self, Progress};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of samples to generate
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub(super) size: usize,
    /// Sample file path
    #[arg(long, default_value = DEFAULT_SAMPLE_FILE)]
    pub(super) output: PathBuf,
    #[clap(flatten)]
    pub(super) common: CommonArg,
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        size,
        output,
        common,
    } = arg;
    let progress = Progress::new(common.quiet);
    let mut rng = util::create_rng(common.seed);

    progress.message(format_args!("Generating {size} samples..."));
    let samples = binalyzer_sample::generate(&mut rng, *size, common.domain_bound);
    util::save_samples(output, &samples)?;
    progress.message(format_args!(
        "Saved {} samples to {}",
        samples.len(),
        output.display()
    ));
    Ok(())
}
