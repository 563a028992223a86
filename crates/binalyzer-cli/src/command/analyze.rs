use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use binalyzer_stats::analyzer::Analyzer;
use rand::Rng;

use super::{CommonArg, ReportArg, ReportFormat};
use crate::{
    schema::{AnalysisEntry, ReportDocument},
    util::{self, Output, Progress},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// Sample file to analyze
    pub(super) file: PathBuf,
    #[clap(flatten)]
    pub(super) report: ReportArg,
    #[clap(flatten)]
    pub(super) common: CommonArg,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let AnalyzeArg {
        file,
        report,
        common,
    } = arg;
    let progress = Progress::new(common.quiet);
    let mut rng = util::create_rng(common.seed);

    let samples = util::load_samples(file)?;
    progress.message(format_args!(
        "Loaded {} samples from {}",
        samples.len(),
        file.display()
    ));
    write_reports(file, &samples, report, common, &mut rng, None)
}

/// Runs the selected analyses over `samples` and writes their reports.
///
/// `banner` is printed before the reports in text format only.
pub(super) fn write_reports<R>(
    file: &Path,
    samples: &[i32],
    report: &ReportArg,
    common: &CommonArg,
    rng: &mut R,
    banner: Option<&str>,
) -> anyhow::Result<()>
where
    R: Rng + ?Sized,
{
    let analyses = report
        .analyzers
        .iter()
        .map(|&kind| {
            let analyzer = Analyzer::with_domain(kind, samples, common.domain_bound);
            AnalysisEntry {
                analyzer: kind,
                report: analyzer.report_with_rng(&mut *rng),
            }
        })
        .collect::<Vec<_>>();

    let mut output = Output::from_output_path(report.output.as_deref())?;
    match report.format {
        ReportFormat::Text => {
            write_text(&mut output, banner, &analyses).with_context(|| {
                format!("Failed to write reports to {}", output.display_path())
            })?;
            output.finish()?;
        }
        ReportFormat::Json => {
            let document = ReportDocument {
                file: file.to_path_buf(),
                samples: samples.len(),
                domain_bound: common.domain_bound,
                seed: common.seed,
                analyses,
            };
            output.write_json(&document)?;
        }
    }
    Ok(())
}

fn write_text<W>(
    mut writer: W,
    banner: Option<&str>,
    analyses: &[AnalysisEntry],
) -> io::Result<()>
where
    W: Write,
{
    if let Some(banner) = banner {
        writeln!(writer, "{banner}\n")?;
    }
    for entry in analyses {
        writeln!(writer, "{}", entry.report)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use binalyzer_stats::{analyzer::AnalyzerKind, domain::DomainBound, report::Report};

    use super::*;

    #[test]
    fn test_text_layout() {
        let analyses = [
            AnalysisEntry {
                analyzer: AnalyzerKind::Statistics,
                report: Report::NoData,
            },
            AnalysisEntry {
                analyzer: AnalyzerKind::Missing,
                report: Report::Missing {
                    missing_values: 1000,
                    domain_bound: DomainBound::DEFAULT,
                },
            },
        ];

        let mut buf = vec![];
        write_text(&mut buf, Some("Binary Data Analyzer"), &analyses).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Binary Data Analyzer\n\nNo data to analyze.\nThere were 1000 missing values\n"
        );

        let mut buf = vec![];
        write_text(&mut buf, None, &analyses[1..]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "There were 1000 missing values\n"
        );
    }

    #[test]
    fn test_json_document() {
        let document = ReportDocument {
            file: PathBuf::from("binary.dat"),
            samples: 0,
            domain_bound: DomainBound::DEFAULT,
            seed: Some(1),
            analyses: vec![AnalysisEntry {
                analyzer: AnalyzerKind::Duplicate,
                report: Report::Duplicate {
                    excess_occurrences: 0,
                },
            }],
        };
        let json = serde_json::to_value(&document).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "file": "binary.dat",
                "samples": 0,
                "domain_bound": 1000,
                "seed": 1,
                "analyses": [
                    {
                        "analyzer": "duplicate",
                        "report": { "duplicate": { "excess_occurrences": 0 } }
                    }
                ]
            })
        );
    }
}
