use std::path::PathBuf;

use binalyzer_stats::{analyzer::AnalyzerKind, domain::DomainBound, report::Report};
use serde::Serialize;

/// JSON document written by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    /// Sample file the analyses ran on.
    pub file: PathBuf,
    pub samples: usize,
    pub domain_bound: DomainBound,
    /// Seed of the random generator, if one was given on the command line.
    pub seed: Option<u64>,
    pub analyses: Vec<AnalysisEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisEntry {
    pub analyzer: AnalyzerKind,
    pub report: Report,
}
