//! The closed set of analyses that can be run over a sample block.
//!
//! Every analyzer takes its own copy of the samples when it is constructed,
//! so the caller's data is never modified and later changes to it are not
//! observed. [`Analyzer`] dispatches over the four variants; each variant is
//! also usable on its own through its typed accessors.
//!
//! | Kind | Sorted at construction | Result |
//! |---|---|---|
//! | [`Statistics`](StatisticsAnalyzer) | yes | min, max, mean, median, mode |
//! | [`Duplicate`](DuplicateAnalyzer) | no | excess occurrences of repeated values |
//! | [`Missing`](MissingAnalyzer) | no | domain values absent from the samples |
//! | [`Search`](SearchAnalyzer) | yes | random keys found by binary search |

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use self::{
    duplicate::DuplicateAnalyzer, missing::MissingAnalyzer, search::SearchAnalyzer,
    statistics::StatisticsAnalyzer,
};
use crate::{domain::DomainBound, report::Report};

mod duplicate;
mod missing;
mod search;
mod statistics;

/// Tag selecting one of the analyses.
///
/// Parses case-insensitively from the variant name:
///
/// ```
/// use binalyzer_stats::analyzer::AnalyzerKind;
///
/// assert_eq!("missing".parse::<AnalyzerKind>().unwrap(), AnalyzerKind::Missing);
/// assert_eq!("Search".parse::<AnalyzerKind>().unwrap(), AnalyzerKind::Search);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::FromStr,
)]
#[serde(rename_all = "snake_case")]
pub enum AnalyzerKind {
    Statistics,
    Duplicate,
    Missing,
    Search,
}

impl AnalyzerKind {
    /// All kinds, in the order the command line tool runs them.
    pub const ALL: [Self; 4] = [
        Self::Statistics,
        Self::Duplicate,
        Self::Missing,
        Self::Search,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Statistics => "statistics",
            Self::Duplicate => "duplicate",
            Self::Missing => "missing",
            Self::Search => "search",
        }
    }
}

/// An analyzer owning a private copy of the samples.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::analyzer::{Analyzer, AnalyzerKind};
///
/// let samples = vec![1, 2, 2, 3, 4];
/// let analyzers = AnalyzerKind::ALL.map(|kind| Analyzer::new(kind, &samples));
///
/// assert!(analyzers[0].analyze().starts_with("The minimum value is 1\n"));
/// assert_eq!(analyzers[1].analyze(), "There were 1 duplicated values");
/// assert_eq!(analyzers[2].analyze(), "There were 996 missing values");
///
/// // The caller's samples are left as they were.
/// assert_eq!(samples, [1, 2, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, derive_more::From, derive_more::IsVariant)]
pub enum Analyzer {
    Statistics(StatisticsAnalyzer),
    Duplicate(DuplicateAnalyzer),
    Missing(MissingAnalyzer),
    Search(SearchAnalyzer),
}

impl Analyzer {
    /// Creates an analyzer of the given kind over `[0, 1000)`.
    #[must_use]
    pub fn new(kind: AnalyzerKind, values: &[i32]) -> Self {
        Self::with_domain(kind, values, DomainBound::DEFAULT)
    }

    /// Like [`Self::new`], but with an explicit domain for the missing-value
    /// and search analyses. The other kinds ignore `domain`.
    #[must_use]
    pub fn with_domain(kind: AnalyzerKind, values: &[i32], domain: DomainBound) -> Self {
        match kind {
            AnalyzerKind::Statistics => StatisticsAnalyzer::new(values).into(),
            AnalyzerKind::Duplicate => DuplicateAnalyzer::new(values).into(),
            AnalyzerKind::Missing => MissingAnalyzer::with_domain(values, domain).into(),
            AnalyzerKind::Search => SearchAnalyzer::with_domain(values, domain).into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AnalyzerKind {
        match self {
            Self::Statistics(_) => AnalyzerKind::Statistics,
            Self::Duplicate(_) => AnalyzerKind::Duplicate,
            Self::Missing(_) => AnalyzerKind::Missing,
            Self::Search(_) => AnalyzerKind::Search,
        }
    }

    /// Number of samples the analyzer owns.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Statistics(a) => a.values().len(),
            Self::Duplicate(a) => a.values().len(),
            Self::Missing(a) => a.values().len(),
            Self::Search(a) => a.values().len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs the analysis and renders its report as text.
    ///
    /// The search analysis draws its keys from the thread-local generator,
    /// which is seeded from the OS once per thread.
    #[must_use]
    pub fn analyze(&self) -> String {
        self.analyze_with_rng(&mut rand::rng())
    }

    /// Like [`Self::analyze`], but draws random keys from `rng`.
    #[must_use]
    pub fn analyze_with_rng<R>(&self, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        self.report_with_rng(rng).to_string()
    }

    /// Runs the analysis and returns its typed report.
    pub fn report_with_rng<R>(&self, rng: &mut R) -> Report
    where
        R: Rng + ?Sized,
    {
        match self {
            Self::Statistics(a) => a.report(),
            Self::Duplicate(a) => a.report(),
            Self::Missing(a) => a.report(),
            Self::Search(a) => a.report(rng),
        }
    }
}
