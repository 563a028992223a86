use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::DomainBound;

/// Result of a single analysis.
///
/// Its [`Display`](fmt::Display) form is the human-readable report printed by
/// the command line tool; its serde form is used for JSON output.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::report::Report;
///
/// let report = Report::Duplicate { excess_occurrences: 3 };
/// assert_eq!(report.to_string(), "There were 3 duplicated values");
/// assert_eq!(Report::NoData.to_string(), "No data to analyze.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::IsVariant)]
#[serde(rename_all = "snake_case")]
pub enum Report {
    /// The statistics analysis was given an empty sample block.
    NoData,
    Statistics(StatisticsSummary),
    Duplicate {
        /// Redundant instances beyond the first, summed over all repeated values.
        excess_occurrences: usize,
    },
    Missing {
        /// Domain values that never occur in the samples.
        missing_values: usize,
        domain_bound: DomainBound,
    },
    Search {
        /// Random keys that were found in the samples.
        found: usize,
        draws: usize,
    },
}

/// Descriptive statistics of a non-empty sample block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub min: i32,
    pub max: i32,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value; the smallest one when several share the highest count.
    pub mode: i32,
    /// Number of occurrences of [`mode`](Self::mode).
    pub mode_count: usize,
}

impl fmt::Display for StatisticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            min,
            max,
            mean,
            median,
            mode,
            mode_count,
        } = self;
        writeln!(f, "The minimum value is {min}")?;
        writeln!(f, "The maximum value is {max}")?;
        writeln!(f, "The mean value is {mean}")?;
        writeln!(f, "The median value is {median}")?;
        write!(f, "The mode value is {mode} which occurred {mode_count} times")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "No data to analyze."),
            Self::Statistics(summary) => fmt::Display::fmt(summary, f),
            Self::Duplicate { excess_occurrences } => {
                write!(f, "There were {excess_occurrences} duplicated values")
            }
            Self::Missing { missing_values, .. } => {
                write!(f, "There were {missing_values} missing values")
            }
            Self::Search { found, .. } => write!(f, "There were {found} random values found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_text() {
        let report = Report::Statistics(StatisticsSummary {
            min: 1,
            max: 4,
            mean: 2.4,
            median: 2.0,
            mode: 2,
            mode_count: 2,
        });
        assert_eq!(
            report.to_string(),
            "The minimum value is 1\n\
             The maximum value is 4\n\
             The mean value is 2.4\n\
             The median value is 2\n\
             The mode value is 2 which occurred 2 times"
        );
    }

    #[test]
    fn test_count_texts() {
        let missing = Report::Missing {
            missing_values: 1000,
            domain_bound: DomainBound::DEFAULT,
        };
        assert_eq!(missing.to_string(), "There were 1000 missing values");

        let search = Report::Search {
            found: 64,
            draws: 100,
        };
        assert_eq!(search.to_string(), "There were 64 random values found");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Report::Search {
            found: 5,
            draws: 100,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "search": { "found": 5, "draws": 100 } }));

        let json = serde_json::to_value(Report::NoData).unwrap();
        assert_eq!(json, serde_json::json!("no_data"));
    }
}
