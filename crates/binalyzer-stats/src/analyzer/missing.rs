use std::collections::HashSet;

use crate::{domain::DomainBound, report::Report};

/// Counts how many values of the domain `[0, bound)` never occur.
///
/// The count is always relative to the configured domain, not to the range
/// of the data. Samples outside the domain do not affect the result.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::analyzer::MissingAnalyzer;
///
/// let samples = (0..999).collect::<Vec<i32>>();
/// assert_eq!(MissingAnalyzer::new(&samples).missing_count(), 1);
/// assert_eq!(MissingAnalyzer::new(&[]).missing_count(), 1000);
/// ```
#[derive(Debug, Clone)]
pub struct MissingAnalyzer {
    values: Box<[i32]>,
    domain: DomainBound,
}

impl MissingAnalyzer {
    /// Creates an analyzer over the default domain `[0, 1000)`.
    #[must_use]
    pub fn new(values: &[i32]) -> Self {
        Self::with_domain(values, DomainBound::DEFAULT)
    }

    #[must_use]
    pub fn with_domain(values: &[i32], domain: DomainBound) -> Self {
        Self {
            values: values.into(),
            domain,
        }
    }

    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    #[must_use]
    pub fn domain(&self) -> DomainBound {
        self.domain
    }

    #[must_use]
    pub fn missing_count(&self) -> usize {
        let present = self.values.iter().copied().collect::<HashSet<_>>();
        self.domain
            .values()
            .filter(|value| !present.contains(value))
            .count()
    }

    #[must_use]
    pub fn report(&self) -> Report {
        Report::Missing {
            missing_values: self.missing_count(),
            domain_bound: self.domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_misses_whole_domain() {
        assert_eq!(MissingAnalyzer::new(&[]).missing_count(), 1000);
    }

    #[test]
    fn test_only_last_value_missing() {
        let samples = (0..999).collect::<Vec<i32>>();
        let analyzer = MissingAnalyzer::new(&samples);
        assert_eq!(analyzer.missing_count(), 1);
        assert_eq!(analyzer.report().to_string(), "There were 1 missing values");
    }

    #[test]
    fn test_out_of_domain_values_ignored() {
        let analyzer = MissingAnalyzer::new(&[-1, 1000, 5000, i32::MIN, 0]);
        assert_eq!(analyzer.missing_count(), 999);
    }

    #[test]
    fn test_duplicates_count_once() {
        let analyzer = MissingAnalyzer::new(&[7, 7, 7, 8]);
        assert_eq!(analyzer.missing_count(), 998);
    }

    #[test]
    fn test_custom_domain() {
        let domain = DomainBound::new(4).unwrap();
        let analyzer = MissingAnalyzer::with_domain(&[0, 3, 10], domain);
        assert_eq!(analyzer.missing_count(), 2);
        assert_eq!(
            analyzer.report(),
            Report::Missing {
                missing_values: 2,
                domain_bound: domain,
            }
        );
    }
}
