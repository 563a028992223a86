use std::collections::HashMap;

use crate::report::Report;

/// Counts redundant occurrences of repeated values.
///
/// A value seen `k > 1` times contributes `k - 1`, so `[5, 5, 5, 7, 9, 9]`
/// yields 3: two extra fives and one extra nine.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::analyzer::DuplicateAnalyzer;
///
/// assert_eq!(DuplicateAnalyzer::new(&[5, 5, 5, 7, 9, 9]).excess_occurrences(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DuplicateAnalyzer {
    values: Box<[i32]>,
}

impl DuplicateAnalyzer {
    #[must_use]
    pub fn new(values: &[i32]) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// The owned samples, in the order they were supplied.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    #[must_use]
    pub fn excess_occurrences(&self) -> usize {
        let mut counts = HashMap::<i32, usize>::new();
        for &value in &*self.values {
            *counts.entry(value).or_default() += 1;
        }
        counts
            .into_values()
            .filter(|&count| count > 1)
            .map(|count| count - 1)
            .sum()
    }

    #[must_use]
    pub fn report(&self) -> Report {
        Report::Duplicate {
            excess_occurrences: self.excess_occurrences(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicates() {
        assert_eq!(DuplicateAnalyzer::new(&[]).excess_occurrences(), 0);
        assert_eq!(DuplicateAnalyzer::new(&[1, 2, 3]).excess_occurrences(), 0);
    }

    #[test]
    fn test_counts_excess_not_distinct_repeats() {
        let analyzer = DuplicateAnalyzer::new(&[5, 5, 5, 7, 9, 9]);
        assert_eq!(analyzer.excess_occurrences(), 3);
        assert_eq!(analyzer.report().to_string(), "There were 3 duplicated values");
    }

    #[test]
    fn test_keeps_supplied_order() {
        let analyzer = DuplicateAnalyzer::new(&[3, 1, 2]);
        assert_eq!(analyzer.values(), [3, 1, 2]);
    }

    #[test]
    fn test_all_equal() {
        let values = [4; 50];
        assert_eq!(DuplicateAnalyzer::new(&values).excess_occurrences(), 49);
    }
}
