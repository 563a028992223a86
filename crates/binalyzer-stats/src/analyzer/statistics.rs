use std::collections::HashMap;

use crate::{
    report::{Report, StatisticsSummary},
    sort::selection_sort,
};

/// Computes min, max, mean, median and mode of the samples.
///
/// The samples are copied and sorted once at construction.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::analyzer::StatisticsAnalyzer;
///
/// let summary = StatisticsAnalyzer::new(&[4, 2, 1, 3, 2]).summary().unwrap();
/// assert_eq!((summary.min, summary.max), (1, 4));
/// assert_eq!(summary.mean, 2.4);
/// assert_eq!(summary.median, 2.0);
/// assert_eq!((summary.mode, summary.mode_count), (2, 2));
///
/// assert!(StatisticsAnalyzer::new(&[]).summary().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StatisticsAnalyzer {
    values: Box<[i32]>,
}

impl StatisticsAnalyzer {
    #[must_use]
    pub fn new(values: &[i32]) -> Self {
        let mut values = Box::<[i32]>::from(values);
        selection_sort(&mut values[..]);
        Self { values }
    }

    /// The owned samples, in ascending order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Returns `None` if there are no samples.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn summary(&self) -> Option<StatisticsSummary> {
        let values = &*self.values;
        let min = *values.first()?;
        let max = *values.last()?;

        let n = values.len();
        let sum = values.iter().copied().map(i64::from).sum::<i64>();
        let mean = sum as f64 / n as f64;

        let mid = n / 2;
        let median = if n % 2 == 0 {
            (f64::from(values[mid - 1]) + f64::from(values[mid])) / 2.0
        } else {
            f64::from(values[mid])
        };

        let mut counts = HashMap::<i32, usize>::new();
        for &value in values {
            *counts.entry(value).or_default() += 1;
        }
        // Strict comparison keeps the earliest (smallest) value on ties.
        let (mode, mode_count) = values
            .iter()
            .map(|value| (*value, counts[value]))
            .fold((min, 0), |best, candidate| {
                if candidate.1 > best.1 { candidate } else { best }
            });

        Some(StatisticsSummary {
            min,
            max,
            mean,
            median,
            mode,
            mode_count,
        })
    }

    #[must_use]
    pub fn report(&self) -> Report {
        self.summary().map_or(Report::NoData, Report::Statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarize(values: &[i32]) -> StatisticsSummary {
        StatisticsAnalyzer::new(values).summary().unwrap()
    }

    #[test]
    fn test_classic_measures() {
        let summary = summarize(&[1, 2, 2, 3, 4]);
        assert_eq!(
            summary,
            StatisticsSummary {
                min: 1,
                max: 4,
                mean: 2.4,
                median: 2.0,
                mode: 2,
                mode_count: 2,
            }
        );
    }

    #[test]
    fn test_even_length_median_averages_middle_pair() {
        let summary = summarize(&[10, 1, 4, 7]);
        assert!((summary.median - 5.5).abs() < f64::EPSILON);
        assert!((summary.mean - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_value() {
        let summary = summarize(&[-7]);
        assert_eq!((summary.min, summary.max), (-7, -7));
        assert!((summary.mean + 7.0).abs() < f64::EPSILON);
        assert!((summary.median + 7.0).abs() < f64::EPSILON);
        assert_eq!((summary.mode, summary.mode_count), (-7, 1));
    }

    #[test]
    fn test_mode_tie_picks_smallest() {
        let summary = summarize(&[9, 3, 9, 3, 5]);
        assert_eq!((summary.mode, summary.mode_count), (3, 2));

        // All values unique: every count is 1, the minimum wins.
        let summary = summarize(&(0..10).rev().collect::<Vec<_>>());
        assert_eq!((summary.mode, summary.mode_count), (0, 1));
    }

    #[test]
    fn test_mean_does_not_overflow() {
        let summary = summarize(&[i32::MAX, i32::MAX]);
        assert!((summary.mean - f64::from(i32::MAX)).abs() < 1.0);
    }

    #[test]
    fn test_empty_reports_no_data() {
        let analyzer = StatisticsAnalyzer::new(&[]);
        assert_eq!(analyzer.report(), Report::NoData);
        assert_eq!(analyzer.report().to_string(), "No data to analyze.");
    }
}
