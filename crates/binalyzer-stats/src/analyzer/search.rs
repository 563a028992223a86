use rand::Rng;

use crate::{domain::DomainBound, report::Report, search::binary_search, sort::selection_sort};

/// Looks up random keys in the samples with binary search.
///
/// The samples are copied and sorted once at construction. Each analysis
/// draws [`Self::DRAWS`] independent keys uniformly from the domain and counts
/// how many are present. Keys are not deduplicated: a key drawn twice and
/// found is counted twice.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::analyzer::SearchAnalyzer;
///
/// let every_value = (0..1000).rev().collect::<Vec<i32>>();
/// let analyzer = SearchAnalyzer::new(&every_value);
/// assert_eq!(analyzer.count_found(&mut rand::rng()), 100);
/// ```
#[derive(Debug, Clone)]
pub struct SearchAnalyzer {
    values: Box<[i32]>,
    domain: DomainBound,
}

impl SearchAnalyzer {
    /// Number of random lookups per analysis.
    pub const DRAWS: usize = 100;

    /// Creates an analyzer drawing keys from the default domain `[0, 1000)`.
    #[must_use]
    pub fn new(values: &[i32]) -> Self {
        Self::with_domain(values, DomainBound::DEFAULT)
    }

    #[must_use]
    pub fn with_domain(values: &[i32], domain: DomainBound) -> Self {
        let mut values = Box::<[i32]>::from(values);
        selection_sort(&mut values[..]);
        Self { values, domain }
    }

    /// The owned samples, in ascending order.
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    #[must_use]
    pub fn domain(&self) -> DomainBound {
        self.domain
    }

    #[must_use]
    pub fn contains(&self, key: i32) -> bool {
        binary_search(self.values(), &key)
    }

    pub fn count_found<R>(&self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        (0..Self::DRAWS)
            .filter(|_| self.contains(rng.random_range(0..self.domain.get())))
            .count()
    }

    pub fn report<R>(&self, rng: &mut R) -> Report
    where
        R: Rng + ?Sized,
    {
        Report::Search {
            found: self.count_found(rng),
            draws: Self::DRAWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_sorted_at_construction() {
        let analyzer = SearchAnalyzer::new(&[5, 3, 9, 3]);
        assert_eq!(analyzer.values(), [3, 3, 5, 9]);
        assert!(analyzer.contains(9));
        assert!(!analyzer.contains(4));
    }

    #[test]
    fn test_full_domain_finds_every_draw() {
        let mut rng = Pcg32::seed_from_u64(1);
        let samples = (0..1000).chain(0..500).rev().collect::<Vec<i32>>();
        assert_eq!(SearchAnalyzer::new(&samples).count_found(&mut rng), 100);
    }

    #[test]
    fn test_empty_finds_nothing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let analyzer = SearchAnalyzer::new(&[]);
        assert_eq!(analyzer.count_found(&mut rng), 0);
        assert_eq!(
            analyzer.report(&mut rng).to_string(),
            "There were 0 random values found"
        );
    }

    #[test]
    fn test_out_of_domain_samples_never_found() {
        let mut rng = Pcg32::seed_from_u64(2);
        let analyzer = SearchAnalyzer::new(&[-5, 1000, 2000]);
        assert_eq!(analyzer.count_found(&mut rng), 0);
    }

    #[test]
    fn test_partial_coverage_within_bounds() {
        let mut rng = Pcg32::seed_from_u64(9);
        let domain = DomainBound::new(2).unwrap();
        let analyzer = SearchAnalyzer::with_domain(&[1], domain);
        let found = analyzer.count_found(&mut rng);
        assert!(found > 0 && found < SearchAnalyzer::DRAWS, "found = {found}");
    }
}
