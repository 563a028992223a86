use binalyzer_stats::domain::DomainBound;
use rand::Rng;

/// Draws `len` samples uniformly from `[0, domain)`.
///
/// Use a seeded generator (for example `rand_pcg::Pcg32::seed_from_u64`)
/// for reproducible blocks.
pub fn generate<R>(rng: &mut R, len: usize, domain: DomainBound) -> Vec<i32>
where
    R: Rng + ?Sized,
{
    (0..len)
        .map(|_| rng.random_range(0..domain.get()))
        .collect()
}
