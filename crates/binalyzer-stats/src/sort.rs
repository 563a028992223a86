/// Sorts `values` in place into ascending order using selection sort.
///
/// For each position `i`, the minimum of the unsorted suffix `values[i..]` is
/// located and swapped into `i`. The sort performs O(n²) comparisons and is
/// not stable: equal elements may be reordered relative to each other.
///
/// Slices with fewer than two elements are left untouched.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::sort::selection_sort;
///
/// let mut values = [3, -1, 2, 2, 0];
/// selection_sort(&mut values);
/// assert_eq!(values, [-1, 0, 2, 2, 3]);
/// ```
pub fn selection_sort<T>(values: &mut [T])
where
    T: Ord,
{
    let len = values.len();
    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;
        for j in (i + 1)..len {
            if values[j] < values[min_index] {
                min_index = j;
            }
        }
        values.swap(i, min_index);
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _};
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_empty_and_single_are_noops() {
        let mut empty: [i32; 0] = [];
        selection_sort(&mut empty);
        assert!(empty.is_empty());

        let mut single = [42];
        selection_sort(&mut single);
        assert_eq!(single, [42]);
    }

    #[test]
    fn test_sorts_with_duplicates_and_negatives() {
        let mut values = [9, -3, 5, 5, 0, -3, 1000, 2];
        selection_sort(&mut values);
        assert_eq!(values, [-3, -3, 0, 2, 5, 5, 9, 1000]);
    }

    #[test]
    fn test_reverse_sorted_input() {
        let mut values = (0..50).rev().collect::<Vec<i32>>();
        selection_sort(&mut values);
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_matches_std_sort_on_random_input() {
        let mut rng = Pcg32::seed_from_u64(7);
        for len in [2, 3, 17, 256] {
            let mut values = (0..len)
                .map(|_| rng.random_range(-500..500))
                .collect::<Vec<i32>>();
            let mut expected = values.clone();
            expected.sort_unstable();

            selection_sort(&mut values);
            assert_eq!(values, expected, "len = {len}");
        }
    }

    #[test]
    fn test_idempotent() {
        let mut values = [4, 1, 3, 1, 2];
        selection_sort(&mut values);
        let once = values;
        selection_sort(&mut values);
        assert_eq!(values, once);
    }
}
