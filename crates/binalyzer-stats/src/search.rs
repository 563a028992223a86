/// Reports whether `key` occurs in the ascending slice `sorted_values`.
///
/// The search halves the range recursively: the element at
/// `mid = start + (end - start) / 2` is compared to `key`, and the left or
/// right half is searched next until the key is found or the range is empty.
/// Recursion depth is bounded by `log2(n) + 1`.
///
/// `sorted_values` must be sorted in ascending order (for example with
/// [`selection_sort`](crate::sort::selection_sort)). On unsorted input the
/// result is unspecified, but the call never panics.
///
/// # Examples
///
/// ```
/// use binalyzer_stats::search::binary_search;
///
/// let values = [1, 3, 3, 8, 13];
/// assert!(binary_search(&values, &8));
/// assert!(!binary_search(&values, &4));
/// assert!(!binary_search(&[], &4));
/// ```
#[must_use]
pub fn binary_search<T>(sorted_values: &[T], key: &T) -> bool
where
    T: Ord,
{
    search_range(sorted_values, key, 0, sorted_values.len())
}

// Searches the half-open range `start..end`.
fn search_range<T>(values: &[T], key: &T, start: usize, end: usize) -> bool
where
    T: Ord,
{
    if start >= end {
        return false;
    }
    let mid = start + (end - start) / 2;
    let value = &values[mid];
    if value == key {
        return true;
    }
    if value > key {
        return search_range(values, key, start, mid);
    }
    search_range(values, key, mid + 1, end)
}
