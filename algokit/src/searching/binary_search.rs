use std::cmp::Ordering;

use tracing::debug;

use super::SearchOutcome;

/// Halve a sorted range around the midpoint probe. O(log n).
///
/// The input must be sorted ascending; that is the caller's responsibility
/// and is not checked here.
pub fn binary_search<T: Ord>(data: &[T], target: &T) -> SearchOutcome {
    search_range(data, target, 0, data.len() as isize - 1, 0)
}

/// Binary search bounded to `[low, high]`, continuing an existing probe
/// count. Exponential search funnels into this after its doubling phase.
pub(crate) fn search_range<T: Ord>(
    data: &[T],
    target: &T,
    mut low: isize,
    mut high: isize,
    start_iterations: usize,
) -> SearchOutcome {
    let mut iterations = start_iterations;
    while low <= high {
        iterations += 1;
        // low + (high-low)/2 cannot overflow where (low+high)/2 could.
        let mid = low + (high - low) / 2;
        debug!(low, mid, high, iteration = iterations, "binary probe");
        match data[mid as usize].cmp(target) {
            Ordering::Equal => {
                return SearchOutcome {
                    index: Some(mid as usize),
                    iterations,
                }
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid - 1,
        }
    }
    SearchOutcome {
        index: None,
        iterations,
    }
}
