use tracing::debug;

use super::binary_search::search_range;
use super::SearchOutcome;

/// Double a probe index until it passes the target, then binary-search the
/// bracketed range `[i/2, min(i, n-1)]`. The probe count carries across
/// both phases. O(log n) on sorted input.
pub fn exponential_search<T: Ord>(data: &[T], target: &T) -> SearchOutcome {
    let n = data.len();
    if n == 0 {
        return SearchOutcome {
            index: None,
            iterations: 0,
        };
    }
    if data[0] == *target {
        return SearchOutcome {
            index: Some(0),
            iterations: 1,
        };
    }
    let mut iterations = 0;
    let mut i = 1;
    while i < n && data[i] <= *target {
        iterations += 1;
        debug!(probe = i, iteration = iterations, "exponential probe");
        i *= 2;
    }
    let low = (i / 2) as isize;
    let high = i.min(n - 1) as isize;
    debug!(low, high, "switching to bounded binary search");
    search_range(data, target, low, high, iterations)
}
