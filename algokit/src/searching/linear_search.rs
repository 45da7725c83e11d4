use tracing::debug;

use super::SearchOutcome;

/// Scan every element in order until the target turns up; the input need
/// not be sorted. O(n).
pub fn linear_search<T: PartialEq>(data: &[T], target: &T) -> SearchOutcome {
    let mut iterations = 0;
    for (i, value) in data.iter().enumerate() {
        iterations += 1;
        debug!(index = i, iteration = iterations, "linear probe");
        if value == target {
            return SearchOutcome {
                index: Some(i),
                iterations,
            };
        }
    }
    SearchOutcome {
        index: None,
        iterations,
    }
}
