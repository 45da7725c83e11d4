use std::cmp::Ordering;

use tracing::debug;

use super::SearchOutcome;

/// Probe where a uniformly distributed value ought to sit:
/// `pos = low + (high-low) * (target-data[low]) / (data[high]-data[low])`.
/// When `high == low` or the denominator is zero the probe falls back to
/// the arithmetic midpoint; that fallback is a recovery, not an error.
/// O(log log n) on uniform sorted data, O(n) worst case.
pub fn interpolation_search<T>(data: &[T], target: &T) -> SearchOutcome
where
    T: Ord + Copy + Into<i64>,
{
    let mut low = 0isize;
    let mut high = data.len() as isize - 1;
    let mut iterations = 0;
    let goal: i64 = (*target).into();

    while low <= high && *target >= data[low as usize] && *target <= data[high as usize] {
        iterations += 1;
        let lo_val: i64 = data[low as usize].into();
        let hi_val: i64 = data[high as usize].into();
        let pos = if high == low || hi_val == lo_val {
            low + (high - low) / 2
        } else {
            // 128-bit intermediates keep the product from overflowing.
            let span = (high - low) as i128;
            let offset = span * (goal - lo_val) as i128 / (hi_val - lo_val) as i128;
            low + offset as isize
        };
        debug!(low, pos, high, iteration = iterations, "interpolation probe");
        match data[pos as usize].cmp(target) {
            Ordering::Equal => {
                return SearchOutcome {
                    index: Some(pos as usize),
                    iterations,
                }
            }
            Ordering::Less => low = pos + 1,
            Ordering::Greater => high = pos - 1,
        }
    }
    SearchOutcome {
        index: None,
        iterations,
    }
}
