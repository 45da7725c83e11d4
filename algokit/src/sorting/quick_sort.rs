use crate::sequence::Sequence;
use crate::trace::{run_traced, Silent, StepRecorder, Trace};

/// Quicksort with the Lomuto scheme: the last element of each range is the
/// pivot. Not stable. The fixed pivot choice degrades to O(n²) on
/// sorted-descending input.
pub fn quick_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut work = data.to_vec();
    quick_sort_with(&mut work, &mut Silent);
    work
}

/// Traced form: one frame per partition that rearranged its range.
pub fn quick_sort_traced<T: Ord + Clone>(data: &[T]) -> Trace<T> {
    run_traced(data, |work, recorder| quick_sort_with(work, recorder))
}

pub fn quick_sort_with<S, R>(seq: &mut S, recorder: &mut R)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    R: StepRecorder<S::Item>,
{
    let n = seq.len();
    if n > 1 {
        quick_range(seq, recorder, 0, n - 1);
    }
}

fn quick_range<S, R>(seq: &mut S, recorder: &mut R, low: usize, high: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    R: StepRecorder<S::Item>,
{
    if low >= high {
        return;
    }
    let (pivot_idx, changed) = partition(seq, low, high);
    if changed {
        recorder.record(seq);
    }
    if pivot_idx > low {
        quick_range(seq, recorder, low, pivot_idx - 1);
    }
    quick_range(seq, recorder, pivot_idx + 1, high);
}

/// Single left-to-right scan swapping elements `<=` pivot into a growing
/// prefix, then the pivot into its final index. Returns that index and
/// whether any element actually moved.
fn partition<S>(seq: &mut S, low: usize, high: usize) -> (usize, bool)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    let pivot = seq.get(high).clone();
    let mut store = low;
    let mut changed = false;
    for j in low..high {
        if *seq.get(j) <= pivot {
            if store != j {
                seq.swap(store, j);
                changed = true;
            }
            store += 1;
        }
    }
    if store != high {
        seq.swap(store, high);
        changed = true;
    }
    (store, changed)
}
