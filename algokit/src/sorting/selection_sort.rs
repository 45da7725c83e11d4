use crate::sequence::Sequence;
use crate::trace::{run_traced, Silent, StepRecorder, Trace};

/// Selection sort: repeatedly swap the minimum of the unsorted suffix into
/// place. O(n²) comparisons, at most n−1 swaps, not stable.
pub fn selection_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut work = data.to_vec();
    selection_sort_with(&mut work, &mut Silent);
    work
}

/// Traced form: one frame per effective swap, plus the initial state.
pub fn selection_sort_traced<T: Ord + Clone>(data: &[T]) -> Trace<T> {
    run_traced(data, |work, recorder| selection_sort_with(work, recorder))
}

/// Algorithm body, generic over the sequence form and the recorder.
pub fn selection_sort_with<S, R>(seq: &mut S, recorder: &mut R)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    R: StepRecorder<S::Item>,
{
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if seq.get(j) < seq.get(min_idx) {
                min_idx = j;
            }
        }
        // A swap of an element with itself is not an observable step.
        if min_idx != i {
            seq.swap(i, min_idx);
            recorder.record(seq);
        }
    }
}
