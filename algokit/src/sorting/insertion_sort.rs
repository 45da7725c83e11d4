use crate::sequence::Sequence;
use crate::trace::{run_traced, Silent, StepRecorder, Trace};

/// Insertion sort: grow a sorted prefix by shifting larger elements right
/// until each element's slot opens up. Stable; O(n²) worst case, O(n) on
/// already-sorted input.
pub fn insertion_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut work = data.to_vec();
    insertion_sort_with(&mut work, &mut Silent);
    work
}

/// Traced form: one frame per pass that actually shifted elements.
pub fn insertion_sort_traced<T: Ord + Clone>(data: &[T]) -> Trace<T> {
    run_traced(data, |work, recorder| insertion_sort_with(work, recorder))
}

pub fn insertion_sort_with<S, R>(seq: &mut S, recorder: &mut R)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    R: StepRecorder<S::Item>,
{
    for i in 1..seq.len() {
        let key = seq.get(i).clone();
        let mut j = i;
        while j > 0 && *seq.get(j - 1) > key {
            let shifted = seq.get(j - 1).clone();
            seq.set(j, shifted);
            j -= 1;
        }
        if j != i {
            seq.set(j, key);
            recorder.record(seq);
        }
    }
}
