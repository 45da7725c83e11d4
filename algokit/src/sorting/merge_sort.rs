use crate::sequence::Sequence;
use crate::trace::{run_traced, Silent, StepRecorder, Trace};

/// Top-down merge sort with auxiliary buffers per merge. The `<=`
/// comparison favors the left run, which keeps equal elements in input
/// order: this is what makes the sort stable.
pub fn merge_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut work = data.to_vec();
    merge_sort_with(&mut work, &mut Silent);
    work
}

/// Traced form: recursion runs silently, one frame after the top-level
/// merge completes (plus the initial state).
pub fn merge_sort_traced<T: Ord + Clone>(data: &[T]) -> Trace<T> {
    run_traced(data, |work, recorder| merge_sort_with(work, recorder))
}

pub fn merge_sort_with<S, R>(seq: &mut S, recorder: &mut R)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    R: StepRecorder<S::Item>,
{
    let n = seq.len();
    if n > 1 {
        merge_range(seq, 0, n);
        recorder.record(seq);
    }
}

/// Sort `seq[lo..hi)` by splitting at the midpoint and merging the halves.
fn merge_range<S>(seq: &mut S, lo: usize, hi: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    if hi - lo <= 1 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_range(seq, lo, mid);
    merge_range(seq, mid, hi);
    merge(seq, lo, mid, hi);
}

/// Stable three-pointer merge of the sorted runs `[lo, mid)` and `[mid, hi)`.
fn merge<S>(seq: &mut S, lo: usize, mid: usize, hi: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
{
    let left: Vec<S::Item> = (lo..mid).map(|i| seq.get(i).clone()).collect();
    let right: Vec<S::Item> = (mid..hi).map(|i| seq.get(i).clone()).collect();

    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            seq.set(k, left[i].clone());
            i += 1;
        } else {
            seq.set(k, right[j].clone());
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        seq.set(k, left[i].clone());
        i += 1;
        k += 1;
    }
    while j < right.len() {
        seq.set(k, right[j].clone());
        j += 1;
        k += 1;
    }
}
