use crate::sequence::Sequence;
use crate::trace::{run_traced, Silent, StepRecorder, Trace};

/// Heap sort: build a binary max-heap in place, then repeatedly swap the
/// root behind the shrinking heap boundary. Not stable; O(n log n).
pub fn heap_sort<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut work = data.to_vec();
    heap_sort_with(&mut work, &mut Silent);
    work
}

/// Traced form: one frame after the heap is built, then one per extraction.
pub fn heap_sort_traced<T: Ord + Clone>(data: &[T]) -> Trace<T> {
    run_traced(data, |work, recorder| heap_sort_with(work, recorder))
}

pub fn heap_sort_with<S, R>(seq: &mut S, recorder: &mut R)
where
    S: Sequence + ?Sized,
    S::Item: Ord + Clone,
    R: StepRecorder<S::Item>,
{
    let n = seq.len();
    if n <= 1 {
        return;
    }
    for i in (0..n / 2).rev() {
        sift_down(seq, n, i);
    }
    recorder.record(seq);
    for end in (1..n).rev() {
        seq.swap(0, end);
        sift_down(seq, end, 0);
        recorder.record(seq);
    }
}

/// Restore the max-heap property for the subtree rooted at `root`, among
/// the first `size` elements.
fn sift_down<S>(seq: &mut S, size: usize, root: usize)
where
    S: Sequence + ?Sized,
    S::Item: Ord,
{
    let mut root = root;
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        if left < size && seq.get(left) > seq.get(largest) {
            largest = left;
        }
        if right < size && seq.get(right) > seq.get(largest) {
            largest = right;
        }
        if largest == root {
            return;
        }
        seq.swap(root, largest);
        root = largest;
    }
}
