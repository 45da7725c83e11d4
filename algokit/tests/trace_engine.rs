//! Integration tests for step capture: frame boundaries, round-trips, and
//! the no-duplicate-frame guarantee.

use algokit::sorting::{
    heap_sort, heap_sort_traced, insertion_sort, insertion_sort_traced, merge_sort,
    merge_sort_traced, quick_sort, quick_sort_traced, selection_sort, selection_sort_traced,
};
use algokit::trace::{run_traced, StepRecorder, Trace};
use algokit::Sequence;

type Plain = fn(&[i64]) -> Vec<i64>;
type Traced = fn(&[i64]) -> Trace<i64>;

const PAIRS: [(&str, Plain, Traced); 5] = [
    ("selection", selection_sort, selection_sort_traced),
    ("insertion", insertion_sort, insertion_sort_traced),
    ("quick", quick_sort, quick_sort_traced),
    ("merge", merge_sort, merge_sort_traced),
    ("heap", heap_sort, heap_sort_traced),
];

#[test]
fn test_trace_first_frame_is_input() {
    let input = vec![4, 2, 5, 1, 3];
    for (name, _, traced) in PAIRS {
        let mut trace = traced(&input);
        let first = trace.next().expect("trace has an initial frame");
        assert_eq!(first.values(), &input[..], "{name}");
    }
}

#[test]
fn test_trace_last_frame_matches_silent_result() {
    let inputs: [&[i64]; 6] = [
        &[],
        &[1],
        &[2, 1],
        &[5, 2, 9, 1, 5, 6],
        &[9, 8, 7, 6, 5],
        &[3, 3, 1, 3],
    ];
    for (name, plain, traced) in PAIRS {
        for input in inputs {
            let expected = plain(input);
            let last = traced(input).into_final().expect("non-empty trace");
            assert_eq!(last, expected, "{name} on {input:?}");
        }
    }
}

#[test]
fn test_trace_nontrivial_for_unsorted_input() {
    let input = vec![3, 1, 2];
    for (name, _, traced) in PAIRS {
        let frames: Vec<_> = traced(&input).collect();
        assert!(
            frames.len() >= 2,
            "{name} produced only {} frame(s)",
            frames.len()
        );
    }
}

#[test]
fn test_trace_has_no_duplicate_consecutive_frames() {
    let inputs: [&[i64]; 4] = [&[1, 2, 3, 4], &[4, 3, 2, 1], &[2, 2, 2], &[5, 1, 4, 2, 8]];
    for (name, _, traced) in PAIRS {
        for input in inputs {
            let frames: Vec<Vec<i64>> = traced(input).map(|s| s.into_values()).collect();
            for pair in frames.windows(2) {
                assert_ne!(
                    pair[0], pair[1],
                    "{name} on {input:?} emitted a duplicate frame"
                );
            }
        }
    }
}

#[test]
fn test_empty_and_singleton_traces_are_single_frame() {
    for (name, _, traced) in PAIRS {
        for input in [&[][..], &[7][..]] {
            let frames: Vec<_> = traced(input).collect();
            assert_eq!(frames.len(), 1, "{name} on {input:?}");
        }
    }
}

#[test]
fn test_sorted_input_traces_collapse_to_initial_frame() {
    // Heap sort is excluded: building the heap legitimately rearranges even
    // sorted input.
    let input = vec![1, 2, 3, 4, 5];
    for (name, _, traced) in &PAIRS[..4] {
        let frames: Vec<_> = traced(&input).collect();
        assert_eq!(frames.len(), 1, "{name}");
    }
}

#[test]
fn test_selection_skips_noop_swaps() {
    let frames: Vec<Vec<i64>> = selection_sort_traced(&[2, 1, 3])
        .map(|s| s.into_values())
        .collect();
    assert_eq!(frames, vec![vec![2, 1, 3], vec![1, 2, 3]]);
}

#[test]
fn test_merge_trace_snapshots_top_level_only() {
    let frames: Vec<Vec<i64>> = merge_sort_traced(&[4, 3, 2, 1])
        .map(|s| s.into_values())
        .collect();
    assert_eq!(frames, vec![vec![4, 3, 2, 1], vec![1, 2, 3, 4]]);
}

#[test]
fn test_run_traced_with_custom_body() {
    let trace = run_traced(&[3, 1], |work, recorder| {
        Sequence::swap(work, 0, 1);
        recorder.record(work);
    });
    let frames: Vec<Vec<i64>> = trace.map(|s| s.into_values()).collect();
    assert_eq!(frames, vec![vec![3, 1], vec![1, 3]]);
}
