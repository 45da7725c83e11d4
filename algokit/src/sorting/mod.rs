//! Ordering algorithms over the [`Sequence`](crate::sequence::Sequence)
//! abstraction.
//!
//! Each algorithm is written once as a `*_sort_with` body taking a sequence
//! and a [`StepRecorder`](crate::trace::StepRecorder); the `*_sort` and
//! `*_sort_traced` forms run that body over a private copy of a slice, so
//! the caller's input is never touched.

pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod selection_sort;

pub use heap_sort::{heap_sort, heap_sort_traced, heap_sort_with};
pub use insertion_sort::{insertion_sort, insertion_sort_traced, insertion_sort_with};
pub use merge_sort::{merge_sort, merge_sort_traced, merge_sort_with};
pub use quick_sort::{quick_sort, quick_sort_traced, quick_sort_with};
pub use selection_sort::{selection_sort, selection_sort_traced, selection_sort_with};
