//! # algokit
//!
//! Classic search and sort algorithms with iteration counters, step-by-step
//! traces, and a doubly-linked list the same algorithms run over.
//!
//! ## Modules
//!
//! - `sequence` – The `Sequence` capability trait, the doubly-linked list,
//!   and the adapter that runs array sorts over lists
//! - `searching` – Lookup algorithms (linear, binary, exponential,
//!   interpolation), each reporting its probe count
//! - `sorting` – Ordering algorithms (selection, insertion, quick, merge,
//!   heap), each in plain, traced, and generic in-place form
//! - `trace` – Step recording: deep-copied snapshots captured after each
//!   effective mutation
//! - `registry` – Name-based lookup for the default algorithm sets
//! - `error` – Error taxonomy for sequence and registry operations
//!
//! ## Usage Example
//!
//! ```rust
//! use algokit::sorting::merge_sort::merge_sort;
//!
//! let sorted = merge_sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod registry;
pub mod searching;
pub mod sequence;
pub mod sorting;
pub mod trace;

pub use error::{RegistryError, SequenceError};
pub use registry::{SearchRegistry, SortAlgorithm, SortRegistry};
pub use searching::SearchOutcome;
pub use sequence::{DoublyLinkedList, Sequence};
pub use trace::{run_traced, Capture, Silent, StepRecorder, Trace, TraceStep};
