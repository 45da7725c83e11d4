//! Name-keyed lookup for the default algorithm sets.
//!
//! Registries are plain values built once and passed to whatever needs
//! lookup; nothing here mutates global state behind a getter.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::RegistryError;
use crate::searching::{
    binary_search, exponential_search, interpolation_search, linear_search, SearchOutcome,
};
use crate::sequence::adapter::{sort_linked, sort_linked_traced, LinkedTrace};
use crate::sequence::DoublyLinkedList;
use crate::sorting::{
    heap_sort, heap_sort_traced, insertion_sort, insertion_sort_traced, merge_sort,
    merge_sort_traced, quick_sort, quick_sort_traced, selection_sort, selection_sort_traced,
};
use crate::trace::Trace;

/// Array-form sort entry point stored in the registry.
pub type SortFn = fn(&[i64]) -> Vec<i64>;
/// Traced sort entry point stored in the registry.
pub type TracedSortFn = fn(&[i64]) -> Trace<i64>;
/// Search entry point stored in the registry.
pub type SearchFn = fn(&[i64], &i64) -> SearchOutcome;

/// Handle to one registered sort algorithm.
///
/// The linked forms route through the adapter: flatten the list, run the
/// array implementation, rebuild a list from the output.
#[derive(Debug, Clone, Copy)]
pub struct SortAlgorithm {
    plain: SortFn,
    traced: TracedSortFn,
}

impl SortAlgorithm {
    pub fn sort(&self, data: &[i64]) -> Vec<i64> {
        (self.plain)(data)
    }

    pub fn sort_traced(&self, data: &[i64]) -> Trace<i64> {
        (self.traced)(data)
    }

    pub fn sort_linked(&self, list: &DoublyLinkedList<i64>) -> DoublyLinkedList<i64> {
        sort_linked(list, self.plain)
    }

    pub fn sort_linked_traced(&self, list: &DoublyLinkedList<i64>) -> LinkedTrace<i64> {
        sort_linked_traced(list, self.traced)
    }
}

/// Registry of sort algorithms. Lookup is case-sensitive.
#[derive(Debug, Default)]
pub struct SortRegistry {
    entries: BTreeMap<String, SortAlgorithm>,
}

impl SortRegistry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry holding the five classic sorts: `selection`, `insertion`,
    /// `quick`, `merge`, `heap`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("selection", selection_sort, selection_sort_traced);
        registry.register("insertion", insertion_sort, insertion_sort_traced);
        registry.register("quick", quick_sort, quick_sort_traced);
        registry.register("merge", merge_sort, merge_sort_traced);
        registry.register("heap", heap_sort, heap_sort_traced);
        registry
    }

    pub fn register(&mut self, name: &str, plain: SortFn, traced: TracedSortFn) {
        self.entries
            .insert(name.to_string(), SortAlgorithm { plain, traced });
    }

    pub fn get(&self, name: &str) -> Result<SortAlgorithm, RegistryError> {
        debug!(name, "sort registry lookup");
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownAlgorithm(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

/// Registry of search algorithms. Lookup is case-insensitive: names are
/// stored and queried in lowercase.
#[derive(Debug, Default)]
pub struct SearchRegistry {
    entries: BTreeMap<String, SearchFn>,
}

impl SearchRegistry {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Registry holding `linear`, `binary`, `exponential`, `interpolation`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("linear", linear_search);
        registry.register("binary", binary_search);
        registry.register("exponential", exponential_search);
        registry.register("interpolation", interpolation_search);
        registry
    }

    pub fn register(&mut self, name: &str, search: SearchFn) {
        self.entries.insert(name.to_lowercase(), search);
    }

    pub fn get(&self, name: &str) -> Result<SearchFn, RegistryError> {
        debug!(name, "search registry lookup");
        self.entries
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| RegistryError::UnknownAlgorithm(name.to_string()))
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}
