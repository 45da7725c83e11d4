//! Lookup algorithms reporting where a value sits and how many probes the
//! search spent getting there.

pub mod binary_search;
pub mod exponential_search;
pub mod interpolation_search;
pub mod linear_search;

pub use binary_search::binary_search;
pub use exponential_search::exponential_search;
pub use interpolation_search::interpolation_search;
pub use linear_search::linear_search;

use serde::{Deserialize, Serialize};

/// Index and probe count produced by one search call.
///
/// The probe count exists to demonstrate growth rates; correctness never
/// depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub index: Option<usize>,
    pub iterations: usize,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.index.is_some()
    }
}
