use thiserror::Error;

/// Errors raised by checked sequence operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },
    #[error("pop from empty sequence")]
    EmptyCollection,
    #[error("value not found in sequence")]
    ValueNotFound,
}

/// Errors raised by registry lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
}
