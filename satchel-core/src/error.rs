//! Error types for satchel-core

use thiserror::Error;

/// Top-level error type for satchel
#[derive(Error, Debug)]
pub enum SatchelError {
    #[error("access error: {0}")]
    Access(#[from] AccessError),

    #[error("identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors from typed reads against a bound session
///
/// Both variants are ordinary outcomes rather than faults: the caller's
/// destination is simply never written, and the variant says why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Nothing is stored under the requested key
    #[error("no value stored under key {key:?}")]
    Missing { key: String },

    /// A value exists but its kind cannot produce the requested type
    #[error("value under key {key:?} is {found}, not {expected}")]
    Mismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors generating or parsing session identifiers
#[derive(Error, Debug)]
pub enum IdentifierError {
    /// The OS entropy source failed; no identifier was produced
    #[error("entropy source unavailable: {0}")]
    Entropy(#[from] getrandom::Error),

    /// Input does not match the grouped-hex identifier layout
    #[error("malformed session identifier: {0:?}")]
    Malformed(String),
}

/// Errors from session store backends
///
/// The in-memory backend cannot fail at the storage step; these variants
/// exist so identifier generation can surface entropy failure and so
/// alternative backends can report persistence failure through the same
/// contract.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("identifier generation failed: {0}")]
    Identifier(#[from] IdentifierError),

    #[error("backend error: {0}")]
    Backend(String),
}
