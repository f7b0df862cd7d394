//! Error types shared by the account store and the add flow.

use thiserror::Error;

/// Failures surfaced by [`AccountStore`](crate::storage::AccountStore).
///
/// A malformed accounts file is not an error: the store reads it as empty.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid account number {index} (valid range is 1..={len})")]
    OutOfRange { index: usize, len: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// An augmentation choice that does not name a known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognized selector '{0}'")]
pub struct InvalidSelector(pub String);

pub type Result<T> = std::result::Result<T, StoreError>;
