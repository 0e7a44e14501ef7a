//! Error types for `StockLedger`.
//!
//! Two layers, mirroring the component split:
//!
//! - **`LedgerError`**: domain failures raised by the ledger core
//! - **`StoreError`**: persistence failures raised by a [`DocumentStore`]
//!
//! The core performs no logging or user messaging itself; it returns typed
//! failures and leaves presentation to the dispatcher. Note the asymmetry
//! baked into the taxonomy: incrementing past the ceiling is an error,
//! decrementing past zero is not (it clamps and never surfaces here).
//!
//! [`DocumentStore`]: crate::store::DocumentStore

use crate::types::{Revision, StockId};
use thiserror::Error;

/// Errors raised by ledger operations.
#[derive(Debug, Clone, Error)]
pub enum LedgerError {
    /// The requested id has no record behind it. Surfaced, not retried.
    #[error("stock '{0}' not found")]
    NotFound(StockId),

    /// An increment would push the count past the maximum. The write is
    /// rejected and the stored count is left unchanged.
    #[error("count overflow on stock '{id}': {current} + {delta} exceeds maximum {max}")]
    CountOverflow {
        /// The record whose increment was rejected.
        id: StockId,
        /// The stored count at the time of the attempt.
        current: u64,
        /// The increment that was requested.
        delta: u64,
        /// The ceiling that would have been exceeded.
        max: u64,
    },

    /// A caller-supplied field failed validation at the command boundary.
    #[error("invalid field: {0}")]
    InvalidField(String),

    /// The underlying store failed; propagated untouched for the dispatcher
    /// to report.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised by document store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A conditional write found a different revision than expected.
    /// Another writer got there first; re-read and retry.
    #[error("revision conflict on document '{id}': expected {expected}, but current is {current}")]
    RevisionConflict {
        /// The document with the conflicting revision.
        id: StockId,
        /// The revision the writer expected.
        expected: Revision,
        /// The revision actually found.
        current: Revision,
    },

    /// The connection to the store failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Serialization of a document failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization of a document failed.
    #[error("deserialization failed: {0}")]
    DeserializationFailed(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A timeout occurred while waiting for the operation.
    #[error("operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The store is temporarily unavailable.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl Clone for StoreError {
    fn clone(&self) -> Self {
        match self {
            Self::RevisionConflict {
                id,
                expected,
                current,
            } => Self::RevisionConflict {
                id: *id,
                expected: *expected,
                current: *current,
            },
            Self::ConnectionFailed(msg) => Self::ConnectionFailed(msg.clone()),
            Self::SerializationFailed(msg) => Self::SerializationFailed(msg.clone()),
            Self::DeserializationFailed(msg) => Self::DeserializationFailed(msg.clone()),
            Self::Io(err) => Self::Io(std::io::Error::new(err.kind(), err.to_string())),
            Self::Timeout(duration) => Self::Timeout(*duration),
            Self::Unavailable(msg) => Self::Unavailable(msg.clone()),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GroupName, ItemDetail};

    fn sample_id() -> StockId {
        StockId::derive(
            &GroupName::try_new("drink").unwrap(),
            &ItemDetail::try_new("cola").unwrap(),
        )
    }

    #[test]
    fn not_found_names_the_id() {
        let id = sample_id();
        let error = LedgerError::NotFound(id);
        assert!(error.to_string().contains(&id.to_string()));
    }

    #[test]
    fn count_overflow_carries_the_arithmetic_context() {
        let error = LedgerError::CountOverflow {
            id: sample_id(),
            current: 10,
            delta: 5,
            max: 12,
        };
        let message = error.to_string();
        assert!(message.contains("10 + 5"));
        assert!(message.contains("12"));
    }

    #[test]
    fn store_errors_convert_into_ledger_errors() {
        let store_error = StoreError::ConnectionFailed("backend down".to_string());
        let ledger_error: LedgerError = store_error.into();
        assert!(matches!(ledger_error, LedgerError::Store(_)));
    }

    #[test]
    fn store_error_clone_preserves_io_kind() {
        let original = StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "socket timed out",
        ));
        let cloned = original.clone();
        match (&original, &cloned) {
            (StoreError::Io(a), StoreError::Io(b)) => assert_eq!(a.kind(), b.kind()),
            _ => panic!("clone changed the variant"),
        }
    }
}
