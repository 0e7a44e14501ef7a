//! Document store abstraction for the `StockLedger` inventory library.
//!
//! This module defines the `DocumentStore` trait that serves as the port
//! interface for different storage backends. The trait is designed to be
//! backend-independent: the in-memory adapter implements it for tests, and a
//! networked document database implements it in production.
//!
//! The port deliberately deals in whole documents - there is no partial
//! update. A writer reads a [`VersionedDocument`], computes the replacement,
//! and writes it back conditioned on the revision it read. That conditional
//! write is the only concurrency primitive the ledger needs.

use crate::errors::StoreResult;
use crate::record::{StockDocument, VersionedDocument};
use crate::types::{Revision, StockId};
use async_trait::async_trait;
use std::collections::HashMap;

/// Expected revision for optimistic concurrency control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedRevision {
    /// The document must not exist
    Absent,
    /// The document must exist at exactly this revision
    Exact(Revision),
    /// Any state is acceptable (unconditional overwrite)
    Any,
}

/// The core document store trait that all backends must satisfy.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads a single document.
    ///
    /// # Returns
    /// The document and the revision it was read at, or `None` if no
    /// document exists under this id. An absent document is not a store
    /// error; the ledger decides whether absence is a failure.
    ///
    /// # Errors
    /// Returns a transport-level `StoreError` if the read cannot be
    /// performed.
    async fn get(&self, id: &StockId) -> StoreResult<Option<VersionedDocument>>;

    /// Reads every document in the collection.
    ///
    /// No ordering is guaranteed and no pagination is offered - callers sort
    /// the result themselves.
    ///
    /// # Errors
    /// Returns a transport-level `StoreError` if the scan cannot be
    /// performed.
    async fn get_all(&self) -> StoreResult<HashMap<StockId, VersionedDocument>>;

    /// Writes a whole document, conditioned on its expected revision.
    ///
    /// # Arguments
    /// * `id` - The key to write under
    /// * `document` - The full replacement document
    /// * `expected` - The revision precondition for the write
    ///
    /// # Returns
    /// The revision the document holds after the write.
    ///
    /// # Errors
    /// * `StoreError::RevisionConflict` - The precondition did not hold
    /// * Other `StoreError` variants for transport failures
    async fn put(
        &self,
        id: &StockId,
        document: StockDocument,
        expected: ExpectedRevision,
    ) -> StoreResult<Revision>;

    /// Deletes a document.
    ///
    /// Deleting an absent key is a no-op, not an error: removal is
    /// idempotent by contract.
    ///
    /// # Errors
    /// Returns a transport-level `StoreError` if the delete cannot be
    /// performed.
    async fn delete(&self, id: &StockId) -> StoreResult<()>;
}
