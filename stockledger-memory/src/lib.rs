//! In-memory adapter for the `StockLedger` inventory library
//!
//! This crate provides an in-memory implementation of the `DocumentStore`
//! trait from the stockledger crate, useful for testing and development
//! scenarios where persistence is not required.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use stockledger::errors::{StoreError, StoreResult};
use stockledger::record::{StockDocument, VersionedDocument};
use stockledger::store::{DocumentStore, ExpectedRevision};
use stockledger::types::{Revision, StockId};

/// Thread-safe in-memory document store for testing
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    // Maps document ids to their current revision and contents
    documents: Arc<RwLock<HashMap<StockId, VersionedDocument>>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory document store
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of documents currently stored
    pub fn len(&self) -> usize {
        self.documents.read().expect("RwLock poisoned").len()
    }

    /// Returns whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.read().expect("RwLock poisoned").is_empty()
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, id: &StockId) -> StoreResult<Option<VersionedDocument>> {
        let documents = self.documents.read().expect("RwLock poisoned");

        Ok(documents.get(id).cloned())
    }

    async fn get_all(&self) -> StoreResult<HashMap<StockId, VersionedDocument>> {
        let documents = self.documents.read().expect("RwLock poisoned");

        Ok(documents.clone())
    }

    async fn put(
        &self,
        id: &StockId,
        document: StockDocument,
        expected: ExpectedRevision,
    ) -> StoreResult<Revision> {
        let mut documents = self.documents.write().expect("RwLock poisoned");

        let current = documents
            .get(id)
            .map_or_else(Revision::initial, |versioned| versioned.revision);

        match expected {
            ExpectedRevision::Absent => {
                if documents.contains_key(id) {
                    return Err(StoreError::RevisionConflict {
                        id: *id,
                        expected: Revision::initial(),
                        current,
                    });
                }
            }
            ExpectedRevision::Exact(expected_revision) => {
                if !documents.contains_key(id) || current != expected_revision {
                    return Err(StoreError::RevisionConflict {
                        id: *id,
                        expected: expected_revision,
                        current,
                    });
                }
            }
            ExpectedRevision::Any => {
                // No check needed
            }
        }

        let next = current.next();
        documents.insert(*id, VersionedDocument::new(next, document));
        Ok(next)
    }

    async fn delete(&self, id: &StockId) -> StoreResult<()> {
        let mut documents = self.documents.write().expect("RwLock poisoned");

        documents.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger::types::{GroupName, ItemDetail, Price, StockCount};

    fn sample_id() -> StockId {
        StockId::derive(
            &GroupName::try_new("drink").unwrap(),
            &ItemDetail::try_new("cola").unwrap(),
        )
    }

    fn sample_document(count: u64) -> StockDocument {
        StockDocument::new(
            GroupName::try_new("drink").unwrap(),
            ItemDetail::try_new("cola").unwrap(),
            StockCount::try_new(count).unwrap(),
            Price::new(150),
        )
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InMemoryDocumentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_clone_shares_storage() {
        let store1 = InMemoryDocumentStore::new();
        #[allow(clippy::redundant_clone)]
        let store2 = store1.clone();

        // Verify both stores point to the same storage
        assert!(Arc::ptr_eq(&store1.documents, &store2.documents));

        store1
            .put(&sample_id(), sample_document(0), ExpectedRevision::Any)
            .await
            .unwrap();
        assert_eq!(store2.len(), 1);
    }

    #[tokio::test]
    async fn test_get_returns_none_for_absent_documents() {
        let store = InMemoryDocumentStore::new();
        assert_eq!(store.get(&sample_id()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_any_upserts_and_bumps_the_revision() {
        let store = InMemoryDocumentStore::new();
        let id = sample_id();

        let first = store
            .put(&id, sample_document(0), ExpectedRevision::Any)
            .await
            .unwrap();
        assert_eq!(first, Revision::initial().next());

        let second = store
            .put(&id, sample_document(5), ExpectedRevision::Any)
            .await
            .unwrap();
        assert_eq!(second, first.next());

        let versioned = store.get(&id).await.unwrap().unwrap();
        assert_eq!(versioned.revision, second);
        assert_eq!(versioned.document, sample_document(5));
    }

    #[tokio::test]
    async fn test_put_absent_rejects_existing_documents() {
        let store = InMemoryDocumentStore::new();
        let id = sample_id();

        store
            .put(&id, sample_document(0), ExpectedRevision::Absent)
            .await
            .unwrap();

        let result = store
            .put(&id, sample_document(0), ExpectedRevision::Absent)
            .await;
        assert!(matches!(
            result,
            Err(StoreError::RevisionConflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_put_exact_enforces_the_read_revision() {
        let store = InMemoryDocumentStore::new();
        let id = sample_id();

        let revision = store
            .put(&id, sample_document(0), ExpectedRevision::Any)
            .await
            .unwrap();

        // A write at the observed revision succeeds
        let next = store
            .put(&id, sample_document(1), ExpectedRevision::Exact(revision))
            .await
            .unwrap();
        assert_eq!(next, revision.next());

        // A write at the stale revision is rejected
        let result = store
            .put(&id, sample_document(2), ExpectedRevision::Exact(revision))
            .await;
        match result {
            Err(StoreError::RevisionConflict {
                expected, current, ..
            }) => {
                assert_eq!(expected, revision);
                assert_eq!(current, next);
            }
            other => panic!("expected a revision conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_put_exact_rejects_absent_documents() {
        let store = InMemoryDocumentStore::new();
        let result = store
            .put(
                &sample_id(),
                sample_document(0),
                ExpectedRevision::Exact(Revision::initial().next()),
            )
            .await;
        assert!(matches!(
            result,
            Err(StoreError::RevisionConflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = InMemoryDocumentStore::new();
        let id = sample_id();

        store
            .put(&id, sample_document(0), ExpectedRevision::Any)
            .await
            .unwrap();

        store.delete(&id).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap(), None);

        // Deleting again is a no-op, not an error
        store.delete(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_all_returns_every_document() {
        let store = InMemoryDocumentStore::new();
        let cola = sample_id();
        let cider = StockId::derive(
            &GroupName::try_new("drink").unwrap(),
            &ItemDetail::try_new("cider").unwrap(),
        );

        store
            .put(&cola, sample_document(3), ExpectedRevision::Any)
            .await
            .unwrap();
        store
            .put(&cider, sample_document(7), ExpectedRevision::Any)
            .await
            .unwrap();

        let all = store.get_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.contains_key(&cola));
        assert!(all.contains_key(&cider));
    }
}
