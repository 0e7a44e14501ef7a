//! The stock ledger consistency core.
//!
//! [`StockLedger`] enforces the arithmetic and identity rules around reading
//! and writing stock records; it is the only component with business logic.
//! The store it writes through is injected at construction, so tests run
//! against an in-memory implementation and production runs against a
//! networked one with no code change.
//!
//! Every mutation is a read-modify-write: read the current document and its
//! revision, compute the replacement count, write conditioned on that
//! revision. A conflicting writer surfaces as a revision conflict, which the
//! ledger retries under its [`RetryConfig`] - so two concurrent increments
//! on the same record both land instead of one silently clobbering the
//! other.
//!
//! The arithmetic policy is deliberately asymmetric: incrementing past
//! [`MAX_STOCK_COUNT`] is rejected with an error and no write, while
//! decrementing below zero silently clamps to zero. Overselling to a
//! negative count is nonsensical and floored; blowing past the storage
//! ceiling is an operator error worth surfacing.

use crate::errors::{LedgerError, LedgerResult};
use crate::record::{StockDocument, StockRecord};
use crate::retry::{RetryConfig, RetryPolicy};
use crate::store::{DocumentStore, ExpectedRevision};
use crate::types::{GroupName, ItemDetail, Price, StockCount, StockId, MAX_STOCK_COUNT};
use tracing::{debug, instrument, warn};

/// The ledger core, generic over its storage backend.
#[derive(Clone)]
pub struct StockLedger<S> {
    store: S,
    retry_config: RetryConfig,
    retry_policy: RetryPolicy,
}

impl<S: DocumentStore> StockLedger<S> {
    /// Creates a ledger over the given store with default retry behavior.
    pub fn new(store: S) -> Self {
        Self::with_retry(store, RetryConfig::default(), RetryPolicy::default())
    }

    /// Creates a ledger with explicit retry configuration.
    pub fn with_retry(store: S, retry_config: RetryConfig, retry_policy: RetryPolicy) -> Self {
        Self {
            store,
            retry_config,
            retry_policy,
        }
    }

    /// Returns the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Creates a stock record with a count of zero and returns it.
    ///
    /// The id is derived from the (group, detail) pair, and the write is
    /// unconditional: adding a pair that already exists overwrites the
    /// existing record, resetting its count to zero and replacing its price.
    /// Derived ids are the dedup key - two adds with the same text address
    /// the same record by construction.
    #[instrument(skip(self))]
    pub async fn add_stock(
        &self,
        group: GroupName,
        detail: ItemDetail,
        price: Price,
    ) -> LedgerResult<StockRecord> {
        let id = StockId::derive(&group, &detail);
        let document = StockDocument::new(group, detail, StockCount::zero(), price);
        self.store
            .put(&id, document.clone(), ExpectedRevision::Any)
            .await?;
        debug!(%id, "stock added");
        Ok(StockRecord::from_document(id, document))
    }

    /// Deletes the record unconditionally.
    ///
    /// Removal is idempotent: deleting an id that has no record is a no-op,
    /// not an error.
    #[instrument(skip(self))]
    pub async fn remove_stock(&self, id: &StockId) -> LedgerResult<()> {
        self.store.delete(id).await?;
        debug!(%id, "stock removed");
        Ok(())
    }

    /// Fetches one record.
    ///
    /// # Errors
    /// Returns [`LedgerError::NotFound`] if no document exists under the id.
    #[instrument(skip(self))]
    pub async fn get_stock(&self, id: &StockId) -> LedgerResult<StockRecord> {
        let versioned = self
            .store
            .get(id)
            .await?
            .ok_or(LedgerError::NotFound(*id))?;
        Ok(StockRecord::from_document(*id, versioned.document))
    }

    /// Fetches all records, unordered as stored.
    ///
    /// Ordering is applied by the caller (see [`crate::sort`]), not by this
    /// operation.
    #[instrument(skip(self))]
    pub async fn list_stocks(&self) -> LedgerResult<Vec<StockRecord>> {
        let documents = self.store.get_all().await?;
        Ok(documents
            .into_iter()
            .map(|(id, versioned)| StockRecord::from_document(id, versioned.document))
            .collect())
    }

    /// Increases the count by `delta` and returns the updated record.
    ///
    /// # Errors
    /// * [`LedgerError::NotFound`] - no record exists under the id
    /// * [`LedgerError::CountOverflow`] - the new count would exceed
    ///   [`MAX_STOCK_COUNT`]; the stored count is left unmodified
    #[instrument(skip(self))]
    pub async fn increment_stock(&self, id: &StockId, delta: u64) -> LedgerResult<StockRecord> {
        self.mutate_count(id, |current| {
            current
                .checked_add(delta)
                .filter(|&new_count| new_count <= MAX_STOCK_COUNT)
                .ok_or(LedgerError::CountOverflow {
                    id: *id,
                    current,
                    delta,
                    max: MAX_STOCK_COUNT,
                })
        })
        .await
    }

    /// Decreases the count by `delta` and returns the updated record.
    ///
    /// Never fails on underflow: a delta larger than the current count
    /// clamps the result to zero.
    ///
    /// # Errors
    /// Returns [`LedgerError::NotFound`] if no record exists under the id.
    #[instrument(skip(self))]
    pub async fn decrement_stock(&self, id: &StockId, delta: u64) -> LedgerResult<StockRecord> {
        self.mutate_count(id, |current| Ok(current.saturating_sub(delta)))
            .await
    }

    /// Shared read-modify-write loop for count mutations.
    ///
    /// Reads the current document, computes the replacement count, and
    /// writes conditioned on the revision observed at read time. Retries
    /// from a fresh read when the policy says the failure is retryable and
    /// the attempt budget allows it.
    async fn mutate_count<F>(&self, id: &StockId, compute: F) -> LedgerResult<StockRecord>
    where
        F: Fn(u64) -> LedgerResult<u64>,
    {
        let mut attempt = 0;
        loop {
            let versioned = self
                .store
                .get(id)
                .await?
                .ok_or(LedgerError::NotFound(*id))?;

            let current: u64 = versioned.document.count.into();
            let new_count = compute(current)?;
            let count = StockCount::try_new(new_count)
                .expect("computed count is always within bounds");

            let mut document = versioned.document;
            document.count = count;

            match self
                .store
                .put(id, document.clone(), ExpectedRevision::Exact(versioned.revision))
                .await
            {
                Ok(_) => return Ok(StockRecord::from_document(*id, document)),
                Err(error)
                    if self.retry_policy.should_retry(&error)
                        && attempt + 1 < self.retry_config.max_attempts =>
                {
                    let delay = self.retry_config.delay_for_attempt(attempt);
                    debug!(%id, attempt, ?delay, "conditional write lost the race, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => {
                    warn!(%id, attempt, %error, "count mutation failed");
                    return Err(error.into());
                }
            }
        }
    }
}
