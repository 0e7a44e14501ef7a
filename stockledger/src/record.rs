//! Stock record model and the persisted document shape.
//!
//! A [`StockRecord`] is the fully materialized unit the ledger hands to
//! callers. What actually sits in the store is a [`StockDocument`]: the id is
//! the document key, never a field inside the stored value. Reads come back
//! as a [`VersionedDocument`] so that writers can issue conditional writes
//! against the revision they observed.

use crate::types::{GroupName, ItemDetail, Price, Revision, StockCount, StockId};
use serde::{Deserialize, Serialize};

/// One inventory item: the persisted fields plus the id they live under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    /// The derived identifier addressing this record in the store.
    pub id: StockId,
    /// Free-form category label.
    pub group: GroupName,
    /// Free-form item name.
    pub detail: ItemDetail,
    /// Items currently in stock.
    pub count: StockCount,
    /// Unit price; zero means not for sale.
    pub price: Price,
}

impl StockRecord {
    /// Reassembles a record from its store key and document.
    pub fn from_document(id: StockId, document: StockDocument) -> Self {
        Self {
            id,
            group: document.group,
            detail: document.detail,
            count: document.count,
            price: document.price,
        }
    }

    /// Splits the record back into its persisted shape, dropping the key.
    pub fn into_document(self) -> StockDocument {
        StockDocument {
            group: self.group,
            detail: self.detail,
            count: self.count,
            price: self.price,
        }
    }

    /// Revenue attributed to this record: `count * price`.
    ///
    /// Computed in `i128`: the count ceiling times a large price does not fit
    /// in 64 bits.
    pub fn revenue(&self) -> i128 {
        let count: u64 = self.count.into();
        let price: i64 = self.price.into();
        i128::from(count) * i128::from(price)
    }
}

/// The on-the-wire shape of a stock record, keyed externally by [`StockId`].
///
/// Every field is a validated type, so deserializing a document from the
/// store rejects out-of-range counts and empty labels instead of propagating
/// them into the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockDocument {
    /// Free-form category label.
    pub group: GroupName,
    /// Free-form item name.
    pub detail: ItemDetail,
    /// Items currently in stock.
    pub count: StockCount,
    /// Unit price; zero means not for sale.
    pub price: Price,
}

impl StockDocument {
    /// Creates a new document.
    pub const fn new(group: GroupName, detail: ItemDetail, count: StockCount, price: Price) -> Self {
        Self {
            group,
            detail,
            count,
            price,
        }
    }
}

/// A document paired with the revision it was read at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedDocument {
    /// The store revision this document was observed at.
    pub revision: Revision,
    /// The document itself.
    pub document: StockDocument,
}

impl VersionedDocument {
    /// Creates a new versioned document.
    pub const fn new(revision: Revision, document: StockDocument) -> Self {
        Self { revision, document }
    }
}
