//! Core types for the `StockLedger` inventory library.
//!
//! This module defines the fundamental types used throughout the library.
//! All types use smart constructors to ensure validity at construction time,
//! following the "parse, don't validate" principle.

use nutype::nutype;
use thiserror::Error;
use uuid::Uuid;

/// The largest count a stock record may hold.
///
/// Increments that would push a count past this ceiling are rejected;
/// the count is left untouched.
pub const MAX_STOCK_COUNT: u64 = 9_000_000_000_000_000;

/// A free-form category label for a stock record ("food", "drink", ...).
///
/// `GroupName` values are guaranteed to be non-empty and at most 255
/// characters. Once constructed, a `GroupName` is always valid - no further
/// validation needed.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct GroupName(String);

/// A free-form item name for a stock record ("cola", "curry bread", ...).
///
/// Same guarantees as [`GroupName`]: non-empty, trimmed, at most 255
/// characters.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 255),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct ItemDetail(String);

/// The identifier of a stock record, derived deterministically from its
/// group and detail.
///
/// `StockId` values are guaranteed to be name-based (version 5) UUIDs, which
/// provides:
/// - The same (group, detail) pair always maps to the same id
/// - Deduplication by construction: re-adding an existing pair addresses the
///   existing record
/// - A stable string form that survives a round trip through rendered
///   display cards
#[nutype(
    validate(predicate = |id: &Uuid| id.get_version() == Some(uuid::Version::Sha1)),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct StockId(Uuid);

impl StockId {
    /// Derives the id for a (group, detail) pair.
    ///
    /// The id is a v5 UUID of the concatenation `group` + `detail` under the
    /// DNS namespace. Two records with the same group and detail text always
    /// derive the same id.
    pub fn derive(group: &GroupName, detail: &ItemDetail) -> Self {
        let name = format!("{group}{detail}");
        Self::try_new(Uuid::new_v5(&Uuid::NAMESPACE_DNS, name.as_bytes()))
            .expect("v5 derivation always yields a SHA-1 UUID")
    }

    /// Parses an id from its canonical string form.
    ///
    /// This is the read-back half of the display round trip: a card's footer
    /// carries `id.to_string()`, and control activation hands it back here.
    pub fn parse(input: &str) -> Result<Self, ParseStockIdError> {
        let raw = Uuid::parse_str(input)?;
        Self::try_new(raw).map_err(|_| ParseStockIdError::NotDerived)
    }
}

/// Error returned when parsing a [`StockId`] from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStockIdError {
    /// The input is not a well-formed UUID.
    #[error("not a valid UUID: {0}")]
    Uuid(#[from] uuid::Error),
    /// The input is a UUID but not a derived (version 5) id.
    #[error("not a derived (version 5) id")]
    NotDerived,
}

/// The number of items a stock record holds.
///
/// Counts are non-negative and bounded above by [`MAX_STOCK_COUNT`]. The
/// type system ensures an out-of-range count can never be constructed, so a
/// count read back from the store is always usable as-is.
#[nutype(
    validate(less_or_equal = MAX_STOCK_COUNT),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Into,
        Serialize,
        Deserialize
    )
)]
pub struct StockCount(u64);

impl StockCount {
    /// The count every record starts with.
    pub fn zero() -> Self {
        Self::try_new(0).expect("0 is always a valid count")
    }
}

/// The unit price of a stock record, in the smallest currency unit.
///
/// A price of zero means the item is not for sale; display formatting
/// differs but the ledger treats it like any other price.
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    Into,
    Serialize,
    Deserialize
))]
pub struct Price(i64);

impl Price {
    /// Returns whether this price marks the item as not for sale.
    pub fn is_unpriced(self) -> bool {
        self.into_inner() == 0
    }
}

/// The revision of a document within the store.
///
/// Revisions start at 0 (the "absent" revision) and increment monotonically
/// with each write. Conditional writes compare against the revision observed
/// at read time, which is what closes the read-modify-write race.
#[nutype(
    validate(greater_or_equal = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Display,
        Into,
        Serialize,
        Deserialize
    )
)]
pub struct Revision(u64);

impl Revision {
    /// The revision of a document that has never been written.
    pub fn initial() -> Self {
        Self::try_new(0).expect("0 is always a valid revision")
    }

    /// Returns the next revision after this one.
    #[must_use]
    pub fn next(self) -> Self {
        let current: u64 = self.into();
        Self::try_new(current + 1).expect("next revision should always be valid")
    }
}
