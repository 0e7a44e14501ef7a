//! Pure sorting utilities over stock records.
//!
//! The ledger lists records unordered; these helpers produce the display
//! orderings. All sorts are stable, so ties keep their incoming relative
//! order.

use crate::record::StockRecord;

/// Sorts by count, highest first.
pub fn by_count(mut records: Vec<StockRecord>) -> Vec<StockRecord> {
    records.sort_by(|a, b| b.count.cmp(&a.count));
    records
}

/// Sorts by price, highest first.
pub fn by_price(mut records: Vec<StockRecord>) -> Vec<StockRecord> {
    records.sort_by(|a, b| b.price.cmp(&a.price));
    records
}

/// Sorts by group label, lexicographically ascending.
pub fn by_group(mut records: Vec<StockRecord>) -> Vec<StockRecord> {
    records.sort_by(|a, b| a.group.cmp(&b.group));
    records
}
