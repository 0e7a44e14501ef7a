//! Display payloads binding rendered cards to ledger records.
//!
//! The core does not render platform messages; it exposes a [`StockCard`]
//! per record and a contract: the `footer` carries the record id in its
//! canonical string form, and whatever the platform layer does with the
//! card, that footer must come back verbatim so [`StockCard::footer_id`] can
//! recover the id. That round trip is the only link between an on-screen
//! card and the record its increment/decrement controls mutate.

use crate::record::StockRecord;
use crate::types::{ParseStockIdError, StockId};

/// A renderable card for one stock record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockCard {
    /// Headline: detail alone when the item is not for sale, otherwise
    /// group, detail, and unit price.
    pub title: String,
    /// The current count.
    pub count_line: String,
    /// Revenue attributed to the record (`count * price`).
    pub revenue_line: String,
    /// The record id in canonical string form. Must survive rendering
    /// verbatim.
    pub footer: String,
}

impl StockCard {
    /// Renders a record into a card.
    pub fn render(record: &StockRecord) -> Self {
        let title = if record.price.is_unpriced() {
            record.detail.to_string()
        } else {
            format!("{} ({}) - \u{a5}{}", record.group, record.detail, record.price)
        };
        let count: u64 = record.count.into();
        Self {
            title,
            count_line: format!("Count: {count}"),
            revenue_line: format!("Revenue: \u{a5}{}", record.revenue()),
            footer: record.id.to_string(),
        }
    }

    /// Recovers the record id embedded in the footer.
    pub fn footer_id(&self) -> Result<StockId, ParseStockIdError> {
        StockId::parse(&self.footer)
    }
}
