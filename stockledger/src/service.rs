//! Dispatcher-facing command surface.
//!
//! Chat commands and control activations arrive as raw strings; this layer
//! parses them into validated types, maps them onto ledger operations, and
//! returns payloads ready for rendering. The dispatcher owns everything
//! user-visible (message text, error wording, localization); this module
//! owns only the translation from strings to the typed core.

use crate::display::StockCard;
use crate::errors::{LedgerError, LedgerResult};
use crate::ledger::StockLedger;
use crate::record::StockRecord;
use crate::sales::{sales_report, SalesReport};
use crate::sort;
use crate::store::DocumentStore;
use crate::types::{GroupName, ItemDetail, Price, StockId};

/// The command surface a dispatcher binds slash commands and controls to.
#[derive(Clone)]
pub struct StockService<S> {
    ledger: StockLedger<S>,
}

impl<S: DocumentStore> StockService<S> {
    /// Wraps a ledger in the command surface.
    pub const fn new(ledger: StockLedger<S>) -> Self {
        Self { ledger }
    }

    /// Returns the wrapped ledger.
    pub const fn ledger(&self) -> &StockLedger<S> {
        &self.ledger
    }

    /// Adds a stock item and returns its display card as confirmation.
    pub async fn add_stock(
        &self,
        group: &str,
        detail: &str,
        price: i64,
    ) -> LedgerResult<StockCard> {
        let group = GroupName::try_new(group)
            .map_err(|error| LedgerError::InvalidField(format!("group: {error}")))?;
        let detail = ItemDetail::try_new(detail)
            .map_err(|error| LedgerError::InvalidField(format!("detail: {error}")))?;
        let record = self.ledger.add_stock(group, detail, Price::new(price)).await?;
        Ok(StockCard::render(&record))
    }

    /// Removes a stock item by its id string.
    pub async fn remove_stock(&self, id: &str) -> LedgerResult<()> {
        self.ledger.remove_stock(&parse_id(id)?).await
    }

    /// Returns a text listing of every stock item, one line per record.
    pub async fn get_all_stocks(&self) -> LedgerResult<String> {
        let records = self.ledger.list_stocks().await?;
        let lines: Vec<String> = records
            .iter()
            .map(|record| {
                let count: u64 = record.count.into();
                format!("{} ({}) - {} in stock", record.detail, record.price, count)
            })
            .collect();
        Ok(lines.join("\n"))
    }

    /// Computes per-record revenue and the grand total.
    pub async fn calc_total_sales(&self) -> LedgerResult<SalesReport> {
        Ok(sales_report(&self.ledger.list_stocks().await?))
    }

    /// All cards, ordered by count descending, for re-rendering.
    pub async fn sorted_by_count(&self) -> LedgerResult<Vec<StockCard>> {
        Ok(render_all(&sort::by_count(self.ledger.list_stocks().await?)))
    }

    /// All cards, ordered by price descending, for re-rendering.
    pub async fn sorted_by_price(&self) -> LedgerResult<Vec<StockCard>> {
        Ok(render_all(&sort::by_price(self.ledger.list_stocks().await?)))
    }

    /// All cards, ordered by group ascending, for re-rendering.
    pub async fn sorted_by_group(&self) -> LedgerResult<Vec<StockCard>> {
        Ok(render_all(&sort::by_group(self.ledger.list_stocks().await?)))
    }

    /// Handles an increment control activation.
    ///
    /// `id` is the capability token the control carried (a card footer read
    /// back verbatim); the updated card replaces the one on screen.
    pub async fn handle_increment(&self, id: &str, delta: u64) -> LedgerResult<StockCard> {
        let record = self.ledger.increment_stock(&parse_id(id)?, delta).await?;
        Ok(StockCard::render(&record))
    }

    /// Handles a decrement control activation.
    pub async fn handle_decrement(&self, id: &str, delta: u64) -> LedgerResult<StockCard> {
        let record = self.ledger.decrement_stock(&parse_id(id)?, delta).await?;
        Ok(StockCard::render(&record))
    }
}

fn parse_id(input: &str) -> LedgerResult<StockId> {
    StockId::parse(input).map_err(|error| LedgerError::InvalidField(format!("id: {error}")))
}

fn render_all(records: &[StockRecord]) -> Vec<StockCard> {
    records.iter().map(StockCard::render).collect()
}
