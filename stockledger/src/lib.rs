//! `StockLedger` - inventory consistency core for a chat-platform stock bot
//!
//! This library implements the ledger behind a bot that tracks inventory
//! counts and prices: typed stock records persisted in a revisioned
//! key-value document store, bounded increment/decrement arithmetic, and
//! the command surface a dispatcher binds slash commands and display
//! controls to. The chat gateway, the concrete store driver, and message
//! rendering live outside this crate behind the [`store::DocumentStore`]
//! port and the [`display::StockCard`] contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod display;
pub mod errors;
pub mod ledger;
pub mod record;
pub mod retry;
pub mod sales;
pub mod service;
pub mod sort;
pub mod store;
pub mod types;

pub use display::StockCard;
pub use errors::{LedgerError, LedgerResult, StoreError, StoreResult};
pub use ledger::StockLedger;
pub use record::{StockDocument, StockRecord, VersionedDocument};
pub use retry::{RetryConfig, RetryPolicy};
pub use sales::{sales_report, SalesLine, SalesReport};
pub use service::StockService;
pub use store::{DocumentStore, ExpectedRevision};
pub use types::{
    GroupName, ItemDetail, ParseStockIdError, Price, Revision, StockCount, StockId,
    MAX_STOCK_COUNT,
};
