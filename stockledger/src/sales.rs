//! Sales reporting over stock records.

use crate::record::StockRecord;

/// Revenue attributed to a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesLine {
    /// "group (detail)" label identifying the record.
    pub label: String,
    /// `count * price` for the record.
    pub revenue: i128,
}

/// Per-record revenue lines plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SalesReport {
    /// One line per record, in input order.
    pub lines: Vec<SalesLine>,
    /// Sum of all line revenues.
    pub total: i128,
}

/// Computes revenue per record and the grand total.
pub fn sales_report(records: &[StockRecord]) -> SalesReport {
    let lines: Vec<SalesLine> = records
        .iter()
        .map(|record| SalesLine {
            label: format!("{} ({})", record.group, record.detail),
            revenue: record.revenue(),
        })
        .collect();
    let total = lines.iter().map(|line| line.revenue).sum();
    SalesReport { lines, total }
}
