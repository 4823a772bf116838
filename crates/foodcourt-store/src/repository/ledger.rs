//! # Ledger Repository
//!
//! `all_orders.txt`: every receipt from every stall, appended in completion
//! order. Written for people; nothing reads it back.

use std::path::PathBuf;
use tracing::debug;

use foodcourt_core::OrderId;

use super::append;
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LedgerRepository { path: path.into() }
    }

    /// Appends a rendered receipt followed by a blank separator line.
    pub fn append_receipt(&self, order_id: OrderId, receipt: &str) -> StoreResult<()> {
        let mut block = String::with_capacity(receipt.len() + 2);
        block.push_str(receipt);
        if !block.ends_with('\n') {
            block.push('\n');
        }
        block.push('\n');

        append(&self.path, &block)?;
        debug!(order_id, "Receipt appended to ledger");
        Ok(())
    }
}
