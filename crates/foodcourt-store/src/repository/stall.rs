//! # Stall Repository
//!
//! `stall_<N>.txt`: the full order history of one stall, rewritten after
//! every completed order.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use foodcourt_core::record::{decode, encode};
use foodcourt_core::{Stall, StallKind};

use super::{overwrite, read_optional};
use crate::error::{StoreError, StoreResult};
use crate::layout::StoreConfig;

#[derive(Debug, Clone)]
pub struct StallRepository {
    config: StoreConfig,
}

impl StallRepository {
    pub fn new(config: StoreConfig) -> Self {
        StallRepository { config }
    }

    /// Loads one stall's history.
    ///
    /// ## Returns
    /// * `Ok(None)` - no file yet
    /// * `Ok(Some(stall))` - decoded history
    /// * `Err(CorruptRecord)` - file does not decode, or belongs to another stall
    pub fn load(&self, kind: StallKind) -> StoreResult<Option<Stall>> {
        let path = self.config.stall_path(kind);
        let Some(text) = read_optional(&path)? else {
            debug!(stall = kind.number(), "No stall file yet");
            return Ok(None);
        };

        let stall: Stall = decode(&text).map_err(|e| StoreError::corrupt(&path, e.to_string()))?;
        if stall.kind() != kind {
            return Err(StoreError::corrupt(
                &path,
                format!("holds stall {} instead of {}", stall.number(), kind.number()),
            ));
        }

        info!(
            stall = %stall.name(),
            orders = stall.order_count(),
            "Stall history loaded"
        );
        Ok(Some(stall))
    }

    /// Copies the stall's file to `stall_<N>.txt.corrupt`, replacing any
    /// earlier copy. Returns the copy's path.
    ///
    /// Called when [`load`](Self::load) reports the file corrupt, so the
    /// next [`save`](Self::save) does not destroy the only copy of its history.
    pub fn preserve_corrupt(&self, kind: StallKind) -> StoreResult<PathBuf> {
        let copy = self.config.corrupt_stall_path(kind);
        fs::copy(self.config.stall_path(kind), &copy).map_err(|e| StoreError::io(&copy, e))?;
        Ok(copy)
    }

    /// Rewrites the stall's file with its whole history.
    pub fn save(&self, stall: &Stall) -> StoreResult<()> {
        let path = self.config.stall_path(stall.kind());
        overwrite(&path, &encode(stall))?;
        debug!(stall = %stall.name(), orders = stall.order_count(), "Stall file saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use foodcourt_core::{Counters, Money, Order, Selection};

    #[test]
    fn test_save_and_reload_history() {
        let dir = tempfile::tempdir().unwrap();
        let repo = StallRepository::new(StoreConfig::new(dir.path()));
        let mut counters = Counters::new();

        let mut stall = Stall::new(StallKind::Sandwich);
        let at = Utc.with_ymd_and_hms(2026, 10, 16, 13, 0, 0).unwrap();
        let mut order = Order::new(counters.allocate_order_id(), "Asha", "100", at);
        order
            .add_line(StallKind::Sandwich.build_item(Selection::item(4)).unwrap(), 2)
            .unwrap();
        stall.record_order(order, &mut counters);
        repo.save(&stall).unwrap();

        let loaded = repo.load(StallKind::Sandwich).unwrap().unwrap();
        assert_eq!(loaded, stall);
        assert_eq!(loaded.total_sales(), Money::from_rupees(240));
        assert!(repo.load(StallKind::Dosa).unwrap().is_none());
    }

    #[test]
    fn test_wrong_stall_number_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        std::fs::write(config.stall_path(StallKind::Pizza), "Dosa Corner\n2\n0\n").unwrap();

        let repo = StallRepository::new(config);
        assert!(matches!(
            repo.load(StallKind::Pizza),
            Err(StoreError::CorruptRecord { .. })
        ));
    }

    #[test]
    fn test_truncated_file_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        std::fs::write(config.stall_path(StallKind::Dosa), "Dosa Corner\n2\n1\n7\n").unwrap();

        let repo = StallRepository::new(config);
        assert!(repo.load(StallKind::Dosa).is_err());
    }

    #[test]
    fn test_preserve_corrupt_copies_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::new(dir.path());
        std::fs::write(config.stall_path(StallKind::Dosa), "Dosa Corner\n2\n1\n7\n").unwrap();

        let repo = StallRepository::new(config.clone());
        let copy = repo.preserve_corrupt(StallKind::Dosa).unwrap();
        assert_eq!(copy, config.corrupt_stall_path(StallKind::Dosa));

        repo.save(&Stall::new(StallKind::Dosa)).unwrap();
        assert_eq!(std::fs::read_to_string(&copy).unwrap(), "Dosa Corner\n2\n1\n7\n");

        assert!(repo.preserve_corrupt(StallKind::Pizza).is_err());
    }
}
