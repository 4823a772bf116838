//! # Customer Repository
//!
//! `customers.txt` (the phone directory, rewritten on every registration) and
//! `customer_data.txt` (one profile appended per new customer).

use std::path::PathBuf;
use tracing::{debug, info};

use foodcourt_core::record::encode;
use foodcourt_core::{CustomerProfile, CustomerRegistry};

use super::{append, overwrite, read_optional};
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct CustomerRepository {
    directory_path: PathBuf,
    journal_path: PathBuf,
}

impl CustomerRepository {
    pub fn new(directory_path: impl Into<PathBuf>, journal_path: impl Into<PathBuf>) -> Self {
        CustomerRepository {
            directory_path: directory_path.into(),
            journal_path: journal_path.into(),
        }
    }

    /// Loads the directory and restores ids from the journal.
    ///
    /// Missing files give an empty registry.
    pub fn load(&self) -> StoreResult<CustomerRegistry> {
        let mut registry = read_optional(&self.directory_path)?
            .map(|text| CustomerRegistry::decode_directory(&text))
            .unwrap_or_default();

        let profiles = read_optional(&self.journal_path)?
            .map(|text| CustomerProfile::decode_journal(&text))
            .unwrap_or_default();
        let restored = registry.restore_ids(&profiles);

        info!(
            customers = registry.len(),
            ids_restored = restored,
            "Customer registry loaded"
        );
        Ok(registry)
    }

    /// Rewrites the directory file.
    pub fn save(&self, registry: &CustomerRegistry) -> StoreResult<()> {
        overwrite(&self.directory_path, &registry.encode_directory())?;
        debug!(customers = registry.len(), "Customer directory saved");
        Ok(())
    }

    /// Appends one profile to the journal.
    pub fn append_profile(&self, profile: &CustomerProfile) -> StoreResult<()> {
        append(&self.journal_path, &encode(profile))?;
        debug!(customer_id = profile.id, phone = %profile.phone, "Customer profile journaled");
        Ok(())
    }
}
