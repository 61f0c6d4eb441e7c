//! Session context: the key, the in-memory records, and the store.
//!
//! Every mutation persists the whole record set before returning, so a
//! successful return means the change is on disk.  When the save fails
//! the mutation stays in memory and the write error is returned.

use std::path::Path;

use tracing::{debug, info};

use crate::crypto::{derive_master_key, MasterKey};
use crate::errors::{PassVaultError, Result};

use super::entry::{CredentialEntry, EntryUpdate, RecordSet};
use super::store::VaultStore;

/// One unlocked vault.  Created once per run with `Session::open`.
pub struct Session {
    store: VaultStore,
    key: MasterKey,
    records: RecordSet,
}

impl Session {
    /// Derive the key from `master_password` and load the vault at `path`.
    ///
    /// Never fails.  If the file exists but cannot be read or decrypted,
    /// the session starts empty and the reason is returned alongside it.
    pub fn open(path: &Path, master_password: &str) -> (Self, Option<PassVaultError>) {
        Self::with_key(path, derive_master_key(master_password))
    }

    /// Like `open`, with an already-derived key.
    pub fn with_key(path: &Path, key: MasterKey) -> (Self, Option<PassVaultError>) {
        let store = VaultStore::new(path);
        let outcome = store.load(&key);

        info!(
            path = %path.display(),
            entries = outcome.records.len(),
            fallback = outcome.is_fallback(),
            "session opened"
        );

        let session = Self {
            store,
            key,
            records: outcome.records,
        };
        (session, outcome.fallback)
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    pub fn key(&self) -> &MasterKey {
        &self.key
    }

    pub fn store(&self) -> &VaultStore {
        &self.store
    }

    /// Append `entry`, persist, and return its position.
    pub fn add_entry(&mut self, entry: CredentialEntry) -> Result<usize> {
        let position = self.records.push(entry);
        debug!(position, "entry added");
        self.save()?;
        Ok(position)
    }

    /// Apply `update` to the entry at `position` and persist.
    pub fn update_entry(&mut self, position: usize, update: EntryUpdate) -> Result<()> {
        self.records.update(position, update)?;
        debug!(position, "entry updated");
        self.save()
    }

    /// Remove the entry at `position`, persist, and return it.
    ///
    /// On a failed save the entry is already gone from memory.
    pub fn remove_entry(&mut self, position: usize) -> Result<CredentialEntry> {
        let removed = self.records.remove(position)?;
        debug!(position, "entry removed");
        self.save()?;
        Ok(removed)
    }

    /// Re-encrypt and write the current record set.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.records, &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(site: &str) -> CredentialEntry {
        CredentialEntry::new(site, "user", "secret", "")
    }

    #[test]
    fn add_persists_immediately() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vault.dat");

        let (mut session, warning) = Session::open(&path, "master");
        assert!(warning.is_none());
        assert_eq!(session.add_entry(entry("a")).unwrap(), 0);
        assert_eq!(session.add_entry(entry("b")).unwrap(), 1);

        let reloaded = session.store().try_load(session.key()).unwrap();
        assert_eq!(&reloaded, session.records());
    }

    #[test]
    fn bad_position_does_not_save() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vault.dat");

        let (mut session, _) = Session::open(&path, "master");
        assert!(session.remove_entry(0).is_err());
        assert!(session.update_entry(0, EntryUpdate::default()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn with_key_matches_open() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("vault.dat");

        let (mut first, _) = Session::open(&path, "master");
        first.add_entry(entry("a")).unwrap();

        let (second, warning) = Session::with_key(&path, derive_master_key("master"));
        assert!(warning.is_none());
        assert_eq!(second.records(), first.records());
    }
}
