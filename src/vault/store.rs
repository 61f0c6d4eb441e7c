//! Load and save the record set against a single vault file.
//!
//! `VaultStore` is a codec plus file I/O boundary.  It holds only the
//! path; the key is passed to every call and the plaintext records are
//! handed straight back to the caller.

use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use crate::crypto::keys::MasterKey;
use crate::errors::{PassVaultError, Result};

use super::entry::RecordSet;
use super::format;

/// Result of `VaultStore::load`.
///
/// `fallback` is set when the file existed but could not be read or
/// decrypted.  `records` is then empty and the file on disk is left
/// exactly as it was.
#[derive(Debug)]
pub struct LoadOutcome {
    pub records: RecordSet,
    pub fallback: Option<PassVaultError>,
}

impl LoadOutcome {
    /// `true` if the records are an empty stand-in for an unreadable vault.
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Handle to the vault file at one path.
#[derive(Debug, Clone)]
pub struct VaultStore {
    path: PathBuf,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if a vault file is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the record set, propagating every failure.
    ///
    /// A missing file is the first-run state and yields an empty set.
    pub fn try_load(&self, key: &MasterKey) -> Result<RecordSet> {
        let Some(bytes) = format::read_vault(&self.path)? else {
            debug!(path = %self.path.display(), "no vault file, starting empty");
            return Ok(RecordSet::new());
        };

        let records = format::decrypt(&bytes, key)?;
        debug!(
            path = %self.path.display(),
            entries = records.len(),
            "vault loaded"
        );
        Ok(records)
    }

    /// Load the record set, falling back to an empty set when the file
    /// cannot be read or decrypted.
    ///
    /// Never fails.  The reason for a fallback is returned in
    /// `LoadOutcome::fallback` so the caller can warn the user.
    pub fn load(&self, key: &MasterKey) -> LoadOutcome {
        match self.try_load(key) {
            Ok(records) => LoadOutcome {
                records,
                fallback: None,
            },
            Err(err) => {
                if err.is_recoverable_on_load() {
                    warn!(path = %self.path.display(), error = %err, "vault unreadable, using empty record set");
                } else {
                    error!(path = %self.path.display(), error = %err, "unexpected vault load error, using empty record set");
                }
                LoadOutcome {
                    records: RecordSet::new(),
                    fallback: Some(err),
                }
            }
        }
    }

    /// Encrypt the whole record set and overwrite the vault file.
    pub fn save(&self, records: &RecordSet, key: &MasterKey) -> Result<()> {
        let bytes = format::encrypt(records, key)?;

        if let Err(err) = format::write_vault(&self.path, &bytes) {
            warn!(path = %self.path.display(), error = %err, "vault save failed");
            return Err(err);
        }

        debug!(
            path = %self.path.display(),
            entries = records.len(),
            bytes = bytes.len(),
            "vault saved"
        );
        Ok(())
    }
}
