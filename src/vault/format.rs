//! Vault file format: encrypted JSON record set.
//!
//! A vault file has this layout:
//!
//! ```text
//! [nonce: 12 bytes][AES-256-GCM ciphertext of records JSON][tag: 16 bytes]
//! ```
//!
//! There is no magic, version or header: everything the file carries is
//! what the cipher embeds.  The plaintext is a JSON array of
//! `{"site", "username", "password", "note"}` objects in record order.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

use super::entry::RecordSet;
use crate::crypto::encryption;
use crate::crypto::keys::MasterKey;
use crate::errors::{PassVaultError, Result};

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// Serialize `records` to JSON and encrypt it under `key`.
///
/// A fresh nonce is drawn on every call, so encrypting the same records
/// twice never yields the same bytes.
pub fn encrypt(records: &RecordSet, key: &MasterKey) -> Result<Vec<u8>> {
    let plaintext = Zeroizing::new(
        serde_json::to_vec(records)
            .map_err(|e| PassVaultError::SerializationError(format!("records: {e}")))?,
    );

    encryption::encrypt(key.as_bytes(), &plaintext)
}

/// Decrypt bytes produced by `encrypt` back into a `RecordSet`.
///
/// A plaintext that authenticates but is not a valid record array is
/// also reported as `AuthenticationFailure`, so callers never see a
/// partially decoded set.
pub fn decrypt(ciphertext: &[u8], key: &MasterKey) -> Result<RecordSet> {
    let plaintext = Zeroizing::new(encryption::decrypt(key.as_bytes(), ciphertext)?);

    serde_json::from_slice(&plaintext).map_err(|_| PassVaultError::AuthenticationFailure)
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Read the raw vault bytes.  `Ok(None)` means the file does not exist.
pub fn read_vault(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(PassVaultError::StorageRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Write a vault file to disk **atomically**.
///
/// 1. Write the bytes to a temp file in the same directory.
/// 2. Restrict it to owner read/write (Unix).
/// 3. Rename the temp file over the target path.
///
/// The rename ensures a crash mid-write never leaves a truncated vault.
pub fn write_vault(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp_path = temp_path(path);

    let result = write_temp(&tmp_path, bytes).and_then(|()| fs::rename(&tmp_path, path));

    result.map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        PassVaultError::StorageWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// `<dir>/.<file_name>.tmp`, next to the target so rename stays on
/// one filesystem.
fn temp_path(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ))
}

fn write_temp(tmp_path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(tmp_path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
