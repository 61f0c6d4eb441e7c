//! Master password to key derivation.
//!
//! The key is a single unsalted SHA-256 pass over the UTF-8 bytes of the
//! master password.  This is fast, so low-entropy master passwords are
//! cheap to guess offline.  Any other derivation changes every key and
//! cannot open existing vault files; a salted memory-hard KDF would also
//! need its salt stored next to the ciphertext.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use super::keys::{MasterKey, KEY_LEN};

/// Derive the session's `MasterKey` from the master password.
///
/// Deterministic and infallible: the same password always yields the
/// same key, including the empty password.
pub fn derive_master_key(master_password: &str) -> MasterKey {
    let digest = Sha256::digest(master_password.as_bytes());

    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&digest);
    let key = MasterKey::new(bytes);
    bytes.zeroize();
    key
}
