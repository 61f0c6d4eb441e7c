//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - SHA-256 master key derivation (`kdf`)
//! - The zeroizing `MasterKey` wrapper (`keys`)
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - Random password generation (`generator`)

pub mod encryption;
pub mod generator;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_master_key, ...};
pub use encryption::{decrypt, encrypt};
pub use generator::{generate_password, DEFAULT_PASSWORD_LEN};
pub use kdf::derive_master_key;
pub use keys::MasterKey;
