//! Vault module: encrypted credential storage.
//!
//! This module provides:
//! - `CredentialEntry` and the ordered `RecordSet` (`entry`)
//! - Record set encryption and vault file I/O (`format`)
//! - `VaultStore` for loading and saving a vault file (`store`)
//! - `Session`, the unlocked vault a front end works against (`session`)

pub mod entry;
pub mod format;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use entry::{CredentialEntry, EntryUpdate, RecordSet};
pub use session::Session;
pub use store::{LoadOutcome, VaultStore};
