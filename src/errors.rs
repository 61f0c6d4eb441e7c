use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong key, tampered or truncated file, or undecodable plaintext.
    /// An authenticated cipher cannot tell these apart, so neither do we.
    #[error("Unable to decrypt vault: wrong master password or corrupted file")]
    AuthenticationFailure,

    // --- Storage errors ---
    #[error("Cannot read vault file {path}: {source}")]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write vault file {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Record errors ---
    #[error("No entry at position {position} (vault holds {len} entries)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PassVaultError {
    /// Errors that `VaultStore::load` recovers from by falling back to an
    /// empty record set.
    pub fn is_recoverable_on_load(&self) -> bool {
        matches!(self, Self::AuthenticationFailure | Self::StorageRead { .. })
    }
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
