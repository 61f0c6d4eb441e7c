use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// Vault directory configuration, loaded from `passvault.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// File name of the encrypted vault inside the vault directory.
    #[serde(default = "default_vault_file")]
    pub vault_file: String,

    /// Length of passwords produced by `--generate` and `generate`.
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Show passwords in `list` without `--show-passwords`.
    #[serde(default)]
    pub show_passwords: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_file() -> String {
    "encrypted_data.dat".to_string()
}

fn default_password_length() -> usize {
    crate::crypto::DEFAULT_PASSWORD_LEN
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_file: default_vault_file(),
            password_length: default_password_length(),
            show_passwords: false,
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the vault directory.
    pub const FILE_NAME: &'static str = "passvault.toml";

    /// Load settings from `<vault_dir>/passvault.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(vault_dir: &Path) -> Result<Self> {
        let config_path = vault_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        if settings.vault_file.trim().is_empty() {
            return Err(PassVaultError::ConfigError(format!(
                "{}: vault_file cannot be empty",
                config_path.display()
            )));
        }

        Ok(settings)
    }

    /// Full path to the vault file.
    ///
    /// Example: `vault_dir/encrypted_data.dat`
    pub fn vault_path(&self, vault_dir: &Path) -> PathBuf {
        vault_dir.join(&self.vault_file)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
