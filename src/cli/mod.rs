//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use dialoguer::Confirm;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::vault::{CredentialEntry, RecordSet, Session};

/// Environment variable holding the master password for scripted use.
pub const PASSWORD_ENV: &str = "PASSVAULT_PASSWORD";

/// PassVault CLI: encrypted local password manager.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Encrypted local password manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory holding the vault file and passvault.toml
    #[arg(long, env = "PASSVAULT_DIR", default_value = ".", global = true)]
    pub dir: String,

    /// Vault file name inside the vault directory (overrides passvault.toml)
    #[arg(long, global = true)]
    pub file: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// List stored credentials
    List {
        /// Only show entries whose site, username or note contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Show passwords in clear text instead of masking them
        #[arg(long)]
        show_passwords: bool,
    },

    /// Add a credential
    Add(AddArgs),

    /// Change fields of a credential
    Edit(EditArgs),

    /// Delete a credential
    Delete {
        /// Entry number as shown by `list`
        number: usize,
        /// Skip confirmation prompts
        #[arg(short, long)]
        force: bool,
    },

    /// Show every field of one credential
    Show {
        /// Entry number as shown by `list`
        number: usize,
    },

    /// Copy a credential's password to the clipboard
    Copy {
        /// Entry number as shown by `list`
        number: usize,
    },

    /// Print a random password
    Generate {
        /// Number of characters (default: from passvault.toml, else 12)
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum, ignore_case = true)]
        shell: clap_complete::Shell,
    },
}

/// Arguments of `passvault add`.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Site or service name
    #[arg(long)]
    pub site: String,

    /// Account user name
    #[arg(short, long)]
    pub username: String,

    /// Password (omit for piped input or an interactive prompt)
    #[arg(short, long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Generate a random password
    #[arg(short, long)]
    pub generate: bool,

    /// Length of the generated password
    #[arg(short, long, requires = "generate")]
    pub length: Option<usize>,

    /// Free-form note
    #[arg(short, long, default_value = "")]
    pub note: String,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments of `passvault edit`.  Omitted fields keep their value.
#[derive(clap::Args)]
pub struct EditArgs {
    /// Entry number as shown by `list`
    pub number: usize,

    /// New site or service name
    #[arg(long)]
    pub site: Option<String>,

    /// New user name
    #[arg(short, long)]
    pub username: Option<String>,

    /// New password
    #[arg(short, long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Replace the password with a generated one
    #[arg(short, long)]
    pub generate: bool,

    /// Length of the generated password
    #[arg(short, long, requires = "generate")]
    pub length: Option<usize>,

    /// New note (pass "" to clear it)
    #[arg(short, long)]
    pub note: Option<String>,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Everything a command needs once the vault is unlocked.
pub struct Unlocked {
    pub session: Session,
    pub settings: Settings,
    /// Why the vault could not be loaded, if it fell back to empty.
    pub fallback: Option<PassVaultError>,
}

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripts, tests)
/// 2. Interactive prompt
///
/// The prompt refuses an empty password.  Returns `Zeroizing<String>`
/// so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var(PASSWORD_ENV) {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// The vault directory from `--dir` / `PASSVAULT_DIR`.
pub fn vault_dir(cli: &Cli) -> PathBuf {
    PathBuf::from(&cli.dir)
}

/// Load `passvault.toml` from the vault directory, applying `--file`.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(&vault_dir(cli))?;
    if let Some(file) = &cli.file {
        if file.trim().is_empty() {
            return Err(PassVaultError::InvalidInput(
                "--file cannot be empty".into(),
            ));
        }
        settings.vault_file = file.clone();
    }
    Ok(settings)
}

/// Prompt for the master password and open the vault.
///
/// An undecryptable vault is not an error here: the warning is printed
/// and the session starts empty, as `Session::open` defines.
pub fn unlock(cli: &Cli) -> Result<Unlocked> {
    let settings = load_settings(cli)?;
    let path = settings.vault_path(&vault_dir(cli));

    let password = prompt_password()?;
    let (session, fallback) = Session::open(&path, &password);

    if let Some(err) = &fallback {
        output::warning(&err.to_string());
        output::tip("Showing an empty vault. The file on disk is unchanged until you save.");
    }

    Ok(Unlocked {
        session,
        settings,
        fallback,
    })
}

/// Before a save, make sure the vault directory exists and that the user
/// really wants to overwrite a vault that could not be decrypted.
///
/// Returns `false` if the user declined.
pub fn prepare_write(unlocked: &Unlocked, force: bool) -> Result<bool> {
    if unlocked.fallback.is_some() && unlocked.session.store().exists() && !force {
        let confirmed = Confirm::new()
            .with_prompt("The existing vault could not be opened. Overwrite it?")
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            return Ok(false);
        }
    }

    ensure_parent_dir(unlocked.session.store().path())?;
    Ok(true)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            output::info(&format!("Created vault directory: {}", parent.display()));
        }
    }
    Ok(())
}

/// Convert a 1-based entry number from the command line to a position.
pub fn entry_position(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| PassVaultError::InvalidInput("entry numbers start at 1".into()))
}

/// Look up an entry by its 1-based number, reporting misses in the same
/// numbering.
pub fn entry_at(records: &RecordSet, number: usize) -> Result<&CredentialEntry> {
    let position = entry_position(number)?;
    records.get(position).map_err(|_| {
        PassVaultError::InvalidInput(format!(
            "no entry {number} (vault holds {} entries)",
            records.len()
        ))
    })
}

/// Reject empty or whitespace-only values for required fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PassVaultError::InvalidInput(format!(
            "{field} cannot be empty"
        )));
    }
    Ok(())
}
