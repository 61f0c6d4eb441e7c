//! `passvault delete`: remove a credential from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{entry_at, entry_position, prepare_write, unlock, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, number: usize, force: bool) -> Result<()> {
    let position = entry_position(number)?;
    let mut unlocked = unlock(cli)?;

    let entry = entry_at(unlocked.session.records(), number)?;
    let label = format!("{} ({})", entry.site, entry.username);

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete entry {number}: {label}?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    if !prepare_write(&unlocked, force)? {
        output::info("Cancelled.");
        return Ok(());
    }

    unlocked.session.remove_entry(position)?;
    output::success(&format!(
        "Deleted entry {number}: {label} ({} remaining)",
        unlocked.session.records().len()
    ));

    Ok(())
}
