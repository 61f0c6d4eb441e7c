//! `passvault show`: print every field of one credential.

use crate::cli::output;
use crate::cli::{entry_at, unlock, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, number: usize) -> Result<()> {
    let unlocked = unlock(cli)?;

    let entry = entry_at(unlocked.session.records(), number)?;
    output::print_entry_detail(number, entry);

    Ok(())
}
