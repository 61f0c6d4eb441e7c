//! `passvault list`: display stored credentials in a table.

use crate::cli::output;
use crate::cli::{unlock, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, search: Option<&str>, show_passwords: bool) -> Result<()> {
    let unlocked = unlock(cli)?;
    let records = unlocked.session.records();

    let rows = records.search(search.unwrap_or_default());

    match search {
        Some(keyword) if !keyword.is_empty() => output::info(&format!(
            "{} of {} entries match '{keyword}'",
            rows.len(),
            records.len()
        )),
        _ => output::info(&format!("{} entries", records.len())),
    }

    output::print_entries_table(&rows, show_passwords || unlocked.settings.show_passwords);

    Ok(())
}
