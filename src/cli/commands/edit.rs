//! `passvault edit`: change fields of an existing credential.

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{
    entry_at, entry_position, load_settings, prepare_write, require_non_empty, unlock, Cli,
    EditArgs,
};
use crate::crypto::generate_password;
use crate::errors::{PassVaultError, Result};
use crate::vault::EntryUpdate;

/// Execute the `edit` command.
pub fn execute(cli: &Cli, args: &EditArgs) -> Result<()> {
    let position = entry_position(args.number)?;
    let update = build_update(cli, args)?;

    if update.is_empty() {
        output::info("Nothing to change.");
        output::tip("Pass at least one of --site, --username, --password, --generate, --note.");
        return Ok(());
    }

    let mut unlocked = unlock(cli)?;
    // Fail on a bad number before asking anything else.
    entry_at(unlocked.session.records(), args.number)?;

    if !prepare_write(&unlocked, args.force)? {
        output::info("Cancelled.");
        return Ok(());
    }

    unlocked.session.update_entry(position, update)?;

    let entry = unlocked.session.records().get(position)?;
    output::success(&format!(
        "Updated entry {} ({} / {})",
        args.number, entry.site, entry.username
    ));

    Ok(())
}

fn build_update(cli: &Cli, args: &EditArgs) -> Result<EntryUpdate> {
    if let Some(site) = &args.site {
        require_non_empty("site", site)?;
    }
    if let Some(username) = &args.username {
        require_non_empty("username", username)?;
    }

    let password: Option<Zeroizing<String>> = if args.generate {
        let length = match args.length {
            Some(n) => n,
            None => load_settings(cli)?.password_length,
        };
        Some(generate_password(length)?)
    } else {
        match &args.password {
            Some(p) if p.is_empty() => {
                return Err(PassVaultError::InvalidInput(
                    "password cannot be empty".into(),
                ));
            }
            Some(p) => {
                output::warning(
                    "Password provided on command line: it may appear in shell history.",
                );
                Some(Zeroizing::new(p.clone()))
            }
            None => None,
        }
    };

    Ok(EntryUpdate {
        site: args.site.clone(),
        username: args.username.clone(),
        password: password.as_deref().map(String::from),
        note: args.note.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn update_from(argv: &[&str]) -> Result<EntryUpdate> {
        let cli = Cli::try_parse_from(argv).unwrap();
        match &cli.command {
            crate::cli::Commands::Edit(args) => build_update(&cli, args),
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn generated_password_has_requested_length() {
        let update =
            update_from(&["passvault", "edit", "1", "--generate", "--length", "18"]).unwrap();
        assert_eq!(update.password.unwrap().chars().count(), 18);
        assert!(update.site.is_none());
    }

    #[test]
    fn empty_inline_password_is_rejected() {
        assert!(update_from(&["passvault", "edit", "1", "--password", ""]).is_err());
    }
}
