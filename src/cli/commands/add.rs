//! `passvault add`: store a new credential.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{load_settings, prepare_write, require_non_empty, unlock, AddArgs, Cli};
use crate::crypto::generate_password;
use crate::errors::{PassVaultError, Result};
use crate::vault::CredentialEntry;

/// Execute the `add` command.
pub fn execute(cli: &Cli, args: &AddArgs) -> Result<()> {
    require_non_empty("site", &args.site)?;
    require_non_empty("username", &args.username)?;

    let password = if args.generate {
        let length = match args.length {
            Some(n) => n,
            None => load_settings(cli)?.password_length,
        };
        generate_password(length)?
    } else {
        read_password(args.password.as_deref(), &args.site)?
    };

    if password.is_empty() {
        return Err(PassVaultError::InvalidInput("password cannot be empty".into()));
    }

    let mut unlocked = unlock(cli)?;
    if !prepare_write(&unlocked, args.force)? {
        output::info("Cancelled.");
        return Ok(());
    }

    let entry = CredentialEntry::new(
        args.site.as_str(),
        args.username.as_str(),
        password.as_str(),
        args.note.as_str(),
    );
    let position = unlocked.session.add_entry(entry)?;

    output::success(&format!(
        "Saved {} as entry {} ({} total)",
        args.site,
        position + 1,
        unlocked.session.records().len()
    ));
    if args.generate {
        output::tip(&format!("Run `passvault copy {}` to copy it.", position + 1));
    }

    Ok(())
}

/// Determine the password from one of three sources.
fn read_password(inline: Option<&str>, site: &str) -> Result<Zeroizing<String>> {
    if let Some(v) = inline {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line: it may appear in shell history.");
        return Ok(Zeroizing::new(v.to_string()));
    }

    if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = Zeroizing::new(String::new());
        io::stdin().read_to_string(&mut buf)?;
        return Ok(Zeroizing::new(strip_line_ending(&buf).to_string()));
    }

    // Source 3: Interactive secure prompt (default).
    let pw = dialoguer::Password::new()
        .with_prompt(format!("Password for {site}"))
        .with_confirmation("Confirm password", "Passwords do not match, try again")
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("input prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Drop the single `\n` or `\r\n` that ends piped input.  Any other
/// trailing whitespace belongs to the password.
fn strip_line_ending(input: &str) -> &str {
    match input.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => input,
    }
}
